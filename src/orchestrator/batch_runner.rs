//! 批处理编排器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量日志的处理和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动日志、清理下载目录、加载任务、启动浏览器
//! 2. **顺序处理**：逐条走完每条日志，阵容不一致的跳过
//! 3. **资源管理**：无论成功失败，浏览器会话恰好关闭一次
//! 4. **全局统计**：汇总处理结果并写入 JSON 报告
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单条日志的细节，向下委托 LogFlow
//! - **严格顺序**：浏览器只有一个可导航的文档，日志之间不能并发
//! - **失败语义**：阵容不一致只跳过当前日志；
//!   元素定位失败视为致命错误，中止批次但仍然关闭会话

use crate::browser;
use crate::config::Config;
use crate::error::AppError;
use crate::infrastructure::{CdpClient, PageClient};
use crate::models::{load_batch_job, BatchJob};
use crate::services::{exporter, CompositionGuard};
use crate::workflow::{LogCtx, LogFlow, ProcessResult};
use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    job: BatchJob,
    client: CdpClient,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        // 加载批处理任务（筛选类型非法时在这里失败，不会启动浏览器）
        let job = load_batch_job(Path::new(&config.batch_file)).await?;

        // 清理上一次运行留下的导出文件
        exporter::clean_download_dir(Path::new(&config.download_dir))?;

        // 启动浏览器
        let (browser, handler, page) = browser::launch_browser(&config, job.headless).await?;
        let client = CdpClient::new(browser, handler, page, &config);

        Ok(Self {
            config,
            job,
            client,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        let stats = run_batch(&self.client, &self.job, &self.config).await?;

        write_report(&stats, &self.config.report_file)?;
        print_final_stats(&stats, &self.config);

        Ok(())
    }
}

/// 处理统计
#[derive(Debug, Default, Serialize)]
pub struct BatchStats {
    pub total: usize,
    pub exported: usize,
    pub skipped: usize,
    pub outcomes: Vec<LogOutcome>,
}

/// 单条日志的处理结果
#[derive(Debug, Serialize)]
pub struct LogOutcome {
    pub url: String,
    pub status: String,
}

/// 运行整个批次
///
/// 无论批次在哪一步失败，浏览器会话都会在错误向上传播之前
/// 恰好关闭一次（shutdown 本身幂等，日志列表为空时也会关闭）
pub async fn run_batch(
    client: &dyn PageClient,
    job: &BatchJob,
    config: &Config,
) -> Result<BatchStats> {
    let outcome = process_logs(client, job, config).await;

    // 等一小段时间，让最后触发的下载落盘
    sleep(Duration::from_millis(config.settle_delay_ms)).await;

    if let Err(e) = client.shutdown().await {
        error!("关闭浏览器会话失败: {}", e);
    }

    outcome
}

/// 顺序处理所有日志
async fn process_logs(
    client: &dyn PageClient,
    job: &BatchJob,
    config: &Config,
) -> Result<BatchStats> {
    let total = job.logs.len();
    let mut stats = BatchStats {
        total,
        ..Default::default()
    };

    if job.logs.is_empty() {
        warn!("⚠️ 日志列表为空，没有可处理的内容");
        return Ok(stats);
    }

    let flow = LogFlow::new(config, job.filter);
    let mut guard = CompositionGuard::new();

    for (idx, target) in job.logs.iter().enumerate() {
        let ctx = LogCtx::new(target.url.clone(), idx + 1, total);
        info!("\n📄 开始处理日志 {}/{}...", ctx.log_index, total);

        match flow.run(client, &mut guard, &ctx).await {
            Ok(ProcessResult::Exported) => {
                stats.exported += 1;
                stats.outcomes.push(LogOutcome {
                    url: target.url.clone(),
                    status: "exported".to_string(),
                });
                info!("✓ 日志 {}/{} 处理完成", ctx.log_index, total);
            }
            Ok(ProcessResult::Skipped) => {
                stats.skipped += 1;
                stats.outcomes.push(LogOutcome {
                    url: target.url.clone(),
                    status: "skipped".to_string(),
                });
            }
            Err(e) => {
                error!("{} ❌ 处理过程中发生致命错误: {}", ctx, e);
                return Err(e);
            }
        }
    }

    Ok(stats)
}

// ========== 日志辅助函数 ==========

fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n日志导出记录 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 战斗日志 CSV 导出");
    info!("📁 任务文件: {}", config.batch_file);
    info!("📂 下载目录: {}", config.download_dir);
    info!("{}", "=".repeat(60));
}

fn write_report(stats: &BatchStats, report_path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    fs::write(report_path, json)
        .map_err(|e| AppError::file_write_failed(report_path, e))?;
    Ok(())
}

fn print_final_stats(stats: &BatchStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 已导出: {}/{}", stats.exported, stats.total);
    info!("⏭️ 已跳过: {}", stats.skipped);
    info!("{}", "=".repeat(60));
    info!("\n报告已保存至: {}", config.report_file);
}
