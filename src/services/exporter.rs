//! CSV 导出服务 - 业务能力层
//!
//! 只负责触发视图的 CSV 导出，不关心 URL 和阵容。
//! 导出文件由浏览器落到下载目录，这里只保证动作发出去了

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::{Interaction, PageClient};
use std::path::Path;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// 结果表格 CSV 导出按钮的选择器
pub const CSV_EXPORT_SELECTOR: &str = ".buttons-csv";

/// CSV 导出服务
pub struct CsvExporter {
    wait_timeout: Duration,
    settle_delay: Duration,
}

impl CsvExporter {
    /// 创建新的导出服务
    pub fn new(config: &Config) -> Self {
        Self {
            wait_timeout: Duration::from_secs(config.wait_timeout_secs),
            settle_delay: Duration::from_millis(config.settle_delay_ms),
        }
    }

    /// 导出伤害页表格
    pub async fn export_damage_dealt(&self, client: &dyn PageClient) -> AppResult<()> {
        self.trigger_export(client).await
    }

    /// 导出治疗页表格
    ///
    /// 治疗页的表格内容替换和导出按钮的出现存在竞态，
    /// 按钮可见时表格可能还是上一个视图的，先固定等一小段时间
    pub async fn export_healing_done(&self, client: &dyn PageClient) -> AppResult<()> {
        sleep(self.settle_delay).await;
        self.trigger_export(client).await
    }

    async fn trigger_export(&self, client: &dyn PageClient) -> AppResult<()> {
        client.wait_for(CSV_EXPORT_SELECTOR, self.wait_timeout).await?;
        client
            .interact(CSV_EXPORT_SELECTOR, Interaction::SendEnter)
            .await?;
        debug!("已触发 CSV 导出");
        Ok(())
    }
}

/// 清理下载目录
///
/// 目录不存在时创建；存在时删掉上一次运行留下的文件，
/// 避免新旧导出文件混在一起
pub fn clean_download_dir(dir: &Path) -> AppResult<()> {
    let dir_display = dir.display().to_string();

    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| AppError::cleanup_failed(&dir_display, e))?;
        info!("📁 已创建下载目录: {}", dir_display);
        return Ok(());
    }

    let entries = std::fs::read_dir(dir).map_err(|e| AppError::cleanup_failed(&dir_display, e))?;
    let mut removed = 0usize;
    for entry in entries {
        let entry = entry.map_err(|e| AppError::cleanup_failed(&dir_display, e))?;
        let path = entry.path();
        if path.is_file() {
            std::fs::remove_file(&path)
                .map_err(|e| AppError::cleanup_failed(path.display().to_string(), e))?;
            removed += 1;
        }
    }

    if removed > 0 {
        info!("🧹 已清理下载目录中的 {} 个旧文件", removed);
    }
    Ok(())
}
