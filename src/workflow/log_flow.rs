//! 日志处理流程 - 流程层
//!
//! 核心职责：定义"一条日志"的完整处理流程
//!
//! 流程顺序：
//! 1. 总览页 → 提取阵容 → 校验
//! 2. 校验不通过 → 跳过（兜底，批次继续）
//! 3. 伤害页 → 导出 CSV → 治疗页 → 导出 CSV

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::infrastructure::PageClient;
use crate::models::{EncounterFilter, RAID_SIZE};
use crate::services::{CompositionExtractor, CompositionGuard, CsvExporter, TabNavigator};
use crate::workflow::log_ctx::LogCtx;

/// 日志处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// 两张表都已触发导出
    Exported,
    /// 跳过（阵容不一致）
    Skipped,
}

/// 日志处理流程
///
/// - 编排完整的单条日志处理流程
/// - 决定何时导航、何时提取、何时跳过
/// - 不持有任何资源（page）
/// - 只依赖业务能力（services）
pub struct LogFlow {
    navigator: TabNavigator,
    extractor: CompositionExtractor,
    exporter: CsvExporter,
}

impl LogFlow {
    /// 创建新的日志处理流程
    pub fn new(config: &Config, filter: EncounterFilter) -> Self {
        Self {
            navigator: TabNavigator::new(filter),
            extractor: CompositionExtractor::new(config),
            exporter: CsvExporter::new(config),
        }
    }

    pub async fn run(
        &self,
        client: &dyn PageClient,
        guard: &mut CompositionGuard,
        ctx: &LogCtx,
    ) -> Result<ProcessResult> {
        // ========== 阶段 1: 总览页 + 阵容校验 ==========
        info!("{} 🌐 打开总览页...", ctx);
        self.navigator.to_summary(client, &ctx.url).await?;

        let composition = self.extractor.fetch_composition(client).await?;

        if composition.len() != RAID_SIZE {
            warn!(
                "{} ⚠️ 提取到 {} 个职业 (预期 {})",
                ctx,
                composition.len(),
                RAID_SIZE
            );
        }

        if !guard.check(&composition) {
            warn!("{} ⚠️ 阵容不一致，跳过该日志: {}", ctx, composition);
            return Ok(ProcessResult::Skipped);
        }
        info!("{} ✓ 阵容校验通过: {}", ctx, composition);

        // ========== 阶段 2: 伤害页导出 ==========
        self.navigator.to_damage_dealt(client).await?;
        self.exporter.export_damage_dealt(client).await?;
        info!("{} 📥 伤害数据已导出", ctx);

        // ========== 阶段 3: 治疗页导出 ==========
        self.navigator.to_healing_done(client).await?;
        self.exporter.export_healing_done(client).await?;
        info!("{} 📥 治疗数据已导出", ctx);

        Ok(ProcessResult::Exported)
    }
}
