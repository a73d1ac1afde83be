//! 阵容校验服务 - 业务能力层
//!
//! 持有整个批次的基准阵容：第一条成功解析的日志定义了
//! 预期的团队构成，之后的每条日志都必须和它完全一致
//! （同样的 8 个职业，重复计数），否则被排除在导出之外。
//! 这样可以防止把不同团队的数据混在一起统计

use crate::models::Composition;

/// 阵容校验服务
#[derive(Debug, Default)]
pub struct CompositionGuard {
    reference: Option<Composition>,
}

impl CompositionGuard {
    /// 创建新的校验服务（基准阵容未设置）
    pub fn new() -> Self {
        Self::default()
    }

    /// 校验观察到的阵容
    ///
    /// 基准未设置（或为空）时，观察值成为新基准并通过校验；
    /// 基准非空时按多重集合比较，且无论结果如何基准都不再变化
    pub fn check(&mut self, observed: &Composition) -> bool {
        match &self.reference {
            Some(reference) if !reference.is_empty() => reference.matches(observed),
            _ => {
                self.reference = Some(observed.clone());
                true
            }
        }
    }

    /// 当前基准阵容
    pub fn reference(&self) -> Option<&Composition> {
        self.reference.as_ref()
    }
}
