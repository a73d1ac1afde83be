use crate::models::encounter::EncounterFilter;

/// 一条待处理的日志
///
/// 由调用方提供后不再修改
#[derive(Debug, Clone)]
pub struct LogTarget {
    /// 日志查看页 URL
    pub url: String,
    /// 战斗筛选类型（整个批次共用）
    pub filter: EncounterFilter,
}

/// 一次批处理任务
#[derive(Debug, Clone)]
pub struct BatchJob {
    /// 待处理的日志列表
    pub logs: Vec<LogTarget>,
    /// 战斗筛选类型
    pub filter: EncounterFilter,
    /// 是否以无头模式启动浏览器
    pub headless: bool,
}
