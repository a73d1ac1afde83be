//! 日志初始化
//!
//! 控制台日志通过 tracing 输出，级别可由 RUST_LOG 覆盖

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// 默认级别为 info，可通过环境变量 RUST_LOG 调整；
/// 重复调用是空操作（测试里每个用例都会调一次）
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
