pub mod log_ctx;
pub mod log_flow;

pub use log_ctx::LogCtx;
pub use log_flow::{LogFlow, ProcessResult};
