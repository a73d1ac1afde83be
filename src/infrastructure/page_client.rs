//! 页面客户端接口 - 基础设施层
//!
//! 对浏览器会话的全部操作都走这个接口，
//! 状态机不直接接触 chromiumoxide，测试时可以替换为假实现

use crate::error::AppResult;
use async_trait::async_trait;
use std::time::Duration;

/// 对页面元素执行的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// 点击元素
    Click,
    /// 向元素发送回车键
    SendEnter,
}

/// 页面客户端
///
/// 职责：
/// - 持有唯一的浏览器会话资源
/// - 只暴露导航 / 等待 / 读取 / 交互 / 关闭能力
/// - 不认识日志 / 阵容 / 导出流程
#[async_trait]
pub trait PageClient: Send + Sync {
    /// 发起页面加载，返回时不保证内容就绪
    async fn navigate(&self, url: &str) -> AppResult<()>;

    /// 阻塞等待匹配选择器的元素出现在 DOM 中
    ///
    /// 超时返回 `ElementNotFound`
    async fn wait_for(&self, selector: &str, timeout: Duration) -> AppResult<()>;

    /// 读取当前页面的完整 DOM 序列化文本
    async fn read_page(&self) -> AppResult<String>;

    /// 读取浏览器当前地址
    async fn current_url(&self) -> AppResult<String>;

    /// 定位元素并执行动作
    ///
    /// 元素不存在返回 `ElementNotFound`；
    /// 定位后引用失效返回 `StaleElement`（实现内部会按配置自动重试）
    async fn interact(&self, selector: &str, action: Interaction) -> AppResult<()>;

    /// 关闭浏览器会话
    ///
    /// 幂等：重复调用或失败后调用都是安全的
    async fn shutdown(&self) -> AppResult<()>;
}
