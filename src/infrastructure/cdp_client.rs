//! chromiumoxide 页面客户端 - 基础设施层
//!
//! 唯一持有 Browser / Page 资源的模块

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::page_client::{Interaction, PageClient};
use crate::infrastructure::retry;
use async_trait::async_trait;
use chromiumoxide::{Browser, Page};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info};

/// chromiumoxide 实现的页面客户端
///
/// Browser 放在 Mutex<Option<_>> 里，关闭时取出，
/// 这样 shutdown 可以安全地重复调用
pub struct CdpClient {
    page: Page,
    browser: Mutex<Option<Browser>>,
    handler: Mutex<Option<JoinHandle<()>>>,
    poll_interval: Duration,
    interact_retries: usize,
}

impl CdpClient {
    /// 创建新的页面客户端，接管浏览器会话的所有权
    pub fn new(browser: Browser, handler: JoinHandle<()>, page: Page, config: &Config) -> Self {
        Self {
            page,
            browser: Mutex::new(Some(browser)),
            handler: Mutex::new(Some(handler)),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            interact_retries: config.interact_retries,
        }
    }
}

#[async_trait]
impl PageClient for CdpClient {
    async fn navigate(&self, url: &str) -> AppResult<()> {
        debug!("导航到: {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|e| AppError::navigation_failed(url, e))?;
        Ok(())
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> AppResult<()> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(AppError::element_not_found(selector, timeout));
            }
            sleep(self.poll_interval).await;
        }
    }

    async fn read_page(&self) -> AppResult<String> {
        self.page
            .content()
            .await
            .map_err(AppError::page_read_failed)
    }

    async fn current_url(&self) -> AppResult<String> {
        let url = self
            .page
            .url()
            .await
            .map_err(AppError::page_read_failed)?;
        Ok(url.unwrap_or_default())
    }

    async fn interact(&self, selector: &str, action: Interaction) -> AppResult<()> {
        let page = self.page.clone();
        let selector = selector.to_string();
        retry::retry_on_stale(self.interact_retries, move || {
            let page = page.clone();
            let selector = selector.clone();
            async move { attempt_interaction(&page, &selector, action).await }
        })
        .await
    }

    async fn shutdown(&self) -> AppResult<()> {
        let mut guard = self.browser.lock().await;
        let Some(mut browser) = guard.take() else {
            debug!("浏览器会话已关闭，跳过重复关闭");
            return Ok(());
        };

        info!("🛑 正在关闭浏览器会话...");
        browser
            .close()
            .await
            .map_err(AppError::browser_close_failed)?;

        // 等待事件处理任务退出
        if let Some(handle) = self.handler.lock().await.take() {
            let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
        }

        info!("✅ 浏览器会话已关闭");
        Ok(())
    }
}

/// 单次定位并执行动作
///
/// 定位失败视为元素不存在；定位成功后动作失败视为引用失效
async fn attempt_interaction(page: &Page, selector: &str, action: Interaction) -> AppResult<()> {
    let element = page
        .find_element(selector)
        .await
        .map_err(|_| AppError::element_not_found(selector, Duration::ZERO))?;

    let outcome = match action {
        Interaction::Click => element.click().await.map(|_| ()),
        Interaction::SendEnter => element.press_key("Enter").await.map(|_| ()),
    };

    outcome.map_err(|e| AppError::stale_element(selector, e))
}
