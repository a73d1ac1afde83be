//! 浏览器启动
//!
//! 站点页面会加载大量广告，拖慢加载速度还可能遮挡按钮，
//! 所以支持加载 unpacked 去广告扩展；下载行为配置为
//! 免弹窗直接保存到指定目录

use std::path::Path;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use chromiumoxide::cdp::browser_protocol::browser::{
    SetDownloadBehaviorBehavior, SetDownloadBehaviorParams,
};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// 启动浏览器并打开初始空白页
///
/// 返回浏览器、事件处理任务和页面，所有权交给调用方
pub async fn launch_browser(
    config: &Config,
    headless: bool,
) -> AppResult<(Browser, JoinHandle<()>, Page)> {
    info!("🚀 启动浏览器 (无头: {})...", headless);

    let mut args = vec![
        "--disable-gpu".to_string(),
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--remote-debugging-port=0".to_string(),
    ];

    if let Some(extension_dir) = &config.adblock_extension {
        debug!("加载去广告扩展: {}", extension_dir);
        args.push(format!("--disable-extensions-except={}", extension_dir));
        args.push(format!("--load-extension={}", extension_dir));
    }

    let mut builder = BrowserConfig::builder().args(args);

    builder = if headless {
        builder.new_headless_mode()
    } else {
        builder.with_head()
    };

    if let Some(executable) = &config.chrome_executable {
        builder = builder.chrome_executable(Path::new(executable));
    }

    let browser_config = builder
        .build()
        .map_err(AppError::browser_config_failed)?;

    let (browser, mut handler) = Browser::launch(browser_config)
        .await
        .map_err(AppError::browser_launch_failed)?;
    debug!("浏览器启动成功");

    // 在后台处理浏览器事件
    let handler_task = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if event.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let page = browser
        .new_page("about:blank")
        .await
        .map_err(AppError::page_creation_failed)?;

    configure_downloads(&page, &config.download_dir).await?;

    info!("✅ 浏览器已就绪");
    Ok((browser, handler_task, page))
}

/// 配置自动下载：免弹窗保存到指定目录
async fn configure_downloads(page: &Page, download_dir: &str) -> AppResult<()> {
    let absolute = std::fs::canonicalize(download_dir)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| download_dir.to_string());

    let params = SetDownloadBehaviorParams::builder()
        .behavior(SetDownloadBehaviorBehavior::Allow)
        .download_path(absolute.clone())
        .build()
        .map_err(AppError::browser_config_failed)?;

    match page.execute(params).await {
        Ok(_) => {
            debug!("下载目录已设置为: {}", absolute);
            Ok(())
        }
        Err(e) => {
            // 下载行为设置失败不阻止批处理，只是导出文件会落到默认目录
            warn!("设置下载目录失败: {}", e);
            Ok(())
        }
    }
}
