use fflogs_export::browser::launch_browser;
use fflogs_export::config::Config;
use fflogs_export::infrastructure::{CdpClient, PageClient};
use fflogs_export::logger;
use fflogs_export::models::load_batch_job;
use fflogs_export::services::CompositionGuard;
use fflogs_export::workflow::{LogCtx, LogFlow};
use std::io::Write;

#[tokio::test]
#[ignore] // 默认忽略，需要本机有 Chrome：cargo test -- --ignored
async fn test_browser_launch_and_idempotent_shutdown() {
    // 初始化日志
    logger::init();

    let config = Config::default();

    let (browser, handler, page) = launch_browser(&config, true)
        .await
        .expect("启动浏览器失败");
    let client = CdpClient::new(browser, handler, page, &config);

    client
        .navigate("https://example.com")
        .await
        .expect("导航失败");

    let url = client.current_url().await.expect("读取地址失败");
    assert!(url.contains("example.com"));

    // 重复关闭应该是安全的
    client.shutdown().await.expect("关闭浏览器失败");
    client.shutdown().await.expect("重复关闭应该是空操作");
}

#[tokio::test]
#[ignore] // 需要真实的日志链接：TEST_LOG_URL=... cargo test -- --ignored
async fn test_single_log_export() {
    // 初始化日志
    logger::init();

    let log_url = std::env::var("TEST_LOG_URL").expect("请设置 TEST_LOG_URL 环境变量");

    let config = Config::default();
    let job_filter = fflogs_export::models::EncounterFilter::All;

    let (browser, handler, page) = launch_browser(&config, true)
        .await
        .expect("启动浏览器失败");
    let client = CdpClient::new(browser, handler, page, &config);

    let flow = LogFlow::new(&config, job_filter);
    let mut guard = CompositionGuard::new();
    let ctx = LogCtx::new(log_url, 1, 1);

    let result = flow.run(&client, &mut guard, &ctx).await;

    client.shutdown().await.expect("关闭浏览器失败");
    result.expect("日志处理失败");

    // 第一条日志的阵容应该已成为基准
    assert!(guard.reference().is_some());
}

#[tokio::test]
async fn test_load_batch_file() {
    let mut file = tempfile::NamedTempFile::new().expect("创建临时文件失败");
    file.write_all(
        br#"
logs = [
    "https://www.fflogs.com/reports/aaaabbbbccccdddd",
    "https://www.fflogs.com/reports/eeeeffffgggghhhh",
    "https://www.fflogs.com/reports/iiiijjjjkkkkllll",
]
encounters = "wipes"
"#,
    )
    .expect("写入临时文件失败");

    let job = load_batch_job(file.path()).await.expect("加载任务失败");

    assert_eq!(job.logs.len(), 3);
    assert_eq!(job.filter, fflogs_export::models::EncounterFilter::Wipes);
    assert!(job.headless);
}
