/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 批处理任务文件（日志链接列表、筛选类型、是否无头）
    pub batch_file: String,
    /// CSV 下载目录
    pub download_dir: String,
    /// Chrome/Chromium 可执行文件路径（为空时自动探测）
    pub chrome_executable: Option<String>,
    /// 去广告扩展目录（unpacked），为空时不加载
    pub adblock_extension: Option<String>,
    /// 等待页面元素出现的超时（秒）
    pub wait_timeout_secs: u64,
    /// 元素轮询间隔（毫秒）
    pub poll_interval_ms: u64,
    /// 治疗页切换后的稳定等待（毫秒）
    pub settle_delay_ms: u64,
    /// 元素失效后的自动重试次数
    pub interact_retries: usize,
    /// 输出日志文件
    pub output_log_file: String,
    /// 批处理结果报告文件
    pub report_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch_file: "batch.toml".to_string(),
            download_dir: "csv".to_string(),
            chrome_executable: None,
            adblock_extension: None,
            wait_timeout_secs: 10,
            poll_interval_ms: 250,
            settle_delay_ms: 500,
            interact_retries: 1,
            output_log_file: "output.txt".to_string(),
            report_file: "run_report.json".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            batch_file: std::env::var("BATCH_FILE").unwrap_or(default.batch_file),
            download_dir: std::env::var("DOWNLOAD_DIR").unwrap_or(default.download_dir),
            chrome_executable: std::env::var("CHROME_EXECUTABLE").ok(),
            adblock_extension: std::env::var("ADBLOCK_EXTENSION").ok(),
            wait_timeout_secs: std::env::var("WAIT_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.wait_timeout_secs),
            poll_interval_ms: std::env::var("POLL_INTERVAL_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.poll_interval_ms),
            settle_delay_ms: std::env::var("SETTLE_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.settle_delay_ms),
            interact_retries: std::env::var("INTERACT_RETRIES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.interact_retries),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            report_file: std::env::var("REPORT_FILE").unwrap_or(default.report_file),
        }
    }
}
