use crate::error::AppError;
use crate::models::batch::{BatchJob, LogTarget};
use crate::models::encounter::EncounterFilter;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 批处理任务文件的原始结构
#[derive(Debug, Deserialize)]
struct BatchJobFile {
    /// 日志链接列表
    logs: Vec<String>,
    /// 战斗筛选类型: "all" / "kills" / "wipes"
    #[serde(default = "default_encounters")]
    encounters: String,
    /// 是否以无头模式启动浏览器
    #[serde(default = "default_headless")]
    headless: bool,
}

fn default_encounters() -> String {
    "all".to_string()
}

fn default_headless() -> bool {
    true
}

/// 从 TOML 文件加载批处理任务
///
/// 筛选类型非法时立即失败，不会进行任何导航
pub async fn load_batch_job(path: &Path) -> Result<BatchJob> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取任务文件: {}", path.display()))?;

    let file: BatchJobFile = toml::from_str(&content)
        .with_context(|| format!("无法解析任务文件: {}", path.display()))?;

    let filter = EncounterFilter::from_str(&file.encounters)
        .ok_or_else(|| AppError::invalid_encounter_filter(&file.encounters))?;

    let logs = file
        .logs
        .into_iter()
        .map(|url| LogTarget { url, filter })
        .collect::<Vec<_>>();

    tracing::info!(
        "成功加载 {} 条日志链接 (筛选: {}, 无头: {})",
        logs.len(),
        filter,
        file.headless
    );

    Ok(BatchJob {
        logs,
        filter,
        headless: file.headless,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_job_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("创建临时文件失败");
        file.write_all(content.as_bytes()).expect("写入临时文件失败");
        file
    }

    #[test]
    fn test_load_full_job() {
        let file = write_job_file(
            r#"
logs = [
    "https://www.fflogs.com/reports/aaaabbbbccccdddd",
    "https://www.fflogs.com/reports/eeeeffffgggghhhh",
]
encounters = "kills"
headless = false
"#,
        );

        let job = tokio_test::block_on(load_batch_job(file.path())).expect("加载任务失败");
        assert_eq!(job.logs.len(), 2);
        assert_eq!(job.filter, EncounterFilter::Kills);
        assert_eq!(job.logs[0].filter, EncounterFilter::Kills);
        assert!(!job.headless);
    }

    #[test]
    fn test_load_defaults() {
        let file = write_job_file(r#"logs = ["https://www.fflogs.com/reports/x"]"#);

        let job = tokio_test::block_on(load_batch_job(file.path())).expect("加载任务失败");
        assert_eq!(job.filter, EncounterFilter::All);
        assert!(job.headless);
    }

    #[test]
    fn test_invalid_filter_fails() {
        let file = write_job_file(
            r#"
logs = ["https://www.fflogs.com/reports/x"]
encounters = "bosses"
"#,
        );

        let result = tokio_test::block_on(load_batch_job(file.path()));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("bosses"));
    }

    #[test]
    fn test_empty_logs_is_valid() {
        let file = write_job_file(r#"logs = []"#);

        let job = tokio_test::block_on(load_batch_job(file.path())).expect("加载任务失败");
        assert!(job.logs.is_empty());
    }
}
