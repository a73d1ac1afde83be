//! 阵容提取服务 - 业务能力层
//!
//! 只负责从总览页 DOM 中提取团队阵容，不关心校验和流程
//!
//! 站点把每个成员渲染成带 composition-entry 类的片段，
//! 职业名出现在片段内的引号属性值里，用正则把引号包住的
//! 纯字母串抓出来即可。解析逻辑和页面结构强耦合，
//! 所以集中在这一个模块里

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::PageClient;
use crate::models::Composition;
use anyhow::{anyhow, Result};
use regex::Regex;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;

/// 总览页阵容表格的选择器
pub const COMPOSITION_TABLE_SELECTOR: &str = "table.composition-table";

/// 成员片段的选择器
pub const COMPOSITION_ENTRY_SELECTOR: &str = ".composition-entry";

/// 引号包住的纯字母职业名
const JOB_TOKEN_PATTERN: &str = r#""[A-Za-z]+""#;

/// 阵容提取服务
///
/// 职责：
/// - 等待阵容表格加载完成
/// - 读取页面并提取职业名列表
/// - 不出现 Vec<LogTarget>
/// - 不关心流程顺序
pub struct CompositionExtractor {
    wait_timeout: Duration,
}

impl CompositionExtractor {
    /// 创建新的提取服务
    pub fn new(config: &Config) -> Self {
        Self {
            wait_timeout: Duration::from_secs(config.wait_timeout_secs),
        }
    }

    /// 等待总览页就绪并提取阵容
    pub async fn fetch_composition(&self, client: &dyn PageClient) -> Result<Composition> {
        self.wait_for_table(client).await?;
        let html = client.read_page().await?;
        extract_composition(&html)
    }

    async fn wait_for_table(&self, client: &dyn PageClient) -> AppResult<()> {
        client
            .wait_for(COMPOSITION_TABLE_SELECTOR, self.wait_timeout)
            .await
    }
}

/// 从页面 DOM 文本中提取阵容
///
/// 按文档顺序返回职业名；没有任何匹配时返回空阵容而不是报错，
/// 空阵容是否算不一致由校验方决定
pub fn extract_composition(html: &str) -> Result<Composition> {
    let entry_selector = Selector::parse(COMPOSITION_ENTRY_SELECTOR)
        .map_err(|e| anyhow!("无效的选择器 {}: {}", COMPOSITION_ENTRY_SELECTOR, e))?;
    let token_re = Regex::new(JOB_TOKEN_PATTERN)?;

    let document = Html::parse_document(html);
    let mut tokens = Vec::new();

    for entry in document.select(&entry_selector) {
        let fragment = entry.html();
        for m in token_re.find_iter(&fragment) {
            tokens.push(m.as_str().trim_matches('"').to_string());
        }
    }

    debug!("提取到 {} 个职业名", tokens.len());
    Ok(Composition::from_tokens(tokens))
}
