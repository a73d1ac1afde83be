//! 页签导航服务 - 业务能力层
//!
//! 只负责 URL 变换和导航，不关心阵容和导出
//!
//! 三个视图通过 URL 参数区分：
//! - 总览: `<日志URL>#boss=-2` 加可选的 wipes 筛选参数
//! - 伤害: 总览 URL 追加 `&type=damage-done`
//! - 治疗: 伤害 URL 中的 `&type=damage-done` 替换为 `&type=healing`
//!   （参数名共用且互斥，必须替换而不是追加）

use crate::error::AppResult;
use crate::infrastructure::PageClient;
use crate::models::EncounterFilter;
use tracing::debug;

/// 选中"全部 Boss"的 URL 片段
pub const BOSS_ALL_FRAGMENT: &str = "#boss=-2";

/// 选中"伤害输出"视图的查询参数
pub const DAMAGE_DONE_PARAM: &str = "&type=damage-done";

/// 选中"治疗输出"视图的查询参数
pub const HEALING_PARAM: &str = "&type=healing";

/// 构造总览页 URL
pub fn summary_url(log_url: &str, filter: EncounterFilter) -> String {
    let mut url = format!("{}{}", log_url, BOSS_ALL_FRAGMENT);
    if let Some(suffix) = filter.query_suffix() {
        url.push_str(suffix);
    }
    url
}

/// 从总览页 URL 构造伤害页 URL
pub fn damage_url(summary_url: &str) -> String {
    format!("{}{}", summary_url, DAMAGE_DONE_PARAM)
}

/// 从伤害页 URL 构造治疗页 URL
pub fn healing_url(damage_url: &str) -> String {
    damage_url.replace(DAMAGE_DONE_PARAM, HEALING_PARAM)
}

/// 页签导航服务
///
/// 职责：
/// - 计算三个视图的目标 URL 并发起导航
/// - 页签切换总是基于浏览器的当前地址计算，
///   站点自己追加的参数（排序、页码等）原样保留
/// - 不持有任何资源
pub struct TabNavigator {
    filter: EncounterFilter,
}

impl TabNavigator {
    /// 创建新的导航服务
    pub fn new(filter: EncounterFilter) -> Self {
        Self { filter }
    }

    /// 打开日志的总览页
    pub async fn to_summary(&self, client: &dyn PageClient, log_url: &str) -> AppResult<()> {
        let url = summary_url(log_url, self.filter);
        debug!("总览页: {}", url);
        client.navigate(&url).await
    }

    /// 从总览页切换到伤害页
    pub async fn to_damage_dealt(&self, client: &dyn PageClient) -> AppResult<()> {
        let current = client.current_url().await?;
        let url = damage_url(&current);
        debug!("伤害页: {}", url);
        client.navigate(&url).await
    }

    /// 从伤害页切换到治疗页
    pub async fn to_healing_done(&self, client: &dyn PageClient) -> AppResult<()> {
        let current = client.current_url().await?;
        let url = healing_url(&current);
        debug!("治疗页: {}", url);
        client.navigate(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LOG_URL: &str = "https://www.fflogs.com/reports/aaaabbbbccccdddd";

    #[test]
    fn test_summary_url_all_adds_no_wipes_param() {
        let url = summary_url(LOG_URL, EncounterFilter::All);
        assert_eq!(
            url,
            "https://www.fflogs.com/reports/aaaabbbbccccdddd#boss=-2"
        );
        assert!(!url.contains("wipes"));
    }

    #[test]
    fn test_summary_url_kills() {
        assert_eq!(
            summary_url(LOG_URL, EncounterFilter::Kills),
            "https://www.fflogs.com/reports/aaaabbbbccccdddd#boss=-2&wipes=2"
        );
    }

    #[test]
    fn test_summary_url_wipes() {
        assert_eq!(
            summary_url(LOG_URL, EncounterFilter::Wipes),
            "https://www.fflogs.com/reports/aaaabbbbccccdddd#boss=-2&wipes=1"
        );
    }

    #[test]
    fn test_summary_url_is_pure() {
        let first = summary_url(LOG_URL, EncounterFilter::Kills);
        let second = summary_url(LOG_URL, EncounterFilter::Kills);
        assert_eq!(first, second);
    }

    #[test]
    fn test_damage_url_appends_view_param() {
        let summary = summary_url(LOG_URL, EncounterFilter::All);
        assert_eq!(
            damage_url(&summary),
            "https://www.fflogs.com/reports/aaaabbbbccccdddd#boss=-2&type=damage-done"
        );
    }

    #[test]
    fn test_healing_url_replaces_view_param() {
        let damage = damage_url(&summary_url(LOG_URL, EncounterFilter::Wipes));
        let healing = healing_url(&damage);

        assert!(!healing.contains(DAMAGE_DONE_PARAM));
        assert!(healing.contains(HEALING_PARAM));
        assert_eq!(
            healing,
            "https://www.fflogs.com/reports/aaaabbbbccccdddd#boss=-2&wipes=1&type=healing"
        );
    }

    #[test]
    fn test_healing_url_round_trip() {
        let damage = damage_url(&summary_url(LOG_URL, EncounterFilter::Kills));
        let healing = healing_url(&damage);
        let back = healing.replace(HEALING_PARAM, DAMAGE_DONE_PARAM);
        assert_eq!(back, damage);
    }

    #[test]
    fn test_healing_url_keeps_site_appended_params() {
        // 站点在导航后自己追加的参数应该原样保留
        let damage = format!("{}&source=12", damage_url(&summary_url(LOG_URL, EncounterFilter::All)));
        let healing = healing_url(&damage);
        assert!(healing.ends_with("&type=healing&source=12"));
    }
}
