/// 战斗筛选类型
///
/// 决定总览页 URL 上附加的筛选参数，整个批次共用同一个值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncounterFilter {
    /// 全部战斗（站点默认，不附加参数）
    All,
    /// 仅击杀
    Kills,
    /// 仅灭团
    Wipes,
}

impl EncounterFilter {
    /// 尝试从字符串解析筛选类型
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Some(EncounterFilter::All),
            "kills" => Some(EncounterFilter::Kills),
            "wipes" => Some(EncounterFilter::Wipes),
            _ => None,
        }
    }

    /// 获取总览页 URL 的筛选参数
    ///
    /// 站点把不带参数的 URL 当作"全部战斗"处理，所以 All 返回 None
    pub fn query_suffix(self) -> Option<&'static str> {
        match self {
            EncounterFilter::All => None,
            EncounterFilter::Kills => Some("&wipes=2"),
            EncounterFilter::Wipes => Some("&wipes=1"),
        }
    }

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            EncounterFilter::All => "all",
            EncounterFilter::Kills => "kills",
            EncounterFilter::Wipes => "wipes",
        }
    }
}

impl std::fmt::Display for EncounterFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
