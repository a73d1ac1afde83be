//! 团队阵容
//!
//! 一条日志中团队的职业构成，取自总览页的阵容表格

/// 站点团本格式的标准团队人数
pub const RAID_SIZE: usize = 8;

/// 团队阵容（职业名多重集合）
///
/// 内部按文档顺序保存，比较时忽略顺序但保留重复：
/// 两个阵容相等当且仅当排序后的职业序列完全一致
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    tokens: Vec<String>,
}

impl Composition {
    /// 从职业名列表创建阵容（保留文档顺序）
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// 文档顺序的职业名
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// 排序后的职业名（用于多重集合比较）
    pub fn sorted_tokens(&self) -> Vec<String> {
        let mut sorted = self.tokens.clone();
        sorted.sort();
        sorted
    }

    /// 判断两个阵容是否为同一多重集合
    pub fn matches(&self, other: &Composition) -> bool {
        self.sorted_tokens() == other.sorted_tokens()
    }
}

impl std::fmt::Display for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(tokens: &[&str]) -> Composition {
        Composition::from_tokens(tokens.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_matches_ignores_order() {
        let a = comp(&["Paladin", "Warrior", "WhiteMage", "BlackMage"]);
        let b = comp(&["BlackMage", "WhiteMage", "Warrior", "Paladin"]);
        assert!(a.matches(&b));
        assert!(b.matches(&a));
    }

    #[test]
    fn test_matches_counts_duplicates() {
        let a = comp(&["Paladin", "Paladin", "WhiteMage"]);
        let b = comp(&["Paladin", "WhiteMage", "WhiteMage"]);
        assert!(!a.matches(&b));

        let c = comp(&["Paladin", "WhiteMage", "Paladin"]);
        assert!(a.matches(&c));
    }

    #[test]
    fn test_matches_different_size() {
        let a = comp(&["Paladin", "Warrior"]);
        let b = comp(&["Paladin", "Warrior", "Warrior"]);
        assert!(!a.matches(&b));
    }

    #[test]
    fn test_empty() {
        let empty = comp(&[]);
        assert!(empty.is_empty());
        assert!(empty.matches(&comp(&[])));
        assert!(!empty.matches(&comp(&["Paladin"])));
    }

    #[test]
    fn test_display() {
        let a = comp(&["Paladin", "Scholar"]);
        assert_eq!(a.to_string(), "Paladin/Scholar");
    }
}
