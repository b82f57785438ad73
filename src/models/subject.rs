/// 科目枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    /// 英语
    English,
    /// 数学
    Mathematics,
    /// 物理
    Physics,
    /// 化学
    Chemistry,
    /// 生物
    Biology,
    /// 经济
    Economics,
    /// 政府
    Government,
    /// 文学
    Literature,
}

impl Subject {
    pub const ALL: [Subject; 8] = [
        Subject::English,
        Subject::Mathematics,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::Economics,
        Subject::Government,
        Subject::Literature,
    ];

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Subject::English => "English",
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::Economics => "Economics",
            Subject::Government => "Government",
            Subject::Literature => "Literature in English",
        }
    }

    /// 题库文件名中使用的前缀
    pub fn slug(self) -> &'static str {
        match self {
            Subject::English => "english",
            Subject::Mathematics => "mathematics",
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
            Subject::Economics => "economics",
            Subject::Government => "government",
            Subject::Literature => "literature",
        }
    }

    /// 尝试从字符串解析科目（精确匹配，忽略大小写）
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "english" | "eng" | "use of english" => Some(Subject::English),
            "mathematics" | "maths" | "math" => Some(Subject::Mathematics),
            "physics" | "phy" => Some(Subject::Physics),
            "chemistry" | "chem" => Some(Subject::Chemistry),
            "biology" | "bio" => Some(Subject::Biology),
            "economics" | "econ" => Some(Subject::Economics),
            "government" | "govt" => Some(Subject::Government),
            "literature" | "literature in english" | "lit" => Some(Subject::Literature),
            _ => None,
        }
    }

    /// 智能查找科目（支持模糊匹配）
    pub fn find(s: &str) -> Option<Self> {
        // 先尝试精确匹配
        if let Some(subject) = Self::from_str(s) {
            return Some(subject);
        }

        let s_lower = s.to_lowercase();
        if s_lower.contains("literature") {
            return Some(Subject::Literature);
        }
        Self::ALL
            .into_iter()
            .find(|subject| s_lower.contains(subject.slug()))
            .or_else(|| {
                if s_lower.contains("math") {
                    Some(Subject::Mathematics)
                } else {
                    None
                }
            })
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(Subject::from_str("English"), Some(Subject::English));
        assert_eq!(Subject::from_str(" maths "), Some(Subject::Mathematics));
        assert_eq!(Subject::from_str("Literature in English"), Some(Subject::Literature));
        assert_eq!(Subject::from_str("geography"), None);
    }

    #[test]
    fn test_find_fuzzy() {
        assert_eq!(Subject::find("english_questions_jamb_2010"), Some(Subject::English));
        assert_eq!(Subject::find("JAMB Math 2015"), Some(Subject::Mathematics));
        assert_eq!(Subject::find("literature_in_english"), Some(Subject::Literature));
        assert_eq!(Subject::find("history"), None);
    }
}
