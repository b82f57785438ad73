use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::anchor::{Instruction, Passage};
use crate::models::question::Question;
use crate::models::subject::Subject;

/// 单科单年的题库
///
/// 对应 `english_questions_jamb_2010.json` 这样的文件。
/// 非英语科目通常没有 `passages` / `instructions`。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectBank {
    #[serde(default, deserialize_with = "deserialize_year", skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub passages: Vec<Passage>,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl SubjectBank {
    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }

    /// 日志中使用的名称（文件名，没有时为 `<memory>`）
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(|p| Path::new(p).file_stem())
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "<memory>".to_string())
    }

    /// 从文件名解析科目与年份
    pub fn file_info(&self) -> BankFile {
        self.file_path
            .as_deref()
            .map(|p| BankFile::from_path(Path::new(p)))
            .unwrap_or_default()
    }
}

/// 题库文件名信息：`<subject>_questions_jamb_<year>.json`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankFile {
    pub subject: Option<Subject>,
    pub year: Option<String>,
}

impl BankFile {
    pub fn from_path(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let (prefix, year) = match stem.rsplit_once('_') {
            Some((prefix, tail)) if tail.len() == 4 && tail.chars().all(|c| c.is_ascii_digit()) => {
                (prefix.to_string(), Some(tail.to_string()))
            }
            _ => (stem.clone(), None),
        };

        let subject = prefix
            .split_once("_questions")
            .map(|(name, _)| name.replace('_', " "))
            .and_then(|name| Subject::find(&name))
            .or_else(|| Subject::find(&prefix));

        Self { subject, year }
    }
}

// 年份在文件里可能是字符串也可能是整数
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct YearVisitor;

    impl<'de> Visitor<'de> for YearVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer representing a year")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(YearVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_anchor_collections_default_to_empty() {
        let bank: SubjectBank = serde_json::from_value(json!({
            "questions": [{"id": 1, "question": "2 + 2 = ?"}]
        }))
        .unwrap();

        assert_eq!(bank.questions.len(), 1);
        assert!(bank.passages.is_empty());
        assert!(bank.instructions.is_empty());
        assert_eq!(bank.year, None);
    }

    #[test]
    fn test_year_accepts_integer_or_string() {
        let bank: SubjectBank = serde_json::from_value(json!({"year": 2010})).unwrap();
        assert_eq!(bank.year.as_deref(), Some("2010"));

        let bank: SubjectBank = serde_json::from_value(json!({"year": "2011"})).unwrap();
        assert_eq!(bank.year.as_deref(), Some("2011"));

        let bank: SubjectBank = serde_json::from_value(json!({"year": null})).unwrap();
        assert_eq!(bank.year, None);
    }

    #[test]
    fn test_bank_file_from_path() {
        let info = BankFile::from_path(Path::new("data/english_questions_jamb_2010.json"));
        assert_eq!(info.subject, Some(Subject::English));
        assert_eq!(info.year.as_deref(), Some("2010"));

        let info = BankFile::from_path(Path::new("physics.json"));
        assert_eq!(info.subject, Some(Subject::Physics));
        assert_eq!(info.year, None);
    }
}
