//! 题目搜索服务 - 业务能力层
//!
//! 只负责"在题库中查找"的能力，不关心排序与展示

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::models::question::Question;

/// 题目搜索服务
///
/// 职责：
/// - 按关键字搜索题干和解析（忽略大小写）
/// - 按原始编号查找单题
/// - 只借用题库，不复制题目
pub struct QuestionSearch<'a> {
    questions: &'a [Question],
}

impl<'a> QuestionSearch<'a> {
    /// 创建新的搜索服务
    pub fn new(questions: &'a [Question]) -> Self {
        Self { questions }
    }

    /// 关键字搜索，结果保持题库顺序；空关键字不匹配任何题目
    pub fn search(&self, keyword: &str) -> Vec<&'a Question> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return Vec::new();
        }

        let matches: Vec<&'a Question> = self
            .questions
            .iter()
            .filter(|q| {
                q.body.to_lowercase().contains(&keyword)
                    || q.explanation.to_lowercase().contains(&keyword)
            })
            .collect();

        debug!("关键字 {:?} 匹配到 {} 道题目", keyword, matches.len());
        matches
    }

    /// 按原始编号查找
    ///
    /// 编号在文件中可能是整数也可能是字符串，`"7"` 与 `7` 视为同一编号。
    pub fn find(&self, id: &JsonValue) -> Option<&'a Question> {
        self.questions
            .iter()
            .find(|q| q.id.as_ref().is_some_and(|qid| same_id(qid, id)))
    }
}

fn same_id(a: &JsonValue, b: &JsonValue) -> bool {
    if a == b {
        return true;
    }
    match (a, b) {
        (JsonValue::String(s), JsonValue::Number(n)) | (JsonValue::Number(n), JsonValue::String(s)) => {
            s.trim() == n.to_string()
        }
        _ => false,
    }
}
