//! 排序后的展示页
//!
//! 线性答题界面一次展示一页。页分两种：
//! - 内容页：阅读材料或答题说明，只带一个"继续"选项
//! - 题目页：原题字段原样保留，只改写 `id`

use serde::{Deserialize, Serialize};

use crate::models::anchor::Anchor;
use crate::models::question::{AnswerOption, Question};

/// "继续"选项的编号，同时也是内容页的正确答案
pub const CONTINUE_OPTION_ID: &str = "CONTINUE";
pub const CONTINUE_OPTION_TEXT: &str = "Continue to questions";

const PASSAGE_EXPLANATION: &str =
    "This is a passage. Please read carefully before answering the questions that follow.";
const INSTRUCTION_EXPLANATION: &str =
    "Please read the instructions carefully before attempting the questions that follow.";

/// 内容页类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Passage,
    Instruction,
}

impl ContentKind {
    /// 题目列表中使用的简写标记
    pub fn marker(self) -> char {
        match self {
            ContentKind::Passage => 'P',
            ContentKind::Instruction => 'I',
        }
    }

    fn explanation(self) -> &'static str {
        match self {
            ContentKind::Passage => PASSAGE_EXPLANATION,
            ContentKind::Instruction => INSTRUCTION_EXPLANATION,
        }
    }
}

/// 页类型（包含题目页）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Content(ContentKind),
    Question,
}

/// 内容页
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPage {
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// 锚点编号，例如 `Passage I`
    pub title: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
    pub correct_answer: String,
    pub explanation: String,
}

impl ContentPage {
    /// 从锚点生成内容页，`id` 在重新编号时写入
    pub fn from_anchor<A: Anchor>(anchor: &A) -> Self {
        Self {
            id: 0,
            kind: A::KIND,
            title: anchor.id().to_string(),
            text: anchor.text().to_string(),
            options: vec![AnswerOption::new(CONTINUE_OPTION_ID, CONTINUE_OPTION_TEXT)],
            correct_answer: CONTINUE_OPTION_ID.to_string(),
            explanation: A::KIND.explanation().to_string(),
        }
    }
}

/// 题目页
///
/// `question.id` 始终为 `None`，页编号只存在于外层 `id`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPage {
    pub id: usize,
    #[serde(flatten)]
    pub question: Question,
}

impl QuestionPage {
    /// 复制原题生成题目页，原题不受影响
    pub fn from_question(question: &Question) -> Self {
        let mut question = question.clone();
        question.id = None;
        Self { id: 0, question }
    }
}

/// 展示页
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Page {
    Content(ContentPage),
    Question(QuestionPage),
}

impl Page {
    pub fn id(&self) -> usize {
        match self {
            Page::Content(page) => page.id,
            Page::Question(page) => page.id,
        }
    }

    pub(crate) fn set_id(&mut self, id: usize) {
        match self {
            Page::Content(page) => page.id = id,
            Page::Question(page) => page.id = id,
        }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            Page::Content(page) => PageKind::Content(page.kind),
            Page::Question(_) => PageKind::Question,
        }
    }

    pub fn is_content(&self) -> bool {
        matches!(self, Page::Content(_))
    }

    /// 内容页的标题
    pub fn title(&self) -> Option<&str> {
        match self {
            Page::Content(page) => Some(&page.title),
            Page::Question(_) => None,
        }
    }

    pub fn as_question(&self) -> Option<&Question> {
        match self {
            Page::Question(page) => Some(&page.question),
            Page::Content(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::anchor::{Instruction, Passage};
    use serde_json::json;

    #[test]
    fn test_content_page_has_single_continue_option() {
        let page = ContentPage::from_anchor(&Passage::new("Passage I", "Once upon a time"));

        assert_eq!(page.kind, ContentKind::Passage);
        assert_eq!(page.title, "Passage I");
        assert_eq!(page.options.len(), 1);
        assert_eq!(page.options[0].id(), Some(CONTINUE_OPTION_ID));
        assert_eq!(page.correct_answer, CONTINUE_OPTION_ID);
    }

    #[test]
    fn test_instruction_page_serializes_type_tag() {
        let mut page = Page::Content(ContentPage::from_anchor(&Instruction::new(
            "Instruction 2",
            "Choose the option nearest in meaning",
        )));
        page.set_id(4);

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["id"], json!(4));
        assert_eq!(value["type"], json!("instruction"));
        assert_eq!(value["correctAnswer"], json!("CONTINUE"));
    }

    #[test]
    fn test_question_page_overwrites_only_id() {
        let original = Question::new("Pick one")
            .with_id("q-17")
            .with_passage("Passage III");
        let mut page = Page::Question(QuestionPage::from_question(&original));
        page.set_id(9);

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["id"], json!(9));
        assert_eq!(value["question"], json!("Pick one"));
        assert_eq!(value["passageId"], json!("Passage III"));
        // 原题不受影响
        assert_eq!(original.id, Some(json!("q-17")));
    }

    #[test]
    fn test_untagged_page_roundtrip_picks_variant() {
        let value = json!({"id": 1, "question": "What?", "options": []});
        let page: Page = serde_json::from_value(value).unwrap();
        assert_eq!(page.kind(), PageKind::Question);

        let value = json!({
            "id": 2,
            "type": "passage",
            "title": "Passage I",
            "text": "...",
            "options": [{"id": "CONTINUE", "text": "Continue to questions"}],
            "correctAnswer": "CONTINUE",
            "explanation": "read"
        });
        let page: Page = serde_json::from_value(value).unwrap();
        assert_eq!(page.kind(), PageKind::Content(ContentKind::Passage));
        assert_eq!(page.title(), Some("Passage I"));
    }
}
