use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 选项
///
/// 题库里的选项有两种写法：`{"id": "A", "text": "..."}` 或直接写字符串。
/// 两种写法都原样保留。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerOption {
    Labeled { id: String, text: String },
    Plain(String),
}

impl AnswerOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        AnswerOption::Labeled {
            id: id.into(),
            text: text.into(),
        }
    }

    /// 选项编号，纯文本选项没有编号
    pub fn id(&self) -> Option<&str> {
        match self {
            AnswerOption::Labeled { id, .. } => Some(id),
            AnswerOption::Plain(_) => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            AnswerOption::Labeled { text, .. } | AnswerOption::Plain(text) => text,
        }
    }
}

/// 渲染提示
///
/// 图片、图示等字段只由渲染层解释，这里原样保留。
/// 未识别的字段统一收进 `extra`，序列化时按原样写回。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderHints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figure_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_options_image_path: Option<String>,
    /// 原始图示数据（通常为 URI 编码的 SVG）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 题库中的一道题
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// 题库中的原始编号，内容不透明，排序后不会复用
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// 题干
    #[serde(rename = "question")]
    pub body: String,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
    /// 所属阅读材料
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_id: Option<String>,
    /// 所属答题说明
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction_id: Option<String>,
    #[serde(flatten)]
    pub hints: RenderHints,
}

/// 题目依附的锚点引用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorRef<'a> {
    Passage(&'a str),
    Instruction(&'a str),
}

impl Question {
    /// 创建一道不依附任何锚点的题目
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_passage(mut self, passage_id: impl Into<String>) -> Self {
        self.passage_id = Some(passage_id.into());
        self
    }

    pub fn with_instruction(mut self, instruction_id: impl Into<String>) -> Self {
        self.instruction_id = Some(instruction_id.into());
        self
    }

    /// 题目依附的锚点
    ///
    /// `passage_id` 优先于 `instruction_id`；空字符串视为未设置。
    pub fn anchor(&self) -> Option<AnchorRef<'_>> {
        fn non_empty(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|s| !s.is_empty())
        }

        if let Some(passage_id) = non_empty(&self.passage_id) {
            return Some(AnchorRef::Passage(passage_id));
        }
        non_empty(&self.instruction_id).map(AnchorRef::Instruction)
    }
}
