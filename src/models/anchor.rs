//! 锚点：阅读材料与答题说明
//!
//! 二者都需要在依附它们的题目之前展示一次。

use serde::{Deserialize, Serialize};

use crate::models::page::ContentKind;

/// 阅读材料，编号形如 `Passage II`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub id: String,
    pub text: String,
}

/// 答题说明，编号形如 `Instruction 3`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub id: String,
    pub text: String,
}

impl Passage {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl Instruction {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// 锚点的公共能力
pub trait Anchor {
    /// 生成的内容页类型
    const KIND: ContentKind;

    fn id(&self) -> &str;

    fn text(&self) -> &str;
}

impl Anchor for Passage {
    const KIND: ContentKind = ContentKind::Passage;

    fn id(&self) -> &str {
        &self.id
    }

    fn text(&self) -> &str {
        &self.text
    }
}

impl Anchor for Instruction {
    const KIND: ContentKind = ContentKind::Instruction;

    fn id(&self) -> &str {
        &self.id
    }

    fn text(&self) -> &str {
        &self.text
    }
}
