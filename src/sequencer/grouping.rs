use std::collections::HashMap;

use crate::models::question::{AnchorRef, Question};

/// 按锚点分组后的题目
///
/// 每个分组内部保持输入顺序。分组只借用原题，不做复制。
#[derive(Debug, Default)]
pub struct QuestionGroups<'a> {
    pub by_passage: HashMap<&'a str, Vec<&'a Question>>,
    pub by_instruction: HashMap<&'a str, Vec<&'a Question>>,
    pub standalone: Vec<&'a Question>,
}

impl<'a> QuestionGroups<'a> {
    /// 一次遍历完成分组，每道题只进入一个分组
    pub fn partition(questions: &'a [Question]) -> Self {
        let mut groups = Self::default();

        for question in questions {
            match question.anchor() {
                Some(AnchorRef::Passage(id)) => {
                    groups.by_passage.entry(id).or_default().push(question)
                }
                Some(AnchorRef::Instruction(id)) => {
                    groups.by_instruction.entry(id).or_default().push(question)
                }
                None => groups.standalone.push(question),
            }
        }

        groups
    }
}
