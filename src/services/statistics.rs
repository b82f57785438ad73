//! 题库统计
//!
//! 只读取题库，用于日志和排序前后的数量核对

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::bank::SubjectBank;
use crate::models::question::AnchorRef;

/// 题库统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BankStatistics {
    pub total_questions: usize,
    pub total_passages: usize,
    pub total_instructions: usize,
    pub questions_with_passage: usize,
    pub questions_without_passage: usize,
    pub questions_with_instruction: usize,
    /// 正确答案分布（空答案不计入）
    pub correct_answer_distribution: BTreeMap<String, usize>,
}

impl BankStatistics {
    pub fn from_bank(bank: &SubjectBank) -> Self {
        let mut stats = Self {
            total_questions: bank.questions.len(),
            total_passages: bank.passages.len(),
            total_instructions: bank.instructions.len(),
            ..Default::default()
        };

        for question in &bank.questions {
            match question.anchor() {
                Some(AnchorRef::Passage(_)) => stats.questions_with_passage += 1,
                Some(AnchorRef::Instruction(_)) => stats.questions_with_instruction += 1,
                None => {}
            }

            if !question.correct_answer.is_empty() {
                *stats
                    .correct_answer_distribution
                    .entry(question.correct_answer.clone())
                    .or_insert(0) += 1;
            }
        }
        stats.questions_without_passage = stats.total_questions - stats.questions_with_passage;

        stats
    }

    /// 排序后应有的页数上限（每个锚点至多一页）
    pub fn max_page_count(&self) -> usize {
        self.total_questions + self.total_passages + self.total_instructions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Instruction, Passage, Question};

    fn answered(body: &str, answer: &str) -> Question {
        let mut question = Question::new(body);
        question.correct_answer = answer.to_string();
        question
    }

    #[test]
    fn test_statistics_counts() {
        let bank = SubjectBank {
            questions: vec![
                answered("a", "A").with_passage("Passage I"),
                answered("b", "B").with_passage("Passage I"),
                answered("c", "A").with_instruction("Instruction 1"),
                answered("d", ""),
            ],
            passages: vec![Passage::new("Passage I", "")],
            instructions: vec![
                Instruction::new("Instruction 1", ""),
                Instruction::new("Instruction 2", ""),
            ],
            ..Default::default()
        };

        let stats = BankStatistics::from_bank(&bank);

        assert_eq!(stats.total_questions, 4);
        assert_eq!(stats.total_passages, 1);
        assert_eq!(stats.total_instructions, 2);
        assert_eq!(stats.questions_with_passage, 2);
        assert_eq!(stats.questions_without_passage, 2);
        assert_eq!(stats.questions_with_instruction, 1);
        assert_eq!(stats.correct_answer_distribution.get("A"), Some(&2));
        assert_eq!(stats.correct_answer_distribution.get("B"), Some(&1));
        assert_eq!(stats.correct_answer_distribution.len(), 2);
        assert_eq!(stats.max_page_count(), 7);
    }
}
