//! 题目排序器
//!
//! 把一个科目的原始题库整理成线性答题界面使用的页序列：
//!
//! ```text
//! 阅读材料（按罗马数字排序）→ 该材料下的题目
//! 答题说明（按整数排序）    → 该说明下的题目
//! 独立题目（保持原顺序）
//! ```
//!
//! 最后对所有页从 1 开始连续编号。
//!
//! 数据异常时的处理：
//! - 没有题目的锚点不生成内容页
//! - 引用了不存在的锚点的题目整组丢弃，不会降级为独立题目
//! - 阅读材料编号不在罗马数字表中时排在最前
//! - 答题说明编号无法解析时整次排序失败，返回 [`SequenceError`]

pub mod grouping;
pub mod navigation;
pub mod ordinal;

use std::collections::HashMap;

use tracing::debug;

use crate::error::SequenceError;
use crate::models::anchor::{Anchor, Instruction, Passage};
use crate::models::page::{ContentPage, Page, QuestionPage};
use crate::models::question::Question;

pub use grouping::QuestionGroups;
pub use navigation::{page_label, page_marker, question_count, question_number};
pub use ordinal::{instruction_ordinal, passage_ordinal};

/// 生成页序列
///
/// 输入只读借用，返回的页持有独立拷贝。
pub fn sequence(
    questions: &[Question],
    passages: &[Passage],
    instructions: &[Instruction],
) -> Result<Vec<Page>, SequenceError> {
    let QuestionGroups {
        mut by_passage,
        mut by_instruction,
        standalone,
    } = QuestionGroups::partition(questions);

    // 先解析全部答题说明编号，失败时不产生任何输出
    let mut keyed_instructions = instructions
        .iter()
        .map(|instruction| {
            instruction_ordinal(&instruction.id).map(|ordinal| (ordinal, instruction))
        })
        .collect::<Result<Vec<_>, SequenceError>>()?;
    keyed_instructions.sort_by_key(|(ordinal, _)| *ordinal);

    let mut sorted_passages: Vec<&Passage> = passages.iter().collect();
    sorted_passages.sort_by_key(|passage| passage_ordinal(&passage.id));

    let mut pages = Vec::with_capacity(questions.len() + passages.len() + instructions.len());

    for passage in sorted_passages {
        emit_group(&mut pages, passage, &mut by_passage);
    }
    for (_, instruction) in keyed_instructions {
        emit_group(&mut pages, instruction, &mut by_instruction);
    }
    pages.extend(
        standalone
            .into_iter()
            .map(|question| Page::Question(QuestionPage::from_question(question))),
    );

    log_dangling("阅读材料", &by_passage);
    log_dangling("答题说明", &by_instruction);

    renumber(&mut pages);
    Ok(pages)
}

/// 输出一个锚点的内容页及其题目
///
/// 分组被取走后，重复编号的锚点不会再次输出同一组题目。
fn emit_group<'a, A: Anchor>(
    pages: &mut Vec<Page>,
    anchor: &A,
    groups: &mut HashMap<&'a str, Vec<&'a Question>>,
) {
    let group = match groups.remove(anchor.id()) {
        Some(group) if !group.is_empty() => group,
        _ => {
            debug!("跳过没有题目的锚点: {}", anchor.id());
            return;
        }
    };

    pages.push(Page::Content(ContentPage::from_anchor(anchor)));
    pages.extend(
        group
            .into_iter()
            .map(|question| Page::Question(QuestionPage::from_question(question))),
    );
}

fn log_dangling(label: &str, groups: &HashMap<&str, Vec<&Question>>) {
    for (id, group) in groups {
        debug!(
            "{} {} 不存在，丢弃 {} 道题目",
            label,
            id,
            group.len()
        );
    }
}

/// 从 1 开始连续编号
fn renumber(pages: &mut [Page]) {
    for (index, page) in pages.iter_mut().enumerate() {
        page.set_id(index + 1);
    }
}
