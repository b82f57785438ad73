//! 答题界面导航辅助
//!
//! 题号只统计题目页，内容页不占题号。

use crate::models::page::{Page, PageKind};

/// 第 `index` 页（从 0 开始）的题号，内容页或越界时返回 `None`
pub fn question_number(pages: &[Page], index: usize) -> Option<usize> {
    let page = pages.get(index)?;
    if page.is_content() {
        return None;
    }
    Some(pages[..=index].iter().filter(|p| !p.is_content()).count())
}

/// 题目页总数
pub fn question_count(pages: &[Page]) -> usize {
    pages.iter().filter(|p| !p.is_content()).count()
}

/// 页头显示的标签：内容页显示锚点编号，题目页显示 `Question n`
pub fn page_label(pages: &[Page], index: usize) -> Option<String> {
    let page = pages.get(index)?;
    match page.title() {
        Some(title) => Some(title.to_string()),
        None => question_number(pages, index).map(|n| format!("Question {}", n)),
    }
}

/// 题目列表按钮上的标记：`P` / `I` / 题号
pub fn page_marker(pages: &[Page], index: usize) -> Option<String> {
    let page = pages.get(index)?;
    match page.kind() {
        PageKind::Content(kind) => Some(kind.marker().to_string()),
        PageKind::Question => question_number(pages, index).map(|n| n.to_string()),
    }
}
