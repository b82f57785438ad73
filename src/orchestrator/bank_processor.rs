//! 单个题库处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责处理单个题库，是题库级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **统计输出**：记录题目、阅读材料、答题说明数量
//! 2. **排序**：委托 `sequencer::sequence` 生成页序列
//! 3. **核对**：检查被丢弃的题目数量
//! 4. **写出结果**：把页序列写为 JSON

use crate::config::Config;
use crate::error::AppError;
use crate::models::bank::SubjectBank;
use crate::models::page::Page;
use crate::sequencer::{self, navigation};
use crate::services::BankStatistics;
use crate::utils::logging::{log_bank_statistics, truncate_text};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, info, warn};

/// 单个题库的处理结果
#[derive(Debug, Clone)]
pub struct BankOutcome {
    pub pages: Vec<Page>,
    pub output_path: Option<PathBuf>,
}

/// 处理单个题库
///
/// # 参数
/// - `bank`: 题库数据
/// - `bank_index`: 题库编号（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 排序失败时返回错误，不写出任何结果
pub async fn process_bank(bank: &SubjectBank, bank_index: usize, config: &Config) -> Result<BankOutcome> {
    log_bank_start(bank_index, bank);

    let stats = BankStatistics::from_bank(bank);
    log_bank_statistics(bank_index, &stats);

    let pages = match sequencer::sequence(&bank.questions, &bank.passages, &bank.instructions) {
        Ok(pages) => pages,
        Err(e) => {
            error!(
                "[题库 {}] ❌ 排序失败，锚点 {:?} 无法解析",
                bank_index,
                e.anchor_id()
            );
            return Err(AppError::from(e)).with_context(|| format!("题库 {} 排序失败", bank.display_name()));
        }
    };

    check_dropped(bank_index, &stats, &pages);

    if config.verbose_logging {
        log_pages(bank_index, &pages);
    }

    let output_path = if config.write_output {
        Some(write_pages(bank, &pages, &config.output_folder).await?)
    } else {
        None
    };

    log_bank_complete(bank_index, &stats, &pages);

    Ok(BankOutcome { pages, output_path })
}

/// 写出排序结果，文件名为 `<原文件名>_sequenced.json`
pub async fn write_pages(bank: &SubjectBank, pages: &[Page], output_folder: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_folder)
        .await
        .with_context(|| format!("无法创建输出目录: {}", output_folder))?;

    let output_path = Path::new(output_folder).join(format!("{}_sequenced.json", bank.display_name()));
    let content = serde_json::to_string_pretty(pages)?;

    fs::write(&output_path, content)
        .await
        .map_err(|e| AppError::file_write_failed(output_path.display().to_string(), e))?;

    info!("💾 已写出: {}", output_path.display());
    Ok(output_path)
}

// 题目页少于题目总数说明有题目引用了不存在的锚点
fn check_dropped(bank_index: usize, stats: &BankStatistics, pages: &[Page]) {
    let emitted = navigation::question_count(pages);
    if emitted < stats.total_questions {
        warn!(
            "[题库 {}] ⚠️ {} 道题目引用了不存在的锚点，已丢弃",
            bank_index,
            stats.total_questions - emitted
        );
    }
}

// ========== 日志辅助函数 ==========

fn log_bank_start(bank_index: usize, bank: &SubjectBank) {
    let info = bank.file_info();
    info!("\n[题库 {}] {}", bank_index, "─".repeat(30));
    info!("[题库 {}] 开始处理: {}", bank_index, bank.display_name());
    if let Some(subject) = info.subject {
        info!("[题库 {}] 科目: {}", bank_index, subject);
    }
    if let Some(year) = bank.year.as_deref().or(info.year.as_deref()) {
        info!("[题库 {}] 年份: {}", bank_index, year);
    }
}

fn log_pages(bank_index: usize, pages: &[Page]) {
    for (index, page) in pages.iter().enumerate() {
        let label = navigation::page_label(pages, index).unwrap_or_default();
        let preview = match page {
            Page::Content(content) => truncate_text(&content.text, 40),
            Page::Question(question) => truncate_text(&question.question.body, 40),
        };
        debug!("[题库 {}]   #{} {} | {}", bank_index, page.id(), label, preview);
    }
}

fn log_bank_complete(bank_index: usize, stats: &BankStatistics, pages: &[Page]) {
    let content_pages = pages.iter().filter(|p| p.is_content()).count();
    info!(
        "[题库 {}] 页统计: 内容页 {}, 题目页 {}, 总计 {} (上限 {})",
        bank_index,
        content_pages,
        pages.len() - content_pages,
        pages.len(),
        stats.max_page_count()
    );
    info!("[题库 {}] ✅ 题库处理完成", bank_index);
}
