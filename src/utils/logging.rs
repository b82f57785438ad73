/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::info;

use crate::services::statistics::BankStatistics;

/// 记录程序启动信息
pub fn log_startup(subjects_folder: &str, write_output: bool) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题库排序模式");
    info!("📁 题库目录: {}", subjects_folder);
    info!("💾 写出排序结果: {}", if write_output { "是" } else { "否" });
    info!("{}", "=".repeat(60));
}

/// 记录题库加载信息
pub fn log_banks_loaded(total: usize) {
    info!("✓ 找到 {} 个待排序的题库\n", total);
}

/// 记录单个题库的统计信息
///
/// # 参数
/// - `bank_index`: 题库编号（仅用于日志显示）
/// - `stats`: 统计信息
pub fn log_bank_statistics(bank_index: usize, stats: &BankStatistics) {
    info!(
        "[题库 {}] 题目 {} | 阅读材料 {} | 答题说明 {}",
        bank_index, stats.total_questions, stats.total_passages, stats.total_instructions
    );
    info!(
        "[题库 {}] 依附阅读材料 {} | 依附答题说明 {} | 无阅读材料 {}",
        bank_index,
        stats.questions_with_passage,
        stats.questions_with_instruction,
        stats.questions_without_passage
    );
    let distribution = stats
        .correct_answer_distribution
        .iter()
        .map(|(answer, count)| format!("{}={}", answer, count))
        .collect::<Vec<_>>()
        .join(", ");
    info!("[题库 {}] 答案分布: {}", bank_index, distribution);
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `failed`: 失败数量
/// - `total`: 总数
/// - `total_pages`: 生成的页总数
pub fn print_final_stats(success: usize, failed: usize, total: usize, total_pages: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("📄 生成页数: {}", total_pages);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
