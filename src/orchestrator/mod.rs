//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责扫描题库、调度排序、写出结果和汇总统计。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量题库处理器
//! - 加载题库目录下的所有 JSON 文件
//! - 逐个委托 bank_processor
//! - 输出全局统计信息
//!
//! ### `bank_processor` - 单个题库处理器
//! - 输出题库统计
//! - 调用排序器生成页序列
//! - 写出排序结果
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<SubjectBank>)
//!     ↓
//! bank_processor (处理单个 SubjectBank)
//!     ↓
//! sequencer (纯函数：题目 + 锚点 → 页序列)
//! ```

pub mod bank_processor;
pub mod batch_processor;

// 重新导出主要类型
pub use bank_processor::{process_bank, BankOutcome};
pub use batch_processor::{App, RunSummary};
