//! # Question Sequencer
//!
//! 把科目题库整理成线性答题界面使用的页序列
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、阅读材料、答题说明、展示页、科目
//! - `models::loaders` - 从 JSON 文件加载题库
//!
//! ### ② 核心层（Sequencer）
//! - `sequencer/` - 纯函数，不做 I/O
//! - `sequence` - 分组 → 锚点排序 → 展开 → 连续编号
//! - `navigation` - 题号、页标签、列表标记
//!
//! ### ③ 业务能力层（Services）
//! - `BankStatistics` - 题库统计
//! - `QuestionSearch` - 关键字搜索、按编号查找
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 扫描题库目录，汇总统计
//! - `orchestrator/bank_processor` - 单个题库排序并写出结果
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod sequencer;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, SequenceError};
pub use models::{ContentKind, ContentPage, Instruction, Page, PageKind, Passage, Question, QuestionPage, SubjectBank};
pub use orchestrator::{App, RunSummary};
pub use sequencer::sequence;
