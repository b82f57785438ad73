//! 批量题库处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责扫描题库目录并逐个排序。
//!
//! ## 核心功能
//!
//! 1. **批量加载**：扫描并加载所有题库（`Vec<SubjectBank>`）
//! 2. **逐个处理**：委托 bank_processor 处理单个题库
//! 3. **失败隔离**：某个题库排序失败只记录错误，不影响其它题库
//! 4. **全局统计**：汇总所有题库的处理结果

use crate::config::Config;
use crate::models::SubjectBank;
use crate::orchestrator::bank_processor;
use crate::utils::logging::{log_banks_loaded, log_startup, print_final_stats};
use anyhow::Result;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

/// 运行统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config.subjects_folder, config.write_output);
        Self { config }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunSummary> {
        let banks = self.load_banks().await?;

        if banks.is_empty() {
            warn!("⚠️ 没有找到待处理的题库文件，程序结束");
            return Ok(RunSummary::default());
        }

        log_banks_loaded(banks.len());

        let summary = self.process_all_banks(&banks).await;

        print_final_stats(
            summary.success,
            summary.failed,
            summary.total,
            summary.total_pages,
        );

        Ok(summary)
    }

    /// 加载题库
    async fn load_banks(&self) -> Result<Vec<SubjectBank>> {
        info!("\n📁 正在扫描题库目录...");
        crate::models::load_all_banks(&self.config.subjects_folder).await
    }

    /// 处理所有题库
    async fn process_all_banks(&self, banks: &[SubjectBank]) -> RunSummary {
        let mut summary = RunSummary {
            total: banks.len(),
            ..Default::default()
        };

        for (idx, bank) in banks.iter().enumerate() {
            let bank_index = idx + 1;
            match bank_processor::process_bank(bank, bank_index, &self.config).await {
                Ok(outcome) => {
                    summary.success += 1;
                    summary.total_pages += outcome.pages.len();
                }
                Err(e) => {
                    error!("[题库 {}] ❌ 处理过程中发生错误: {:#}", bank_index, e);
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}
