use crate::error::FileError;
use crate::models::bank::SubjectBank;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 JSON 文件加载题库
pub async fn load_subject_bank(json_file_path: &Path) -> Result<SubjectBank> {
    let content = fs::read_to_string(json_file_path)
        .await
        .with_context(|| format!("无法读取题库文件: {}", json_file_path.display()))?;

    let bank: SubjectBank = serde_json::from_str(&content)
        .with_context(|| format!("无法解析题库文件: {}", json_file_path.display()))?;

    Ok(bank.with_file_path(json_file_path.to_string_lossy().to_string()))
}

/// 从文件夹中加载所有题库文件
///
/// 解析失败的文件只记录警告并跳过。结果按文件名排序，保证每次运行顺序一致。
pub async fn load_all_banks(folder_path: &str) -> Result<Vec<SubjectBank>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        return Err(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        }
        .into());
    }

    let mut json_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            json_files.push(path);
        }
    }
    json_files.sort();

    let mut banks = Vec::new();
    for path in json_files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_subject_bank(&path).await {
            Ok(bank) => {
                tracing::info!(
                    "成功加载 {} 个题目, {} 篇阅读材料, {} 条答题说明",
                    bank.questions.len(),
                    bank.passages.len(),
                    bank.instructions.len()
                );
                banks.push(bank);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(banks)
}
