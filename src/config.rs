use serde::Deserialize;
use std::path::Path;

use crate::error::{AppError, AppResult, ConfigError};

/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = "sequencer.toml";

/// 程序配置文件
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题库 JSON 存放目录
    pub subjects_folder: String,
    /// 排序结果输出目录
    pub output_folder: String,
    /// 是否写出排序结果
    pub write_output: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subjects_folder: "src/data/subjects".to_string(),
            output_folder: "output_sequenced".to_string(),
            write_output: true,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 当前目录存在 `sequencer.toml` 时以其为基础，再由环境变量覆盖
    pub fn load() -> AppResult<Self> {
        let base = if Path::new(CONFIG_FILE_NAME).exists() {
            Self::from_toml_file(Path::new(CONFIG_FILE_NAME))?
        } else {
            Self::default()
        };
        base.with_env_overrides()
    }

    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        Self::from_toml_str(&content)
            .map_err(|e| AppError::toml_parse_failed(path.display().to_string(), e))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env_overrides(self) -> AppResult<Self> {
        Ok(Self {
            subjects_folder: std::env::var("SUBJECTS_FOLDER").unwrap_or(self.subjects_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(self.output_folder),
            write_output: env_bool("WRITE_OUTPUT")?.unwrap_or(self.write_output),
            verbose_logging: env_bool("VERBOSE_LOGGING")?.unwrap_or(self.verbose_logging),
        })
    }
}

fn env_bool(var_name: &str) -> AppResult<Option<bool>> {
    match std::env::var(var_name) {
        Ok(value) => parse_bool(&value).map(Some).ok_or_else(|| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: "bool".to_string(),
            }
            .into()
        }),
        Err(_) => Ok(None),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_partial_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            subjects_folder = "data/jamb"
            verbose_logging = true
            "#,
        )
        .unwrap();

        assert_eq!(config.subjects_folder, "data/jamb");
        assert!(config.verbose_logging);
        assert_eq!(config.output_folder, Config::default().output_folder);
        assert!(config.write_output);
    }

    #[test]
    fn test_toml_rejects_wrong_type() {
        assert!(Config::from_toml_str("write_output = \"maybe\"").is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
