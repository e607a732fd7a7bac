// ==========================================
// 邮轮部署排期系统 - 配置
// ==========================================
// 存储: JSON 文件
// 位置: 显式路径,或 <config_dir>/deployment-scheduler/config.json
// 规则: 文件不存在 → 全部默认值; 格式错误 → ConfigError
// ==========================================

use crate::domain::fleet::ShipCatalog;
use crate::importer::generator::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const CONFIG_DIR_NAME: &str = "deployment-scheduler";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件格式错误 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("配置值无效 (key: {key}): {message}")]
    InvalidValue { key: String, message: String },
}

// ==========================================
// SchedulerConfig - 系统配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// 界面语言（en / zh-CN）
    pub locale: String,

    /// 默认导出文件名
    pub default_export_file: String,

    /// 外部航程表文件; 为空时使用随机样例数据
    pub voyage_file: Option<PathBuf>,

    /// 样例数据生成参数
    pub dataset: GeneratorConfig,

    /// 船队目录
    pub catalog: ShipCatalog,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            default_export_file: "deployment_schedule.xlsx".to_string(),
            voyage_file: None,
            dataset: GeneratorConfig::default(),
            catalog: ShipCatalog::default(),
        }
    }
}

impl SchedulerConfig {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 加载配置
    ///
    /// - `Some(path)`: 读取指定文件,文件必须存在
    /// - `None`: 读取默认位置,不存在时返回默认值
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => {
                    debug!("无法确定配置目录,使用默认配置");
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() && !required {
            debug!(path = %path.display(), "配置文件不存在,使用默认配置");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_json(&raw).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;

        info!(path = %path.display(), "配置已加载");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.brands().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "catalog".to_string(),
                message: "船队目录不能为空".to_string(),
            });
        }
        if self.default_export_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "default_export_file".to_string(),
                message: "默认导出文件名不能为空".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            SchedulerConfig::from_json(r#"{"locale": "zh-CN", "dataset": {"rows": 10, "seed": 9}}"#)
                .unwrap();
        assert_eq!(config.locale, "zh-CN");
        assert_eq!(config.dataset.rows, 10);
        assert_eq!(config.dataset.seed, Some(9));
        assert_eq!(config.dataset.ports.len(), 5);
        assert_eq!(config.catalog, ShipCatalog::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            SchedulerConfig::from_json("{ not json"),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_empty_catalog_is_invalid() {
        assert!(matches!(
            SchedulerConfig::from_json(r#"{"catalog": {"brands": []}}"#),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_export_file": "out.csv"}}"#).unwrap();

        let config = SchedulerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.default_export_file, "out.csv");
    }

    #[test]
    fn test_load_missing_explicit_path_is_error() {
        let result = SchedulerConfig::load(Some(Path::new("/nonexistent/dir/config.json")));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }
}
