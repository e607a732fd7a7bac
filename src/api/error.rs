// ==========================================
// 邮轮部署排期系统 - API层错误类型
// ==========================================
// 职责: 汇总各层错误,转换为面向用户的错误
// ==========================================

use crate::config::ConfigError;
use crate::engine::{DeriveError, GridError, SelectionError};
use crate::exporter::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 用户输入
    // ==========================================
    /// 未选择船舶（提示类,不是故障）
    #[error("未选择任何船舶")]
    NoSelection,

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    // ==========================================
    // 文件
    // ==========================================
    #[error("航程表导入失败: {0}")]
    ImportError(String),

    #[error("排期导出失败: {0}")]
    ExportFailed(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 错误代码（界面/日志使用）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NoSelection => "NO_SELECTION",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::ImportError(_) => "IMPORT_ERROR",
            ApiError::ExportFailed(_) => "EXPORT_FAILED",
            ApiError::ConfigError(_) => "CONFIG_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
    }

    /// 是否为提示类（而非故障类）
    pub fn is_informational(&self) -> bool {
        matches!(self, ApiError::NoSelection)
    }
}

impl From<DeriveError> for ApiError {
    fn from(err: DeriveError) -> Self {
        match err {
            DeriveError::NoSelection => ApiError::NoSelection,
            DeriveError::InvalidDateRange { .. } => ApiError::InvalidInput(err.to_string()),
            DeriveError::InvalidDeploymentWindow { .. } => {
                ApiError::ValidationError(err.to_string())
            }
        }
    }
}

impl From<SelectionError> for ApiError {
    fn from(err: SelectionError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<GridError> for ApiError {
    fn from(err: GridError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportFailed(err.to_string())
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// API层 Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
