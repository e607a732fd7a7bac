// ==========================================
// 邮轮部署排期系统 - 用户提示
// ==========================================
// 职责: 阻塞式提示框的抽象（提示 / 错误）
// 文本: 经 i18n 渲染
// ==========================================

use crate::api::ApiError;
use crate::i18n::{t, t_with_args};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub code: String,
    pub title: String,
    pub message: String,
}

impl Notice {
    fn from_key(level: NoticeLevel, code: &str, key: &str, args: &[(&str, &str)]) -> Self {
        Self {
            level,
            code: code.to_string(),
            title: t(&format!("{}.title", key)),
            message: t_with_args(&format!("{}.message", key), args),
        }
    }

    pub fn info(code: &str, key: &str, args: &[(&str, &str)]) -> Self {
        Self::from_key(NoticeLevel::Info, code, key, args)
    }

    pub fn error(code: &str, key: &str, args: &[(&str, &str)]) -> Self {
        Self::from_key(NoticeLevel::Error, code, key, args)
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl From<&ApiError> for Notice {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::NoSelection => Notice::info(err.code(), "notice.no_selection", &[]),
            ApiError::ExportFailed(cause) => {
                Notice::error(err.code(), "notice.export_failed", &[("error", cause.as_str())])
            }
            other => Notice::error(
                other.code(),
                "notice.error",
                &[("error", other.to_string().as_str())],
            ),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NoticeLevel::Info => "INFO",
            NoticeLevel::Error => "ERROR",
        };
        write!(f, "[{}] {}: {}", tag, self.title, self.message)
    }
}
