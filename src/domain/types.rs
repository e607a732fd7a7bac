// ==========================================
// 邮轮部署排期系统 - 领域类型定义
// ==========================================
// 职责: 优先级 / 赌场状态 / 部署类型 三个枚举
// 序列化格式: 与导出表格中的显示文本一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 枚举文本解析失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("无法识别的{kind}取值: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

// ==========================================
// 优先级 (Priority)
// ==========================================
// 红线: 由部署窗口推导,复核表格中人工可改
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// 复核表格下拉框的固定选项（顺序即显示顺序）
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ParseEnumError {
                kind: "优先级",
                value: s.to_string(),
            }),
        }
    }
}

// ==========================================
// 赌场状态 (Casino Status)
// ==========================================
// 海上航行日固定为 N/A
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CasinoStatus {
    Open,
    Closed,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl CasinoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CasinoStatus::Open => "Open",
            CasinoStatus::Closed => "Closed",
            CasinoStatus::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for CasinoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CasinoStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(CasinoStatus::Open),
            "closed" => Ok(CasinoStatus::Closed),
            "n/a" | "na" | "" => Ok(CasinoStatus::NotApplicable),
            _ => Err(ParseEnumError {
                kind: "赌场状态",
                value: s.to_string(),
            }),
        }
    }
}

// ==========================================
// 部署类型 (Deployment Type)
// ==========================================
// OtherPortCasinoOpenSkipped 只出现在判定轨迹中,不进入排期表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeploymentType {
    HomePortDeployment,
    OtherPortCasinoClosed,
    OtherPortCasinoOpenSkipped,
}

impl DeploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentType::HomePortDeployment => "Home Port Deployment",
            DeploymentType::OtherPortCasinoClosed => "Other Port Deployment (Casino Closed)",
            DeploymentType::OtherPortCasinoOpenSkipped => {
                "Other Port Deployment (Casino Open - Skipped)"
            }
        }
    }

    /// 是否进入排期表
    pub fn is_scheduled(&self) -> bool {
        !matches!(self, DeploymentType::OtherPortCasinoOpenSkipped)
    }
}

impl fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
