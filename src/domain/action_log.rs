// ==========================================
// 邮轮部署排期系统 - 操作日志领域模型
// ==========================================
// 职责: 会话内操作留痕（生成排期 / 人工改优先级 / 导出）
// 说明: 仅保存在内存,不落盘
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ==========================================
// ActionLog - 操作日志
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLog {
    pub action_id: String,              // 日志ID (UUID)
    pub schedule_id: Option<String>,    // 关联排期（生成失败时为 None）
    pub action_type: ActionType,
    pub action_ts: NaiveDateTime,
    pub payload_json: Option<JsonValue>,
    pub detail: Option<String>,
}

// ==========================================
// ActionType - 操作类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    GenerateSchedule,
    PriorityOverride,
    Export,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::GenerateSchedule => "GenerateSchedule",
            ActionType::PriorityOverride => "PriorityOverride",
            ActionType::Export => "Export",
        }
    }
}

impl ActionLog {
    /// 创建新的操作日志（时间戳取当前 UTC）
    pub fn new(action_type: ActionType, schedule_id: Option<String>) -> Self {
        Self {
            action_id: uuid::Uuid::new_v4().to_string(),
            schedule_id,
            action_type,
            action_ts: chrono::Utc::now().naive_utc(),
            payload_json: None,
            detail: None,
        }
    }

    pub fn with_payload(mut self, payload: JsonValue) -> Self {
        self.payload_json = Some(payload);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
