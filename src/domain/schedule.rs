// ==========================================
// 邮轮部署排期系统 - 排期条目领域模型
// ==========================================
// 职责: 排期推导的输出行 + 表格列定义
// 生命周期: 每次推导重新生成,不持久化
// ==========================================

use crate::domain::types::{DeploymentType, Priority};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ScheduleEntry - 排期条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub ship_name: String,
    pub deployment_date: NaiveDate, // = 到港日期
    pub port: String,
    pub home_port: String,
    pub deployment_window: String,
    pub priority: Priority,
    pub deployment_type: DeploymentType,
}

impl ScheduleEntry {
    /// 按列取显示文本（复核表格与导出共用）
    pub fn cell(&self, column: ScheduleColumn) -> String {
        match column {
            ScheduleColumn::ShipName => self.ship_name.clone(),
            ScheduleColumn::DeploymentDate => self.deployment_date.format("%Y-%m-%d").to_string(),
            ScheduleColumn::Port => self.port.clone(),
            ScheduleColumn::HomePort => self.home_port.clone(),
            ScheduleColumn::DeploymentWindow => self.deployment_window.clone(),
            ScheduleColumn::Priority => self.priority.to_string(),
            ScheduleColumn::DeploymentType => self.deployment_type.to_string(),
        }
    }

    pub fn row(&self) -> Vec<String> {
        ScheduleColumn::ALL.iter().map(|c| self.cell(*c)).collect()
    }
}

// ==========================================
// ScheduleColumn - 排期表列
// ==========================================
// 顺序即导出列顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleColumn {
    ShipName,
    DeploymentDate,
    Port,
    HomePort,
    DeploymentWindow,
    Priority,
    DeploymentType,
}

impl ScheduleColumn {
    pub const ALL: [ScheduleColumn; 7] = [
        ScheduleColumn::ShipName,
        ScheduleColumn::DeploymentDate,
        ScheduleColumn::Port,
        ScheduleColumn::HomePort,
        ScheduleColumn::DeploymentWindow,
        ScheduleColumn::Priority,
        ScheduleColumn::DeploymentType,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            ScheduleColumn::ShipName => "Ship Name",
            ScheduleColumn::DeploymentDate => "Deployment Date",
            ScheduleColumn::Port => "Port",
            ScheduleColumn::HomePort => "Home Port",
            ScheduleColumn::DeploymentWindow => "Deployment Window",
            ScheduleColumn::Priority => "Priority",
            ScheduleColumn::DeploymentType => "Deployment Type",
        }
    }

    /// 只有优先级列允许人工编辑
    pub fn is_editable(&self) -> bool {
        matches!(self, ScheduleColumn::Priority)
    }

    pub fn headers() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.header()).collect()
    }
}
