// ==========================================
// 邮轮部署排期系统 - 航程记录领域模型
// ==========================================
// 职责: 航程表的一行（一个靠港日或海上航行日）
// 说明: 部署窗口按文本保存,排期推导时才转换为整数
// ==========================================

use crate::domain::types::{CasinoStatus, Priority};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// VoyageRecord - 航程记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoyageRecord {
    pub ship_name: String,
    pub port: String,                 // 靠港港口
    pub home_port: String,            // 母港
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub deployment_window: String,    // 部署窗口（小时,文本）
    pub priority: Priority,           // 原始优先级,排期时被覆盖
    pub is_sea_day: bool,
    pub casino: CasinoStatus,
}

impl VoyageRecord {
    /// 是否为母港靠港
    pub fn is_home_port_call(&self) -> bool {
        self.port == self.home_port
    }
}

// ==========================================
// VoyageSource - 航程表来源
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoyageSource {
    /// 进程内随机生成
    Synthetic { seed: Option<u64> },
    /// 外部表格文件
    File { path: String },
}

// ==========================================
// VoyageTable - 内存航程表
// ==========================================
// 红线: 排期推导与人工复核都不会修改航程表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoyageTable {
    pub source: VoyageSource,
    records: Vec<VoyageRecord>,
}

impl VoyageTable {
    pub fn new(source: VoyageSource, records: Vec<VoyageRecord>) -> Self {
        Self { source, records }
    }

    pub fn records(&self) -> &[VoyageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 航程表覆盖的到港日期范围
    pub fn arrival_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.arrival_date).min()?;
        let last = self.records.iter().map(|r| r.arrival_date).max()?;
        Some((first, last))
    }
}
