// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use deployment_scheduler::domain::types::{CasinoStatus, Priority};
use deployment_scheduler::domain::voyage::{VoyageRecord, VoyageSource, VoyageTable};

// ==========================================
// VoyageRecord 构建器
// ==========================================

pub struct VoyageBuilder {
    ship_name: String,
    port: String,
    home_port: String,
    arrival_date: NaiveDate,
    deployment_window: String,
    priority: Priority,
    is_sea_day: bool,
    casino: CasinoStatus,
}

impl VoyageBuilder {
    /// 默认: 母港停靠（Miami）、窗口 6、赌场开放、非海上航行日
    pub fn new(ship_name: &str) -> Self {
        Self {
            ship_name: ship_name.to_string(),
            port: "Miami".to_string(),
            home_port: "Miami".to_string(),
            arrival_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            deployment_window: "6".to_string(),
            priority: Priority::Low,
            is_sea_day: false,
            casino: CasinoStatus::Open,
        }
    }

    pub fn port(mut self, port: &str) -> Self {
        self.port = port.to_string();
        self
    }

    pub fn home_port(mut self, home_port: &str) -> Self {
        self.home_port = home_port.to_string();
        self
    }

    /// 停靠他港（港口 ≠ 母港）
    pub fn away(self, port: &str) -> Self {
        self.port(port)
    }

    pub fn arrival(mut self, date: NaiveDate) -> Self {
        self.arrival_date = date;
        self
    }

    /// 2025-03 的某一天
    pub fn march(self, day: u32) -> Self {
        self.arrival(NaiveDate::from_ymd_opt(2025, 3, day).unwrap())
    }

    pub fn window(mut self, window: &str) -> Self {
        self.deployment_window = window.to_string();
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn sea_day(mut self) -> Self {
        self.is_sea_day = true;
        self.casino = CasinoStatus::NotApplicable;
        self
    }

    pub fn casino(mut self, casino: CasinoStatus) -> Self {
        self.casino = casino;
        self
    }

    pub fn build(self) -> VoyageRecord {
        VoyageRecord {
            ship_name: self.ship_name,
            port: self.port,
            home_port: self.home_port,
            arrival_date: self.arrival_date,
            departure_date: self.arrival_date + Duration::days(1),
            deployment_window: self.deployment_window,
            priority: self.priority,
            is_sea_day: self.is_sea_day,
            casino: self.casino,
        }
    }
}

/// 由若干记录组装航程表
pub fn table(records: Vec<VoyageRecord>) -> VoyageTable {
    VoyageTable::new(VoyageSource::Synthetic { seed: None }, records)
}
