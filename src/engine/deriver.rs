// ==========================================
// 邮轮部署排期系统 - 排期推导引擎
// ==========================================
// 职责: 航程表 + 已选船舶 + 过滤选项 → 排期条目
// 流程:
// 1. 按已选船舶过滤
// 2. 按到港日期范围过滤（可选）
// 3. 仅母港模式: 只保留 港口 == 母港 的记录
// 4. 逐行判定: 海上航行日跳过; 母港靠港必排;
//    非母港仅在赌场关闭时排入,否则标记跳过
// 5. 排入的记录按部署窗口重算优先级
// 红线: 纯函数,不修改航程表; 每行判定都输出 reason
// ==========================================

use crate::domain::schedule::ScheduleEntry;
use crate::domain::types::{CasinoStatus, DeploymentType, Priority};
use crate::domain::voyage::{VoyageRecord, VoyageTable};
use crate::engine::priority::PriorityRule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

// ==========================================
// 错误类型
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    /// 未选择任何船舶（用户输入问题,不进行推导）
    #[error("未选择任何船舶")]
    NoSelection,

    #[error("日期范围无效: {start} 晚于 {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// 部署窗口不是整数文本,整个推导失败
    #[error("部署窗口不是整数 (行 {row}, 船舶 {ship}): {value:?}")]
    InvalidDeploymentWindow {
        row: usize,
        ship: String,
        value: String,
    },
}

// ==========================================
// 输入
// ==========================================

/// 到港日期范围（闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeriveRequest {
    pub selected_ships: Vec<String>,
    #[serde(default)]
    pub home_ports_only: bool,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

// ==========================================
// 输出
// ==========================================

/// 单行判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowOutcome {
    SeaDay,
    Scheduled {
        deployment_type: DeploymentType,
        priority: Priority,
    },
    Skipped {
        deployment_type: DeploymentType,
    },
}

/// 判定轨迹
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDecision {
    pub row: usize, // 航程表中的下标
    pub ship_name: String,
    pub outcome: RowOutcome,
    pub reason: String,
}

/// 各阶段计数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationStats {
    pub total_rows: usize,
    pub ship_matched: usize,
    pub date_matched: usize,
    pub home_port_matched: usize,
    pub sea_days: usize,
    pub skipped_casino_open: usize,
    pub scheduled: usize,
}

/// 推导结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Derivation {
    pub schedule_id: String,
    pub entries: Vec<ScheduleEntry>,
    pub trace: Vec<RowDecision>,
    pub stats: DerivationStats,
}

impl Derivation {
    /// 无任何排期（空结果,不是错误）
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// ScheduleDeriver - 排期推导引擎
// ==========================================
#[derive(Debug, Default)]
pub struct ScheduleDeriver;

impl ScheduleDeriver {
    pub fn new() -> Self {
        Self
    }

    /// 生成排期
    #[instrument(skip(self, table, request), fields(
        rows = table.len(),
        ships = request.selected_ships.len(),
        home_ports_only = request.home_ports_only
    ))]
    pub fn derive(
        &self,
        table: &VoyageTable,
        request: &DeriveRequest,
    ) -> Result<Derivation, DeriveError> {
        if request.selected_ships.is_empty() {
            warn!("未选择船舶,跳过排期推导");
            return Err(DeriveError::NoSelection);
        }
        if let Some(range) = request.date_range {
            if range.start > range.end {
                return Err(DeriveError::InvalidDateRange {
                    start: range.start,
                    end: range.end,
                });
            }
        }

        let selected: HashSet<&str> = request
            .selected_ships
            .iter()
            .map(String::as_str)
            .collect();

        let mut stats = DerivationStats {
            total_rows: table.len(),
            ..Default::default()
        };

        // 1~3. 过滤阶段（保持航程表原始顺序）
        let by_ship: Vec<(usize, &VoyageRecord)> = table
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| selected.contains(r.ship_name.as_str()))
            .collect();
        stats.ship_matched = by_ship.len();

        let by_date: Vec<(usize, &VoyageRecord)> = by_ship
            .into_iter()
            .filter(|(_, r)| {
                request
                    .date_range
                    .map_or(true, |range| range.contains(r.arrival_date))
            })
            .collect();
        stats.date_matched = by_date.len();

        let candidates: Vec<(usize, &VoyageRecord)> = if request.home_ports_only {
            by_date
                .into_iter()
                .filter(|(_, r)| r.is_home_port_call())
                .collect()
        } else {
            by_date
        };
        stats.home_port_matched = candidates.len();

        debug!(
            ship_matched = stats.ship_matched,
            date_matched = stats.date_matched,
            home_port_matched = stats.home_port_matched,
            "过滤阶段完成"
        );

        // 4~5. 逐行判定
        let mut entries = Vec::new();
        let mut trace = Vec::with_capacity(candidates.len());

        for (row, record) in candidates {
            let decision = Self::decide(row, record)?;
            debug!(row, ship = %record.ship_name, reason = %decision.reason, "行判定");

            match decision.outcome {
                RowOutcome::SeaDay => stats.sea_days += 1,
                RowOutcome::Skipped { .. } => stats.skipped_casino_open += 1,
                RowOutcome::Scheduled {
                    deployment_type,
                    priority,
                } => {
                    stats.scheduled += 1;
                    entries.push(ScheduleEntry {
                        ship_name: record.ship_name.clone(),
                        deployment_date: record.arrival_date,
                        port: record.port.clone(),
                        home_port: record.home_port.clone(),
                        deployment_window: record.deployment_window.clone(),
                        priority,
                        deployment_type,
                    });
                }
            }
            trace.push(decision);
        }

        let schedule_id = uuid::Uuid::new_v4().to_string();
        info!(
            schedule_id = %schedule_id,
            scheduled = stats.scheduled,
            sea_days = stats.sea_days,
            skipped_casino_open = stats.skipped_casino_open,
            "排期推导完成"
        );

        Ok(Derivation {
            schedule_id,
            entries,
            trace,
            stats,
        })
    }

    /// 单行判定（过滤之后的记录）
    pub fn decide(row: usize, record: &VoyageRecord) -> Result<RowDecision, DeriveError> {
        let decision = |outcome, reason: String| RowDecision {
            row,
            ship_name: record.ship_name.clone(),
            outcome,
            reason,
        };

        if record.is_sea_day {
            return Ok(decision(
                RowOutcome::SeaDay,
                "SKIP_SEA_DAY: no port call".to_string(),
            ));
        }

        let (deployment_type, type_reason) = Self::classify(record);
        if !deployment_type.is_scheduled() {
            return Ok(decision(
                RowOutcome::Skipped { deployment_type },
                type_reason,
            ));
        }

        let hours = PriorityRule::parse_window(&record.deployment_window).map_err(|_| {
            DeriveError::InvalidDeploymentWindow {
                row,
                ship: record.ship_name.clone(),
                value: record.deployment_window.clone(),
            }
        })?;
        let priority = PriorityRule::for_window_hours(hours);

        Ok(decision(
            RowOutcome::Scheduled {
                deployment_type,
                priority,
            },
            format!("{}; {}", type_reason, PriorityRule::reason(hours)),
        ))
    }

    /// 部署类型判定（非海上航行日）
    pub fn classify(record: &VoyageRecord) -> (DeploymentType, String) {
        if record.is_home_port_call() {
            return (
                DeploymentType::HomePortDeployment,
                format!("HOME_PORT: port={}", record.port),
            );
        }

        match record.casino {
            CasinoStatus::Closed => (
                DeploymentType::OtherPortCasinoClosed,
                format!(
                    "OTHER_PORT_CASINO_CLOSED: port={}, home_port={}",
                    record.port, record.home_port
                ),
            ),
            status => (
                DeploymentType::OtherPortCasinoOpenSkipped,
                format!(
                    "OTHER_PORT_SKIPPED: port={}, home_port={}, casino={}",
                    record.port, record.home_port, status
                ),
            ),
        }
    }
}
