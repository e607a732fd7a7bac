// ==========================================
// 邮轮部署排期系统 - 排期 API
// ==========================================
// 职责: 编排 选择归约 → 排期推导 → 复核表格 → 导出
// 说明: 单线程同步执行,调用方持有航程表与表格状态
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::fleet::ShipCatalog;
use crate::domain::voyage::VoyageTable;
use crate::engine::{
    DateRange, DerivationStats, DeriveRequest, ReviewGrid, ScheduleDeriver, SelectionState,
};
use crate::exporter::{ExportReceipt, ScheduleExporter};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument, warn};

/// 生成选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOptions {
    #[serde(default)]
    pub home_ports_only: bool,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

/// 生成结果
#[derive(Debug, Clone)]
pub enum GenerateOutcome {
    /// 有排期,进入复核
    Scheduled {
        grid: ReviewGrid,
        stats: DerivationStats,
    },
    /// 空结果（不是错误）
    NoDeployments { stats: DerivationStats },
}

// ==========================================
// ScheduleApi
// ==========================================
#[derive(Debug, Default)]
pub struct ScheduleApi {
    deriver: ScheduleDeriver,
    exporter: ScheduleExporter,
}

impl ScheduleApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生成排期
    ///
    /// # 错误
    /// - ApiError::NoSelection: 选择归约为空
    /// - ApiError::ValidationError: 部署窗口不是整数
    #[instrument(skip_all, fields(home_ports_only = options.home_ports_only))]
    pub fn generate_schedule(
        &self,
        table: &VoyageTable,
        catalog: &ShipCatalog,
        selection: &SelectionState,
        options: &ScheduleOptions,
    ) -> ApiResult<GenerateOutcome> {
        let selected_ships = selection.reduce(catalog);
        info!(ships = ?selected_ships, "已选船舶");
        if selected_ships.is_empty() {
            return Err(ApiError::NoSelection);
        }

        let request = DeriveRequest {
            selected_ships,
            home_ports_only: options.home_ports_only,
            date_range: options.date_range,
        };
        let derivation = self.deriver.derive(table, &request)?;

        if derivation.is_empty() {
            warn!("当前条件下没有可排期的部署");
            return Ok(GenerateOutcome::NoDeployments {
                stats: derivation.stats,
            });
        }

        Ok(GenerateOutcome::Scheduled {
            grid: ReviewGrid::new(derivation.schedule_id, derivation.entries),
            stats: derivation.stats,
        })
    }

    /// 导出复核表格当前内容
    pub fn export_schedule(&self, grid: &ReviewGrid, path: &Path) -> ApiResult<ExportReceipt> {
        if grid.is_empty() {
            return Err(ApiError::InvalidInput("排期表为空,无可导出内容".to_string()));
        }
        Ok(self.exporter.export(grid, path)?)
    }
}
