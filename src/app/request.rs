// ==========================================
// 邮轮部署排期系统 - 排期请求（CLI 输入）
// ==========================================
// 职责: 描述一次完整操作: 选船 → 生成 → 人工改写 → 导出
// 格式: JSON
// ==========================================

use crate::api::ScheduleOptions;
use crate::domain::fleet::ShipCatalog;
use crate::domain::types::Priority;
use crate::engine::{DateRange, SelectionError, SelectionState};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 单品牌选择（出现即视为勾选）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandRequest {
    pub brand: String,
    #[serde(default)]
    pub all_ships: bool,
    #[serde(default)]
    pub ships: Vec<String>,
}

/// 人工改写某行优先级
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityOverrideRequest {
    pub row: usize,
    pub priority: Priority,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub brands: Vec<BrandRequest>,
    #[serde(default)]
    pub home_ports_only: bool,
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub priority_overrides: Vec<PriorityOverrideRequest>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// 未给 output 时导出到配置中的默认文件
    #[serde(default)]
    pub export: bool,
}

impl ScheduleRequest {
    /// 勾选全部品牌（无请求文件时的默认操作）
    pub fn all_brands(catalog: &ShipCatalog) -> Self {
        Self {
            brands: catalog
                .brand_names()
                .map(|b| BrandRequest {
                    brand: b.to_string(),
                    all_ships: false,
                    ships: Vec::new(),
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn options(&self) -> ScheduleOptions {
        ScheduleOptions {
            home_ports_only: self.home_ports_only,
            date_range: self.date_range,
        }
    }

    /// 把请求中的选择写入选择状态（先清空）
    pub fn apply_selection(
        &self,
        catalog: &ShipCatalog,
        state: &mut SelectionState,
    ) -> Result<(), SelectionError> {
        state.clear();
        for brand in &self.brands {
            if brand.all_ships {
                state.set_all_ships(catalog, &brand.brand, true)?;
                continue;
            }
            state.toggle_brand(&brand.brand, true)?;
            for ship in &brand.ships {
                state.pick(catalog, &brand.brand, ship)?;
            }
        }
        Ok(())
    }
}
