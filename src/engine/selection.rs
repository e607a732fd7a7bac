// ==========================================
// 邮轮部署排期系统 - 船舶选择状态与归约
// ==========================================
// 职责: 品牌勾选 / 全选 / 逐船选择 → 去重有序船名列表
// 规则:
// - 品牌已勾选且有逐船选择 → 仅取所选船舶
// - 品牌已勾选且无逐船选择 → 自动展开为该品牌全部船舶
// - 品牌未勾选 → 不贡献任何船舶
// 输出顺序: 品牌顺序 + 目录内船舶顺序,重复船名只保留首次
// ==========================================

use crate::domain::fleet::ShipCatalog;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;
use tracing::{debug, instrument};

/// 选择状态错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("品牌不存在: {0}")]
    UnknownBrand(String),

    #[error("船舶不属于品牌 {brand}: {ship}")]
    UnknownShip { brand: String, ship: String },
}

// ==========================================
// BrandSelection - 单品牌选择状态
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrandSelection {
    pub brand: String,
    pub checked: bool,
    pub all_ships: bool,
    pub picks: BTreeSet<String>,
}

// ==========================================
// SelectionState - 选择状态
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    brands: Vec<BrandSelection>,
}

impl SelectionState {
    /// 按目录品牌顺序创建空选择
    pub fn new(catalog: &ShipCatalog) -> Self {
        Self {
            brands: catalog
                .brand_names()
                .map(|b| BrandSelection {
                    brand: b.to_string(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    pub fn brands(&self) -> &[BrandSelection] {
        &self.brands
    }

    pub fn brand(&self, brand: &str) -> Option<&BrandSelection> {
        self.brands.iter().find(|b| b.brand == brand)
    }

    fn brand_mut(&mut self, brand: &str) -> Result<&mut BrandSelection, SelectionError> {
        self.brands
            .iter_mut()
            .find(|b| b.brand == brand)
            .ok_or_else(|| SelectionError::UnknownBrand(brand.to_string()))
    }

    /// 勾选/取消品牌
    ///
    /// 品牌列表每次切换都会重新装载,已有逐船选择随之清空;
    /// 取消勾选同时取消“全选”。
    pub fn toggle_brand(&mut self, brand: &str, checked: bool) -> Result<(), SelectionError> {
        let selection = self.brand_mut(brand)?;
        selection.checked = checked;
        selection.picks.clear();
        if !checked {
            selection.all_ships = false;
        }
        Ok(())
    }

    /// 品牌“全选”开关
    ///
    /// 打开: 勾选品牌并选中全部船舶; 关闭: 取消品牌勾选并清空选择。
    pub fn set_all_ships(
        &mut self,
        catalog: &ShipCatalog,
        brand: &str,
        on: bool,
    ) -> Result<(), SelectionError> {
        let ships = catalog
            .ships_of(brand)
            .ok_or_else(|| SelectionError::UnknownBrand(brand.to_string()))?;
        let selection = self.brand_mut(brand)?;

        selection.all_ships = on;
        selection.checked = on;
        selection.picks.clear();
        if on {
            selection.picks.extend(ships.iter().cloned());
        }
        Ok(())
    }

    /// 选中某船（重复选中无副作用）
    pub fn pick(
        &mut self,
        catalog: &ShipCatalog,
        brand: &str,
        ship: &str,
    ) -> Result<(), SelectionError> {
        Self::ensure_ship_of(catalog, brand, ship)?;
        self.brand_mut(brand)?.picks.insert(ship.to_string());
        Ok(())
    }

    /// 取消选中某船
    pub fn unpick(&mut self, brand: &str, ship: &str) -> Result<(), SelectionError> {
        let selection = self.brand_mut(brand)?;
        selection.picks.remove(ship);
        if selection.all_ships {
            selection.all_ships = false;
        }
        Ok(())
    }

    /// 清空全部选择
    pub fn clear(&mut self) {
        for selection in &mut self.brands {
            selection.checked = false;
            selection.all_ships = false;
            selection.picks.clear();
        }
    }

    fn ensure_ship_of(
        catalog: &ShipCatalog,
        brand: &str,
        ship: &str,
    ) -> Result<(), SelectionError> {
        let ships = catalog
            .ships_of(brand)
            .ok_or_else(|| SelectionError::UnknownBrand(brand.to_string()))?;
        if ships.iter().any(|s| s == ship) {
            Ok(())
        } else {
            Err(SelectionError::UnknownShip {
                brand: brand.to_string(),
                ship: ship.to_string(),
            })
        }
    }

    /// 归约为去重有序的船名列表
    #[instrument(skip(self, catalog))]
    pub fn reduce(&self, catalog: &ShipCatalog) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut selected = Vec::new();

        for selection in self.brands.iter().filter(|b| b.checked) {
            let ships = match catalog.ships_of(&selection.brand) {
                Some(ships) => ships,
                None => continue,
            };

            let auto_expand = selection.picks.is_empty();
            for ship in ships {
                if !auto_expand && !selection.picks.contains(ship) {
                    continue;
                }
                if seen.insert(ship.as_str()) {
                    selected.push(ship.clone());
                }
            }

            debug!(
                brand = %selection.brand,
                auto_expand,
                picks = selection.picks.len(),
                "品牌选择已归约"
            );
        }

        selected
    }

    /// 船舶搜索: 按名称子串（不区分大小写）过滤各品牌船舶
    pub fn visible_ships<'a>(
        catalog: &'a ShipCatalog,
        search: &str,
    ) -> Vec<(&'a str, Vec<&'a str>)> {
        let needle = search.trim().to_lowercase();
        catalog
            .brands()
            .iter()
            .map(|b| {
                let ships = b
                    .ships
                    .iter()
                    .filter(|s| needle.is_empty() || s.to_lowercase().contains(&needle))
                    .map(String::as_str)
                    .collect();
                (b.brand.as_str(), ships)
            })
            .collect()
    }
}
