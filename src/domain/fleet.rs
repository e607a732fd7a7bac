// ==========================================
// 邮轮部署排期系统 - 船队目录
// ==========================================
// 职责: 品牌 → 船舶列表（有序）
// 说明: 选择归约按目录顺序输出船名
// ==========================================

use serde::{Deserialize, Serialize};

/// 单个品牌及其船舶
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandFleet {
    pub brand: String,
    pub ships: Vec<String>,
}

/// 船队目录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipCatalog {
    brands: Vec<BrandFleet>,
}

impl ShipCatalog {
    pub fn new(brands: Vec<BrandFleet>) -> Self {
        Self { brands }
    }

    pub fn brands(&self) -> &[BrandFleet] {
        &self.brands
    }

    pub fn brand_names(&self) -> impl Iterator<Item = &str> {
        self.brands.iter().map(|b| b.brand.as_str())
    }

    pub fn ships_of(&self, brand: &str) -> Option<&[String]> {
        self.brands
            .iter()
            .find(|b| b.brand == brand)
            .map(|b| b.ships.as_slice())
    }

    /// 所有船舶（按目录顺序,可能包含跨品牌重名）
    pub fn all_ships(&self) -> Vec<&str> {
        self.brands
            .iter()
            .flat_map(|b| b.ships.iter().map(String::as_str))
            .collect()
    }

    pub fn brand_of(&self, ship: &str) -> Option<&str> {
        self.brands
            .iter()
            .find(|b| b.ships.iter().any(|s| s == ship))
            .map(|b| b.brand.as_str())
    }
}

impl Default for ShipCatalog {
    fn default() -> Self {
        let fleet = |brand: &str, ships: [&str; 4]| BrandFleet {
            brand: brand.to_string(),
            ships: ships.iter().map(|s| s.to_string()).collect(),
        };

        Self::new(vec![
            fleet(
                "Carnival Cruise Line",
                ["Carnival Breeze", "Carnival Vista", "Carnival Horizon", "Carnival Dream"],
            ),
            fleet(
                "Princess Cruises",
                ["Regal Princess", "Royal Princess", "Sky Princess", "Majestic Princess"],
            ),
            fleet(
                "Holland America Line",
                ["MS Rotterdam", "MS Koningsdam", "MS Eurodam", "MS Nieuw Amsterdam"],
            ),
            fleet(
                "Costa Cruises",
                ["Costa Smeralda", "Costa Toscana", "Costa Diadema", "Costa Fascinosa"],
            ),
            fleet(
                "Seabourn",
                ["Seabourn Encore", "Seabourn Ovation", "Seabourn Quest", "Seabourn Sojourn"],
            ),
        ])
    }
}
