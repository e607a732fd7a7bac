// ==========================================
// 邮轮部署排期系统 - 样例航程数据生成器
// ==========================================
// 职责: 在进程内随机生成航程表（代替外部表格导入）
// 规则:
// - 船舶从目录中均匀抽取
// - 到港日期从起始日逐日递增,离港 = 到港 + 1 天
// - 海上航行日概率 50%,赌场状态固定 N/A
// - 指定 seed 时结果可复现
// ==========================================

use crate::domain::fleet::ShipCatalog;
use crate::domain::types::{CasinoStatus, Priority};
use crate::domain::voyage::{VoyageRecord, VoyageSource, VoyageTable};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::columns;
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};

pub const DEFAULT_PORTS: [&str; 5] = ["Miami", "Nassau", "Cozumel", "Galveston", "New Orleans"];
pub const DEFAULT_HOME_PORTS: [&str; 3] = ["Miami", "Galveston", "New Orleans"];
pub const DEFAULT_WINDOWS: [&str; 4] = ["6", "8", "10", "12"];

/// 生成参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub seed: Option<u64>,
    pub first_arrival: NaiveDate,
    pub ports: Vec<String>,
    pub home_ports: Vec<String>,
    pub windows: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            rows: 200,
            seed: None,
            first_arrival: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or(NaiveDate::MIN),
            ports: owned(&DEFAULT_PORTS),
            home_ports: owned(&DEFAULT_HOME_PORTS),
            windows: owned(&DEFAULT_WINDOWS),
        }
    }
}

// ==========================================
// VoyageGenerator - 样例数据生成器
// ==========================================
pub struct VoyageGenerator<'a> {
    catalog: &'a ShipCatalog,
    config: GeneratorConfig,
}

impl<'a> VoyageGenerator<'a> {
    pub fn new(catalog: &'a ShipCatalog, config: GeneratorConfig) -> Self {
        Self { catalog, config }
    }

    #[instrument(skip(self), fields(rows = self.config.rows, seed = ?self.config.seed))]
    pub fn generate(&self) -> ImportResult<VoyageTable> {
        let ships = self.catalog.all_ships();
        let cfg = &self.config;
        if ships.is_empty() {
            return Err(ImportError::InvalidGeneratorConfig("船队目录为空".to_string()));
        }
        if cfg.ports.is_empty() || cfg.home_ports.is_empty() || cfg.windows.is_empty() {
            return Err(ImportError::InvalidGeneratorConfig(
                "港口/母港/部署窗口候选不能为空".to_string(),
            ));
        }

        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut records = Vec::with_capacity(cfg.rows);
        for i in 0..cfg.rows {
            let arrival_date = cfg.first_arrival.checked_add_days(Days::new(i as u64));
            let departure_date = arrival_date.and_then(|d| d.checked_add_days(Days::new(1)));
            let (Some(arrival_date), Some(departure_date)) = (arrival_date, departure_date) else {
                return Err(ImportError::InvalidGeneratorConfig(format!(
                    "日期超出范围: first_arrival={}, 第 {} 行",
                    cfg.first_arrival,
                    i + 1
                )));
            };
            let is_sea_day = rng.gen_bool(0.5);
            let casino = if is_sea_day {
                CasinoStatus::NotApplicable
            } else if rng.gen_bool(0.5) {
                CasinoStatus::Closed
            } else {
                CasinoStatus::Open
            };

            // 候选集合已确认非空,choose 不会返回 None
            let pick = |items: &[String], rng: &mut StdRng| {
                items.choose(rng).cloned().unwrap_or_default()
            };

            records.push(VoyageRecord {
                ship_name: ships.choose(&mut rng).map(|s| s.to_string()).unwrap_or_default(),
                port: pick(&cfg.ports, &mut rng),
                home_port: pick(&cfg.home_ports, &mut rng),
                arrival_date,
                departure_date,
                deployment_window: pick(&cfg.windows, &mut rng),
                priority: *Priority::ALL.choose(&mut rng).unwrap_or(&Priority::Low),
                is_sea_day,
                casino,
            });
        }

        info!(rows = records.len(), "样例航程表已生成");
        Ok(VoyageTable::new(
            VoyageSource::Synthetic { seed: cfg.seed },
            records,
        ))
    }
}

/// 航程表写出为 CSV（可再次导入）
pub fn write_voyages_csv(table: &VoyageTable, path: &Path) -> ImportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(columns::ALL)?;

    for r in table.records() {
        let arrival = r.arrival_date.format("%Y-%m-%d").to_string();
        let departure = r.departure_date.format("%Y-%m-%d").to_string();
        writer.write_record([
            r.ship_name.as_str(),
            r.port.as_str(),
            r.home_port.as_str(),
            arrival.as_str(),
            departure.as_str(),
            r.deployment_window.as_str(),
            r.priority.as_str(),
            if r.is_sea_day { "True" } else { "False" },
            r.casino.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
