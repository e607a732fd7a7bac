// ==========================================
// 邮轮部署排期系统 - 字段映射器实现
// ==========================================
// 职责: 表格列 → VoyageRecord 字段 + 类型转换
// 说明: 部署窗口保持文本,不在导入时校验
// ==========================================

use crate::domain::types::{CasinoStatus, Priority};
use crate::domain::voyage::VoyageRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::voyage_importer_trait::{FieldMapper, RawRecord};
use chrono::NaiveDate;

/// 航程表标准列名（导入与样例数据导出共用）
pub mod columns {
    pub const SHIP_NAME: &str = "Ship Name";
    pub const PORT: &str = "Port";
    pub const HOME_PORT: &str = "Home Port";
    pub const ARRIVAL_DATE: &str = "Arrival Date";
    pub const DEPARTURE_DATE: &str = "Departure Date";
    pub const DEPLOYMENT_WINDOW: &str = "Deployment Window";
    pub const PRIORITY: &str = "Priority";
    pub const SEA_DAY: &str = "Sea Day";
    pub const CASINO: &str = "Casino";

    pub const ALL: [&str; 9] = [
        SHIP_NAME,
        PORT,
        HOME_PORT,
        ARRIVAL_DATE,
        DEPARTURE_DATE,
        DEPLOYMENT_WINDOW,
        PRIORITY,
        SEA_DAY,
        CASINO,
    ];
}

pub struct VoyageFieldMapper;

impl FieldMapper for VoyageFieldMapper {
    fn map_to_voyage(&self, raw: &RawRecord) -> ImportResult<VoyageRecord> {
        let row = raw.row_number;
        let is_sea_day = self.parse_bool(raw, columns::SEA_DAY)?.unwrap_or(false);

        // 海上航行日赌场状态固定为 N/A
        let casino = if is_sea_day {
            CasinoStatus::NotApplicable
        } else {
            match self.get_string(raw, columns::CASINO) {
                None => CasinoStatus::NotApplicable,
                Some(v) => v.parse().map_err(|_| ImportError::TypeConversionError {
                    row,
                    field: columns::CASINO.to_string(),
                    message: format!("无法识别的赌场状态: {}", v),
                })?,
            }
        };

        // 原始优先级会被排期覆盖,无法识别时按 Low 处理
        let priority = self
            .get_string(raw, columns::PRIORITY)
            .and_then(|v| v.parse::<Priority>().ok())
            .unwrap_or(Priority::Low);

        Ok(VoyageRecord {
            ship_name: self.require(raw, columns::SHIP_NAME)?,
            port: self.require(raw, columns::PORT)?,
            home_port: self.require(raw, columns::HOME_PORT)?,
            arrival_date: self.require_date(raw, columns::ARRIVAL_DATE)?,
            departure_date: self.require_date(raw, columns::DEPARTURE_DATE)?,
            deployment_window: self.require(raw, columns::DEPLOYMENT_WINDOW)?,
            priority,
            is_sea_day,
            casino,
        })
    }
}

impl VoyageFieldMapper {
    /// 提取字符串字段,支持少量列名别名
    fn get_string(&self, raw: &RawRecord, key: &str) -> Option<String> {
        let aliases: &[&str] = match key {
            columns::SHIP_NAME => &["Ship Name", "Ship"],
            columns::DEPLOYMENT_WINDOW => &["Deployment Window", "Deployment Window (hours)"],
            columns::CASINO => &["Casino", "Casino Status"],
            columns::SEA_DAY => &["Sea Day", "Is Sea Day"],
            _ => &[],
        };

        std::iter::once(key)
            .chain(aliases.iter().copied())
            .filter_map(|k| raw.fields.get(k))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn require(&self, raw: &RawRecord, key: &str) -> ImportResult<String> {
        self.get_string(raw, key).ok_or_else(|| ImportError::MissingField {
            row: raw.row_number,
            field: key.to_string(),
        })
    }

    /// 解析日期（YYYY-MM-DD 或 YYYYMMDD）
    fn require_date(&self, raw: &RawRecord, key: &str) -> ImportResult<NaiveDate> {
        let value = self.require(raw, key)?;
        NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&value, "%Y%m%d"))
            .map_err(|_| ImportError::DateFormatError {
                row: raw.row_number,
                field: key.to_string(),
                value,
            })
    }

    fn parse_bool(&self, raw: &RawRecord, key: &str) -> ImportResult<Option<bool>> {
        match self.get_string(raw, key) {
            None => Ok(None),
            Some(value) => match value.to_lowercase().as_str() {
                "true" | "1" | "yes" | "y" => Ok(Some(true)),
                "false" | "0" | "no" | "n" => Ok(Some(false)),
                _ => Err(ImportError::TypeConversionError {
                    row: raw.row_number,
                    field: key.to_string(),
                    message: format!("无法解析为布尔值: {}", value),
                }),
            },
        }
    }
}
