// ==========================================
// 邮轮部署排期系统 - 排期导出器
// ==========================================
// 职责: 把复核表格当前内容（含人工改写）写到用户指定路径
// 规则:
// - 按扩展名选择 .xlsx / .csv
// - 无扩展名时补 .xlsx
// - 一次性写出,不重试
// ==========================================

use crate::domain::schedule::ScheduleColumn;
use crate::engine::review::ReviewGrid;
use crate::exporter::error::{ExportError, ExportResult};
use crate::exporter::writer::{CsvTableWriter, TableWriter, XlsxTableWriter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument};

pub const DEFAULT_EXTENSION: &str = "xlsx";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> ExportResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "xlsx" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// 导出回执
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReceipt {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub rows: usize,
}

#[derive(Debug, Default)]
pub struct ScheduleExporter;

impl ScheduleExporter {
    pub fn new() -> Self {
        Self
    }

    /// 规范化导出路径（无扩展名时补默认扩展名）
    pub fn resolve_path(path: &Path) -> ExportResult<PathBuf> {
        if path.as_os_str().is_empty() {
            return Err(ExportError::EmptyPath);
        }
        if path.extension().is_none() {
            return Ok(path.with_extension(DEFAULT_EXTENSION));
        }
        Ok(path.to_path_buf())
    }

    #[instrument(skip(self, grid, path), fields(schedule_id = %grid.schedule_id(), rows = grid.len()))]
    pub fn export(&self, grid: &ReviewGrid, path: &Path) -> ExportResult<ExportReceipt> {
        let path = Self::resolve_path(path)?;
        let format = ExportFormat::from_path(&path)?;

        let headers = ScheduleColumn::headers();
        let rows = grid.rows();

        let writer: &dyn TableWriter = match format {
            ExportFormat::Xlsx => &XlsxTableWriter,
            ExportFormat::Csv => &CsvTableWriter,
        };

        if let Err(e) = writer.write_table(&path, &headers, &rows) {
            error!(path = %path.display(), error = %e, "排期导出失败");
            return Err(e);
        }

        info!(path = %path.display(), ?format, "排期导出成功");
        Ok(ExportReceipt {
            path,
            format,
            rows: rows.len(),
        })
    }
}
