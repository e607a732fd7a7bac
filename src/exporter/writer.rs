// ==========================================
// 邮轮部署排期系统 - 表格写出器
// ==========================================
// 约定: 第一行表头,其后每个排期条目一行,全部按文本写出
// ==========================================

use crate::exporter::error::{ExportError, ExportResult};
use std::path::Path;

/// 表格写出接口
pub trait TableWriter {
    fn write_table(&self, path: &Path, headers: &[&str], rows: &[Vec<String>]) -> ExportResult<()>;
}

// ==========================================
// CSV 写出
// ==========================================
pub struct CsvTableWriter;

impl TableWriter for CsvTableWriter {
    fn write_table(&self, path: &Path, headers: &[&str], rows: &[Vec<String>]) -> ExportResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(headers)?;
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

// ==========================================
// Excel 写出
// ==========================================
// 写入默认工作表（Sheet1）
pub struct XlsxTableWriter;

impl TableWriter for XlsxTableWriter {
    fn write_table(&self, path: &Path, headers: &[&str], rows: &[Vec<String>]) -> ExportResult<()> {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book
            .get_sheet_mut(&0)
            .ok_or_else(|| ExportError::XlsxError("工作簿缺少默认工作表".to_string()))?;

        // umya 坐标从 1 开始: (列, 行)
        for (col, header) in headers.iter().enumerate() {
            sheet
                .get_cell_mut((col as u32 + 1, 1))
                .set_value_string(header.to_string());
        }
        for (r, row) in rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                sheet
                    .get_cell_mut((col as u32 + 1, r as u32 + 2))
                    .set_value_string(value.clone());
            }
        }

        umya_spreadsheet::writer::xlsx::write(&book, path)?;
        Ok(())
    }
}
