// ==========================================
// 邮轮部署排期系统 - 导出层
// ==========================================
// 职责: 排期表写出为 Excel / CSV
// ==========================================

pub mod error;
pub mod schedule_exporter;
pub mod writer;

pub use error::{ExportError, ExportResult};
pub use schedule_exporter::{ExportFormat, ExportReceipt, ScheduleExporter};
pub use writer::{CsvTableWriter, TableWriter, XlsxTableWriter};
