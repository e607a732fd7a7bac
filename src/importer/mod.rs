// ==========================================
// 邮轮部署排期系统 - 导入层
// ==========================================
// 职责: 航程表来源（随机样例 / 外部表格文件）
// 支持: Excel, CSV
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod generator;
pub mod voyage_importer;
pub mod voyage_importer_trait;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::VoyageFieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use generator::{write_voyages_csv, GeneratorConfig, VoyageGenerator};
pub use voyage_importer::VoyageImporter;

// 重导出 Trait 接口
pub use voyage_importer_trait::{FieldMapper, FileParser, RawRecord};
