// ==========================================
// 邮轮部署排期系统 - 航程导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 管道: 文件解析 → 字段映射 → 航程表
// ==========================================

use crate::domain::voyage::VoyageRecord;
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

/// 原始行（表头 → 单元格文本）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 数据行号（从 1 开始,不含表头）
    pub row_number: usize,
    pub fields: HashMap<String, String>,
}

// ==========================================
// FileParser Trait
// ==========================================
// 实现者: CsvParser, ExcelParser
pub trait FileParser {
    /// 解析文件为原始行（跳过完全空白的行）
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 实现者: VoyageFieldMapper
pub trait FieldMapper {
    /// 原始行 → 航程记录（含类型转换）
    fn map_to_voyage(&self, raw: &RawRecord) -> ImportResult<VoyageRecord>;
}
