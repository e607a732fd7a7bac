// ==========================================
// 邮轮部署排期系统 - 航程表导入器
// ==========================================
// 流程: 解析 → 映射 → 航程表
// 红线: 任一行映射失败即整体失败,不产生半张表
// ==========================================

use crate::domain::voyage::{VoyageSource, VoyageTable};
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::VoyageFieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::voyage_importer_trait::{FieldMapper, FileParser};
use std::path::Path;
use tracing::{info, instrument, warn};

pub struct VoyageImporter {
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
}

impl Default for VoyageImporter {
    fn default() -> Self {
        Self::new(Box::new(UniversalFileParser), Box::new(VoyageFieldMapper))
    }
}

impl VoyageImporter {
    pub fn new(file_parser: Box<dyn FileParser>, field_mapper: Box<dyn FieldMapper>) -> Self {
        Self {
            file_parser,
            field_mapper,
        }
    }

    /// 从 .csv/.xlsx/.xls 文件导入航程表
    #[instrument(skip(self, file_path), fields(path = %file_path.as_ref().display()))]
    pub fn import<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<VoyageTable> {
        let path = file_path.as_ref();
        let raw_records = self.file_parser.parse_to_raw_records(path)?;

        let records = raw_records
            .iter()
            .map(|raw| self.field_mapper.map_to_voyage(raw))
            .collect::<ImportResult<Vec<_>>>()
            .map_err(|e| {
                warn!(error = %e, "航程表映射失败");
                e
            })?;

        info!(rows = records.len(), "航程表导入完成");
        Ok(VoyageTable::new(
            VoyageSource::File {
                path: path.display().to_string(),
            },
            records,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fleet::ShipCatalog;
    use crate::importer::generator::{write_voyages_csv, GeneratorConfig, VoyageGenerator};
    use tempfile::TempDir;

    #[test]
    fn test_generated_csv_reimports_identically() {
        let catalog = ShipCatalog::default();
        let generated = VoyageGenerator::new(
            &catalog,
            GeneratorConfig {
                rows: 25,
                seed: Some(3),
                ..Default::default()
            },
        )
        .generate()
        .unwrap();

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("voyages.csv");
        write_voyages_csv(&generated, &path).unwrap();

        let imported = VoyageImporter::default().import(&path).unwrap();
        assert_eq!(imported.records(), generated.records());
        assert!(matches!(imported.source, VoyageSource::File { .. }));
    }
}
