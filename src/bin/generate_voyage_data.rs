// ==========================================
// 样例航程表生成器
// ==========================================
// 用途: 生成可导入的样例航程表 CSV
// 用法: cargo run --bin generate_voyage_data -- [output.csv] [rows] [seed]
// 说明: 配置 voyage_file 指向输出文件即可基于固定数据排期
// ==========================================

use deployment_scheduler::domain::fleet::ShipCatalog;
use deployment_scheduler::importer::{write_voyages_csv, GeneratorConfig, VoyageGenerator};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    deployment_scheduler::logging::init();

    let mut args = std::env::args().skip(1);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("voyages.csv"));

    let mut config = GeneratorConfig::default();
    if let Some(rows) = args.next() {
        config.rows = rows.trim().parse()?;
    }
    if let Some(seed) = args.next() {
        config.seed = Some(seed.trim().parse()?);
    }

    let catalog = ShipCatalog::default();
    let table = VoyageGenerator::new(&catalog, config).generate()?;
    write_voyages_csv(&table, &output)?;

    println!("rows={} output={}", table.len(), output.display());
    Ok(())
}
