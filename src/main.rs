// ==========================================
// 邮轮部署排期系统 - 命令行入口
// ==========================================
// 用法:
//   deployment-scheduler [request.json] [output-path]
//
// 无请求文件时勾选全部品牌; output-path 优先于请求中的 output。
// 日志写 stderr,排期表与提示写 stdout。
// ==========================================

use anyhow::Context;
use deployment_scheduler::app::{AppState, Notice, ScheduleRequest};
use deployment_scheduler::config::SchedulerConfig;
use deployment_scheduler::domain::schedule::ScheduleColumn;
use deployment_scheduler::engine::{DerivationStats, ReviewGrid};
use deployment_scheduler::{i18n, logging};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统（LOG_FORMAT=json 输出 JSON）
    match std::env::var("LOG_FORMAT") {
        Ok(format) if format.eq_ignore_ascii_case("json") => logging::init_json(),
        _ => logging::init(),
    }

    tracing::info!("==================================================");
    tracing::info!("{} v{}", deployment_scheduler::APP_NAME, deployment_scheduler::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let request_path = args.next().map(PathBuf::from);
    let output_arg = args.next().map(PathBuf::from);

    let config_path = std::env::var_os("DEPLOYMENT_SCHEDULER_CONFIG").map(PathBuf::from);
    let config = SchedulerConfig::load(config_path.as_deref())?;
    i18n::set_locale(&config.locale);

    let mut state = AppState::new(config)?;
    tracing::info!(voyages = state.voyages().len(), "航程表就绪");

    let mut request = match &request_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("无法读取请求文件: {}", path.display()))?;
            serde_json::from_str::<ScheduleRequest>(&raw)
                .with_context(|| format!("请求文件格式错误: {}", path.display()))?
        }
        None => ScheduleRequest::all_brands(state.catalog()),
    };
    if output_arg.is_some() {
        request.output = output_arg;
    }

    let notices = state.run_request(&request);

    if let Some(grid) = state.grid() {
        print_grid(grid);
    }
    if let Some(stats) = state.last_stats() {
        print_stats(stats);
    }
    for notice in &notices {
        print_notice(notice);
    }

    if notices.iter().any(Notice::is_error) {
        anyhow::bail!("排期流程未全部完成");
    }
    Ok(())
}

fn print_grid(grid: &ReviewGrid) {
    let headers = ScheduleColumn::headers();
    let rows = grid.rows();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    println!("{}", line(headers));
    println!(
        "{}",
        widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-")
    );
    for row in &rows {
        println!("{}", line(row.iter().map(String::as_str).collect()));
    }
    println!();
}

fn print_stats(stats: &DerivationStats) {
    println!(
        "rows={} ship_matched={} date_matched={} home_port_matched={} sea_days={} skipped_casino_open={} scheduled={}",
        stats.total_rows,
        stats.ship_matched,
        stats.date_matched,
        stats.home_port_matched,
        stats.sea_days,
        stats.skipped_casino_open,
        stats.scheduled
    );
}

fn print_notice(notice: &Notice) {
    println!("{}", notice);
}
