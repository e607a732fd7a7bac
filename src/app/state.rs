// ==========================================
// 邮轮部署排期系统 - 应用状态
// ==========================================
// 职责: 持有一次会话的全部状态,对外提供命令
// 状态: 配置 / 船队目录 / 航程表 / 选择 / 复核表格 / 操作日志
// 说明: 命令返回 Notice（对应界面上的提示框）
// ==========================================

use crate::api::{ApiError, ApiResult, GenerateOutcome, ScheduleApi, ScheduleOptions};
use crate::app::notice::Notice;
use crate::app::request::ScheduleRequest;
use crate::config::SchedulerConfig;
use crate::domain::action_log::{ActionLog, ActionType};
use crate::domain::fleet::ShipCatalog;
use crate::domain::schedule::ScheduleColumn;
use crate::domain::types::Priority;
use crate::domain::voyage::VoyageTable;
use crate::engine::{DerivationStats, PriorityEditor, ReviewGrid, SelectionState};
use crate::importer::{VoyageGenerator, VoyageImporter};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument, warn};

/// 应用状态
pub struct AppState {
    config: SchedulerConfig,
    catalog: ShipCatalog,
    voyages: VoyageTable,
    selection: SelectionState,
    grid: Option<ReviewGrid>,
    last_stats: Option<DerivationStats>,
    action_log: Vec<ActionLog>,
    api: ScheduleApi,
}

impl AppState {
    /// 按配置创建应用状态
    ///
    /// 配置了 voyage_file 时导入该文件,否则生成样例航程表。
    pub fn new(config: SchedulerConfig) -> ApiResult<Self> {
        config.validate()?;
        let voyages = match &config.voyage_file {
            Some(path) => {
                info!(path = %path.display(), "导入航程表");
                VoyageImporter::default().import(path)?
            }
            None => VoyageGenerator::new(&config.catalog, config.dataset.clone()).generate()?,
        };
        Ok(Self::with_voyages(config, voyages))
    }

    /// 使用现成航程表创建（测试与嵌入场景）
    pub fn with_voyages(config: SchedulerConfig, voyages: VoyageTable) -> Self {
        let catalog = config.catalog.clone();
        let selection = SelectionState::new(&catalog);
        info!(
            voyages = voyages.len(),
            brands = catalog.brands().len(),
            "应用状态初始化完成"
        );
        Self {
            config,
            catalog,
            voyages,
            selection,
            grid: None,
            last_stats: None,
            action_log: Vec::new(),
            api: ScheduleApi::new(),
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ShipCatalog {
        &self.catalog
    }

    pub fn voyages(&self) -> &VoyageTable {
        &self.voyages
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub fn grid(&self) -> Option<&ReviewGrid> {
        self.grid.as_ref()
    }

    pub fn last_stats(&self) -> Option<&DerivationStats> {
        self.last_stats.as_ref()
    }

    pub fn action_log(&self) -> &[ActionLog] {
        &self.action_log
    }

    /// 默认导出路径（配置中的文件名）
    pub fn default_export_path(&self) -> PathBuf {
        PathBuf::from(&self.config.default_export_file)
    }

    // ==========================================
    // 生成排期
    // ==========================================

    /// 生成排期
    ///
    /// 成功时替换复核表格; 未选船、空结果与错误都不动已有表格。
    #[instrument(skip(self))]
    pub fn generate_schedule(&mut self, options: ScheduleOptions) -> Notice {
        let outcome =
            self.api
                .generate_schedule(&self.voyages, &self.catalog, &self.selection, &options);

        match outcome {
            Ok(GenerateOutcome::Scheduled { grid, stats }) => {
                let count = grid.len().to_string();
                let schedule_id = grid.schedule_id().to_string();
                self.action_log.push(
                    ActionLog::new(ActionType::GenerateSchedule, Some(schedule_id))
                        .with_payload(json!({ "options": options, "stats": stats })),
                );
                self.grid = Some(grid);
                self.last_stats = Some(stats);
                Notice::info("SCHEDULED", "notice.scheduled", &[("count", count.as_str())])
            }
            Ok(GenerateOutcome::NoDeployments { stats }) => {
                self.action_log.push(
                    ActionLog::new(ActionType::GenerateSchedule, None)
                        .with_payload(json!({ "options": options, "stats": stats }))
                        .with_detail("no deployments"),
                );
                self.last_stats = Some(stats);
                Notice::info("NO_DEPLOYMENTS", "notice.no_deployments", &[])
            }
            Err(err) => {
                if err.is_informational() {
                    info!(code = err.code(), "生成排期未执行");
                } else {
                    error!(code = err.code(), error = %err, "生成排期失败");
                }
                Notice::from(&err)
            }
        }
    }

    // ==========================================
    // 复核表格编辑
    // ==========================================

    fn grid_mut(&mut self) -> ApiResult<&mut ReviewGrid> {
        self.grid
            .as_mut()
            .ok_or_else(|| ApiError::InvalidInput("尚未生成排期".to_string()))
    }

    /// 双击单元格（仅 Priority 列可编辑）
    pub fn begin_priority_edit(
        &mut self,
        row: usize,
        column: ScheduleColumn,
    ) -> ApiResult<PriorityEditor> {
        let editor = self.grid_mut()?.begin_edit(row, column)?;
        Ok(editor.clone())
    }

    /// 在编辑器中选定优先级
    ///
    /// 值无变化时返回 None。
    pub fn commit_priority_edit(&mut self, choice: Priority) -> ApiResult<Option<Notice>> {
        let grid = self.grid_mut()?;
        let schedule_id = grid.schedule_id().to_string();
        let Some(record) = grid.commit(choice)? else {
            return Ok(None);
        };

        let row = (record.row + 1).to_string();
        let notice = Notice::info(
            "PRIORITY_UPDATED",
            "notice.priority_updated",
            &[
                ("row", row.as_str()),
                ("ship", record.ship_name.as_str()),
                ("from", record.from.as_str()),
                ("to", record.to.as_str()),
            ],
        );
        self.action_log.push(
            ActionLog::new(ActionType::PriorityOverride, Some(schedule_id))
                .with_payload(json!(record)),
        );
        Ok(Some(notice))
    }

    /// 编辑器失焦（不改值）
    pub fn priority_focus_lost(&mut self) -> bool {
        self.grid.as_mut().map(ReviewGrid::focus_lost).unwrap_or(false)
    }

    /// 直接改写某行优先级
    pub fn edit_priority(&mut self, row: usize, choice: Priority) -> ApiResult<Option<Notice>> {
        self.begin_priority_edit(row, ScheduleColumn::Priority)?;
        self.commit_priority_edit(choice)
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 导出当前复核表格
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn export_schedule(&mut self, path: &Path) -> Notice {
        let Some(grid) = self.grid.as_ref() else {
            warn!("尚未生成排期,忽略导出");
            return Notice::info("NO_SCHEDULE", "notice.no_schedule", &[]);
        };

        match self.api.export_schedule(grid, path) {
            Ok(receipt) => {
                let shown = receipt.path.display().to_string();
                self.action_log.push(
                    ActionLog::new(ActionType::Export, Some(grid.schedule_id().to_string()))
                        .with_payload(json!(receipt)),
                );
                Notice::info("EXPORTED", "notice.export_success", &[("path", shown.as_str())])
            }
            Err(err) => {
                error!(error = %err, "导出失败");
                self.action_log.push(
                    ActionLog::new(ActionType::Export, Some(grid.schedule_id().to_string()))
                        .with_detail(err.to_string()),
                );
                Notice::from(&err)
            }
        }
    }

    // ==========================================
    // 批处理请求
    // ==========================================

    /// 依次执行: 应用选择 → 生成 → 人工改写 → 导出（有 output 或 export 时）
    ///
    /// 返回过程中产生的全部提示; 某步失败时停止后续步骤。
    pub fn run_request(&mut self, request: &ScheduleRequest) -> Vec<Notice> {
        let mut notices = Vec::new();

        if let Err(err) = request.apply_selection(&self.catalog, &mut self.selection) {
            notices.push(Notice::from(&ApiError::from(err)));
            return notices;
        }

        let previous = self.grid.as_ref().map(|g| g.schedule_id().to_string());
        notices.push(self.generate_schedule(request.options()));
        let current = self.grid.as_ref().map(|g| g.schedule_id().to_string());
        if current.is_none() || current == previous {
            return notices;
        }

        for ov in &request.priority_overrides {
            match self.edit_priority(ov.row, ov.priority) {
                Ok(Some(notice)) => notices.push(notice),
                Ok(None) => {}
                Err(err) => {
                    notices.push(Notice::from(&err));
                    return notices;
                }
            }
        }

        let target = match &request.output {
            Some(output) => Some(output.clone()),
            None if request.export => Some(self.default_export_path()),
            None => None,
        };
        if let Some(path) = target {
            notices.push(self.export_schedule(&path));
        }
        notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notice::NoticeLevel;
    use crate::domain::types::CasinoStatus;
    use crate::domain::voyage::{VoyageRecord, VoyageSource};
    use crate::i18n::{set_locale, tests::locale_guard};
    use chrono::NaiveDate;

    fn voyage(ship: &str, port: &str, home: &str, day: u32, casino: CasinoStatus) -> VoyageRecord {
        let arrival = NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        VoyageRecord {
            ship_name: ship.to_string(),
            port: port.to_string(),
            home_port: home.to_string(),
            arrival_date: arrival,
            departure_date: arrival.succ_opt().unwrap(),
            deployment_window: "7".to_string(),
            priority: Priority::Low,
            is_sea_day: false,
            casino,
        }
    }

    fn state() -> AppState {
        let table = VoyageTable::new(
            VoyageSource::Synthetic { seed: None },
            vec![
                voyage("Sky Princess", "Miami", "Miami", 1, CasinoStatus::Open),
                voyage("Sky Princess", "Nassau", "Miami", 2, CasinoStatus::Open),
                voyage("Carnival Vista", "Cozumel", "Galveston", 3, CasinoStatus::Closed),
            ],
        );
        AppState::with_voyages(SchedulerConfig::default(), table)
    }

    #[test]
    fn test_generate_without_selection_is_info() {
        let _guard = locale_guard();
        set_locale("en");
        let mut app = state();

        let notice = app.generate_schedule(ScheduleOptions::default());
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.title, "No Selection");
        assert_eq!(notice.message, "Please select at least one ship.");
        assert!(app.grid().is_none());
        assert!(app.action_log().is_empty());
    }

    #[test]
    fn test_generate_then_edit_priority() {
        let _guard = locale_guard();
        set_locale("en");
        let mut app = state();
        let catalog = app.catalog().clone();
        app.selection_mut()
            .pick(&catalog, "Princess Cruises", "Sky Princess")
            .unwrap();

        // 品牌未勾选时选中的船不计入
        let notice = app.generate_schedule(ScheduleOptions::default());
        assert_eq!(notice.code, "NO_SELECTION");

        // 勾选品牌会清空已选船舶,需重新选中
        app.selection_mut()
            .toggle_brand("Princess Cruises", true)
            .unwrap();
        app.selection_mut()
            .pick(&catalog, "Princess Cruises", "Sky Princess")
            .unwrap();
        let notice = app.generate_schedule(ScheduleOptions::default());
        assert_eq!(notice.code, "SCHEDULED");
        let grid = app.grid().unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.entries()[0].priority, Priority::Medium);

        assert!(app.edit_priority(0, Priority::Medium).unwrap().is_none());
        let notice = app.edit_priority(0, Priority::High).unwrap().unwrap();
        assert_eq!(notice.code, "PRIORITY_UPDATED");
        assert_eq!(app.grid().unwrap().entries()[0].priority, Priority::High);

        let kinds: Vec<_> = app.action_log().iter().map(|a| a.action_type).collect();
        assert_eq!(
            kinds,
            vec![ActionType::GenerateSchedule, ActionType::PriorityOverride]
        );
    }

    #[test]
    fn test_non_priority_column_is_rejected() {
        let mut app = state();
        app.selection_mut().toggle_brand("Princess Cruises", true).unwrap();
        app.generate_schedule(ScheduleOptions::default());

        let err = app
            .begin_priority_edit(0, ScheduleColumn::Port)
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");
        assert!(app.begin_priority_edit(0, ScheduleColumn::Priority).is_ok());
        assert!(app.priority_focus_lost());
        assert!(!app.priority_focus_lost());
    }

    #[test]
    fn test_export_without_schedule() {
        let _guard = locale_guard();
        set_locale("en");
        let mut app = state();
        let notice = app.export_schedule(Path::new("out.xlsx"));
        assert_eq!(notice.code, "NO_SCHEDULE");
        assert!(!notice.is_error());
    }

    #[test]
    fn test_empty_result_keeps_previous_grid() {
        let mut app = state();
        app.selection_mut().toggle_brand("Princess Cruises", true).unwrap();
        app.generate_schedule(ScheduleOptions::default());
        let first = app.grid().unwrap().schedule_id().to_string();

        app.selection_mut().toggle_brand("Princess Cruises", false).unwrap();
        app.selection_mut().toggle_brand("Seabourn", true).unwrap();
        let notice = app.generate_schedule(ScheduleOptions::default());
        assert_eq!(notice.code, "NO_DEPLOYMENTS");
        assert_eq!(app.grid().unwrap().schedule_id(), first);
        assert_eq!(app.last_stats().unwrap().scheduled, 0);
    }
}
