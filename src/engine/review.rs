// ==========================================
// 邮轮部署排期系统 - 排期复核表格
// ==========================================
// 职责: 按行号访问排期条目,支持优先级单元格的人工改写
// 编辑流程:
// - begin_edit: 仅优先级列可进入编辑,编辑器预填当前值
// - commit: 写入所选值并关闭编辑器
// - focus_lost: 关闭编辑器,保留最后一次提交的值
// 红线: 改写只影响表格/导出副本,不回写航程表
// ==========================================

use crate::domain::schedule::{ScheduleColumn, ScheduleEntry};
use crate::domain::types::Priority;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("行号越界: {row}（共 {len} 行）")]
    RowOutOfRange { row: usize, len: usize },

    #[error("列不可编辑: {0}")]
    ColumnNotEditable(&'static str),

    #[error("当前没有打开的编辑器")]
    NoActiveEdit,
}

/// 优先级编辑器（下拉框的抽象）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityEditor {
    pub row: usize,
    pub current: Priority,
}

impl PriorityEditor {
    pub fn choices(&self) -> [Priority; 3] {
        Priority::ALL
    }
}

/// 人工改写记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityOverride {
    pub row: usize,
    pub ship_name: String,
    pub deployment_date: NaiveDate,
    pub from: Priority,
    pub to: Priority,
    pub edited_at: NaiveDateTime,
}

// ==========================================
// ReviewGrid - 复核表格
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewGrid {
    schedule_id: String,
    entries: Vec<ScheduleEntry>,
    editor: Option<PriorityEditor>,
    overrides: Vec<PriorityOverride>,
}

impl ReviewGrid {
    pub fn new(schedule_id: impl Into<String>, entries: Vec<ScheduleEntry>) -> Self {
        Self {
            schedule_id: schedule_id.into(),
            entries,
            editor: None,
            overrides: Vec::new(),
        }
    }

    pub fn schedule_id(&self) -> &str {
        &self.schedule_id
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, row: usize) -> Result<&ScheduleEntry, GridError> {
        self.entries.get(row).ok_or(GridError::RowOutOfRange {
            row,
            len: self.entries.len(),
        })
    }

    pub fn editor(&self) -> Option<&PriorityEditor> {
        self.editor.as_ref()
    }

    pub fn overrides(&self) -> &[PriorityOverride] {
        &self.overrides
    }

    /// 表头 + 各行显示文本
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.entries.iter().map(ScheduleEntry::row).collect()
    }

    /// 双击单元格进入编辑
    ///
    /// 已有编辑器时先关闭（视为失焦）,即使本次双击未打开新编辑器。
    pub fn begin_edit(
        &mut self,
        row: usize,
        column: ScheduleColumn,
    ) -> Result<&PriorityEditor, GridError> {
        self.editor = None;
        if !column.is_editable() {
            return Err(GridError::ColumnNotEditable(column.header()));
        }
        let current = self.entry(row)?.priority;

        debug!(row, current = %current, "打开优先级编辑器");
        Ok(self.editor.insert(PriorityEditor { row, current }))
    }

    /// 提交所选优先级
    ///
    /// 值有变化时返回改写记录; 选中原值时返回 None。
    pub fn commit(&mut self, choice: Priority) -> Result<Option<PriorityOverride>, GridError> {
        let editor = self.editor.take().ok_or(GridError::NoActiveEdit)?;
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(editor.row)
            .ok_or(GridError::RowOutOfRange { row: editor.row, len })?;

        let from = entry.priority;
        if from == choice {
            return Ok(None);
        }
        entry.priority = choice;

        let record = PriorityOverride {
            row: editor.row,
            ship_name: entry.ship_name.clone(),
            deployment_date: entry.deployment_date,
            from,
            to: choice,
            edited_at: chrono::Utc::now().naive_utc(),
        };
        info!(
            schedule_id = %self.schedule_id,
            row = editor.row,
            ship = %record.ship_name,
            from = %from,
            to = %choice,
            "优先级已人工改写"
        );
        self.overrides.push(record.clone());
        Ok(Some(record))
    }

    /// 编辑器失焦: 关闭编辑器,不改值
    ///
    /// 返回此前是否有打开的编辑器。
    pub fn focus_lost(&mut self) -> bool {
        self.editor.take().is_some()
    }

    /// 直接改写某行优先级（begin_edit + commit）
    pub fn set_priority(
        &mut self,
        row: usize,
        choice: Priority,
    ) -> Result<Option<PriorityOverride>, GridError> {
        self.begin_edit(row, ScheduleColumn::Priority)?;
        self.commit(choice)
    }
}
