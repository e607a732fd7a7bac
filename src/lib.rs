// ==========================================
// 邮轮部署排期系统 - 核心库
// ==========================================
// 功能: 选船 → 按规则推导排期 → 人工复核优先级 → 导出表格
// 技术栈: Rust + calamine/csv 导入 + umya-spreadsheet 导出
// 系统定位: 决策支持系统 (人工最终控制权)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据 / 样例数据
pub mod importer;

// 导出层 - 表格输出
pub mod exporter;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 会话状态与命令
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CasinoStatus, DeploymentType, Priority};

// 领域实体
pub use domain::{
    ActionLog, ActionType, ScheduleColumn, ScheduleEntry, ShipCatalog, VoyageRecord, VoyageTable,
};

// 引擎
pub use engine::{
    DateRange, DeriveError, DeriveRequest, PriorityRule, ReviewGrid, ScheduleDeriver,
    SelectionState,
};

// API
pub use api::{ApiError, ApiResult, ScheduleApi, ScheduleOptions};

// 应用
pub use app::{AppState, Notice, NoticeLevel, ScheduleRequest};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Deployment Scheduler";
