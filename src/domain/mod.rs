// ==========================================
// 邮轮部署排期系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含文件读写,不含引擎逻辑
// ==========================================

pub mod action_log;
pub mod fleet;
pub mod schedule;
pub mod types;
pub mod voyage;

// 重导出核心类型
pub use action_log::{ActionLog, ActionType};
pub use fleet::{BrandFleet, ShipCatalog};
pub use schedule::{ScheduleColumn, ScheduleEntry};
pub use types::{CasinoStatus, DeploymentType, ParseEnumError, Priority};
pub use voyage::{VoyageRecord, VoyageSource, VoyageTable};
