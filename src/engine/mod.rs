// ==========================================
// 邮轮部署排期系统 - 引擎层
// ==========================================
// 职责: 选择归约 / 排期推导 / 优先级规则 / 人工复核
// 红线: 引擎不做文件读写, 所有判定必须输出 reason
// ==========================================

pub mod deriver;
pub mod priority;
pub mod review;
pub mod selection;

// 重导出核心引擎
pub use deriver::{
    DateRange, Derivation, DerivationStats, DeriveError, DeriveRequest, RowDecision, RowOutcome,
    ScheduleDeriver,
};
pub use priority::PriorityRule;
pub use review::{GridError, PriorityEditor, PriorityOverride, ReviewGrid};
pub use selection::{BrandSelection, SelectionError, SelectionState};
