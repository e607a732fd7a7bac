// ==========================================
// 邮轮部署排期系统 - 应用层
// ==========================================
// 职责: 会话状态与命令,连接界面（CLI）与 API 层
// ==========================================

pub mod notice;
pub mod request;
pub mod state;

// 重导出
pub use notice::{Notice, NoticeLevel};
pub use request::{BrandRequest, PriorityOverrideRequest, ScheduleRequest};
pub use state::AppState;
