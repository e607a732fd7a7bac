// ==========================================
// 邮轮部署排期系统 - API 层
// ==========================================
// 职责: 业务接口,统一错误转换
// ==========================================

pub mod error;
pub mod schedule_api;

pub use error::{ApiError, ApiResult};
pub use schedule_api::{GenerateOutcome, ScheduleApi, ScheduleOptions};
