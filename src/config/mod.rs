// ==========================================
// 邮轮部署排期系统 - 配置层
// ==========================================
// 职责: 系统配置加载与校验
// 存储: JSON 文件（不存在时取默认值）
// ==========================================

pub mod scheduler_config;

pub use scheduler_config::{ConfigError, SchedulerConfig};
