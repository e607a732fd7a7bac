// ==========================================
// 邮轮部署排期系统 - 优先级推导规则
// ==========================================
// 规则: 部署窗口 ≤6h → High; ≤8h → Medium; 其余 → Low
// 红线: 只看部署窗口,忽略航程表中已存的优先级
// ==========================================

use crate::domain::types::Priority;
use std::num::{IntErrorKind, ParseIntError};

/// High 档上限（小时,含）
pub const HIGH_MAX_WINDOW_HOURS: i64 = 6;

/// Medium 档上限（小时,含）
pub const MEDIUM_MAX_WINDOW_HOURS: i64 = 8;

// ==========================================
// PriorityRule - 纯函数工具类
// ==========================================
pub struct PriorityRule;

impl PriorityRule {
    /// 按部署窗口（小时）判定优先级
    pub fn for_window_hours(hours: i64) -> Priority {
        if hours <= HIGH_MAX_WINDOW_HOURS {
            Priority::High
        } else if hours <= MEDIUM_MAX_WINDOW_HOURS {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// 解析部署窗口文本（去掉首尾空白后按整数解析）
    ///
    /// 超出 i64 范围的整数饱和到边界值,档位判定不受影响。
    pub fn parse_window(text: &str) -> Result<i64, ParseIntError> {
        match text.trim().parse::<i64>() {
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
            other => other,
        }
    }

    /// 判定理由（写入判定轨迹）
    pub fn reason(hours: i64) -> String {
        match Self::for_window_hours(hours) {
            Priority::High => format!(
                "PRIORITY_HIGH: window={}h <= {}h",
                hours, HIGH_MAX_WINDOW_HOURS
            ),
            Priority::Medium => format!(
                "PRIORITY_MEDIUM: {}h < window={}h <= {}h",
                HIGH_MAX_WINDOW_HOURS, hours, MEDIUM_MAX_WINDOW_HOURS
            ),
            Priority::Low => format!(
                "PRIORITY_LOW: window={}h > {}h",
                hours, MEDIUM_MAX_WINDOW_HOURS
            ),
        }
    }
}
