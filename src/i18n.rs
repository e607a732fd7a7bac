// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"en" 或 "zh-CN"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数,占位符形如 %{name}）
///
/// # 示例
/// ```no_run
/// use deployment_scheduler::i18n::t_with_args;
/// let msg = t_with_args("notice.export_success.message", &[("path", "/tmp/schedule.xlsx")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // locale 为全局状态,测试默认并行执行,这里串行化
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    /// 获取 locale 测试锁; 其他测试 panic 导致锁中毒时照常取得
    pub(crate) fn locale_guard() -> MutexGuard<'static, ()> {
        LOCALE_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn test_locale_guard_survives_poisoned_lock() {
        let poisoned = std::thread::spawn(|| {
            let _guard = locale_guard();
            panic!("持锁时失败");
        })
        .join();
        assert!(poisoned.is_err());

        let _guard = locale_guard();
        set_locale("en");
        assert_eq!(t("notice.no_selection.title"), "No Selection");
    }

    #[test]
    fn test_set_locale() {
        let _guard = locale_guard();
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");

        set_locale("en");
        assert_eq!(current_locale(), "en");
    }

    #[test]
    fn test_translate_simple() {
        let _guard = locale_guard();
        set_locale("en");
        assert_eq!(t("notice.no_selection.title"), "No Selection");

        set_locale("zh-CN");
        assert_eq!(t("common.success"), "操作成功");

        set_locale("en");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = locale_guard();
        set_locale("en");
        let msg = t_with_args("notice.export_failed.message", &[("error", "disk full")]);
        assert_eq!(msg, "Failed to export schedule: disk full");
    }
}
