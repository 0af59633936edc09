//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en-US")]
    EnUS,
    /// Chinese (Simplified)
    #[serde(rename = "zh-CN")]
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// The other supported locale
    pub fn toggled(self) -> Self {
        match self {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Table View", "表格视图"));

    // Table
    map.insert("table-no-results", ("No results.", "无结果。"));

    // Pagination
    map.insert("pagination-rows", ("{count} row(s).", "共 {count} 行。"));
    map.insert("pagination-rows-per-page", ("Rows per page", "每页行数"));
    map.insert("pagination-page-of", ("Page {page} of {count}", "第 {page} 页，共 {count} 页"));

    // Demo
    map.insert("demo-col-name", ("Name", "姓名"));
    map.insert("demo-col-age", ("Age", "年龄"));
    map.insert("demo-col-city", ("City", "城市"));
    map.insert("demo-col-email", ("Email", "邮箱"));
    map.insert("demo-col-contact", ("Contact", "联系方式"));
    map.insert("demo-load-sample", ("Load sample", "加载示例"));
    map.insert("demo-toggle-email", ("Show/hide email", "显示/隐藏邮箱"));
    map.insert("demo-clear-data", ("Replace with empty", "清空数据"));
    map.insert("demo-selected", ("Selected", "已选择"));
    map.insert("demo-none", ("none", "无"));
    map.insert("demo-language", ("Language", "语言"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

/// Translate a key and substitute `{name}` placeholders
pub fn t_with(locale: Locale, key: &str, args: &[(&str, String)]) -> SharedString {
    let mut text = t(locale, key).to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    SharedString::from(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_both_locales() {
        assert_eq!(t(Locale::EnUS, "table-no-results").to_string(), "No results.");
        assert_eq!(t(Locale::ZhCN, "table-no-results").to_string(), "无结果。");
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(t(Locale::EnUS, "missing-key").to_string(), "missing-key");
    }

    #[test]
    fn test_placeholders() {
        let text = t_with(Locale::EnUS, "pagination-page-of", &[("page", 2.to_string()), ("count", 5.to_string())]);
        assert_eq!(text.to_string(), "Page 2 of 5");
        let text = t_with(Locale::ZhCN, "pagination-page-of", &[("page", 2.to_string()), ("count", 5.to_string())]);
        assert_eq!(text.to_string(), "第 2 页，共 5 页");
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Locale::EnUS.toggled(), Locale::ZhCN);
        assert_eq!(Locale::ZhCN.toggled(), Locale::EnUS);
    }
}
