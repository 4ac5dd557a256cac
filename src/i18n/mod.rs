//! 国际化模块
//!
//! 提供多语言消息支持，目前支持英文和中文

pub mod messages;
pub mod en;
pub mod zh;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// 英文（默认）
    #[default]
    En,
    /// 中文
    Zh,
}

/// 获取指定语言的消息
pub fn get_message(key: &str, locale: Locale) -> &'static str {
    match locale {
        Locale::En => en::get(key),
        Locale::Zh => zh::get(key),
    }
}

/// 获取带参数的消息（使用 {} 占位符）
pub fn format_message(key: &str, locale: Locale, args: &[&str]) -> String {
    let mut msg = get_message(key, locale).to_string();
    for arg in args {
        if let Some(pos) = msg.find("{}") {
            msg.replace_range(pos..pos + 2, arg);
        }
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let msg = format_message(messages::MSG_CLI_VERSION, Locale::En, &["expr", "0.1.0"]);
        assert_eq!(msg, "expr version 0.1.0");
    }

    #[test]
    fn test_locale_fallback() {
        assert_eq!(get_message("NO_SUCH_KEY", Locale::En), "Unknown message key");
        assert_eq!(get_message("NO_SUCH_KEY", Locale::Zh), "未知的消息键");
    }
}
