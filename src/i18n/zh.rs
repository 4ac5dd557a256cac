//! 中文消息

use super::messages::*;

/// 获取中文消息
pub fn get(key: &str) -> &'static str {
    match key {
        // CLI 消息
        MSG_CLI_USAGE => "用法: {} <命令> [选项] <文件>",
        MSG_CLI_VERSION => "{} 版本 {}",
        MSG_CLI_FILE_NOT_FOUND => "文件未找到: {}",
        MSG_CLI_INVALID_EXTENSION => "无效的文件扩展名: '{}'。请使用 '.{}' 文件",
        MSG_CLI_CANNOT_READ_FILE => "无法读取文件 {}: {}",
        MSG_CLI_LEX_ERROR => "[词法错误]",

        // 未知消息键
        _ => "未知的消息键",
    }
}
