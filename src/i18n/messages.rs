//! 消息键定义
//!
//! 每个键在各语言表中对应一条消息文本

// CLI 消息
pub const MSG_CLI_USAGE: &str = "MSG_CLI_USAGE";
pub const MSG_CLI_VERSION: &str = "MSG_CLI_VERSION";
pub const MSG_CLI_FILE_NOT_FOUND: &str = "MSG_CLI_FILE_NOT_FOUND";
pub const MSG_CLI_INVALID_EXTENSION: &str = "MSG_CLI_INVALID_EXTENSION";
pub const MSG_CLI_CANNOT_READ_FILE: &str = "MSG_CLI_CANNOT_READ_FILE";
pub const MSG_CLI_LEX_ERROR: &str = "MSG_CLI_LEX_ERROR";
