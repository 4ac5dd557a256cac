//! English messages

use super::messages::*;

/// Get English message
pub fn get(key: &str) -> &'static str {
    match key {
        // CLI messages
        MSG_CLI_USAGE => "Usage: {} <command> [options] <file>",
        MSG_CLI_VERSION => "{} version {}",
        MSG_CLI_FILE_NOT_FOUND => "File not found: {}",
        MSG_CLI_INVALID_EXTENSION => "Invalid file extension: '{}'. Expected '.{}' file",
        MSG_CLI_CANNOT_READ_FILE => "Cannot read file {}: {}",
        MSG_CLI_LEX_ERROR => "[Lexical Error]",

        // Unknown message key
        _ => "Unknown message key",
    }
}
