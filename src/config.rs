//! 配置常量模块
//!
//! 所有可配置的工具相关常量都在这里定义，便于后期修改

/// 工具名称
pub const TOOL_NAME: &str = "exprlex";

/// 源码文件扩展名
pub const SOURCE_EXTENSION: &str = "expr";

/// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
