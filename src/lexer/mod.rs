//! 词法分析模块
//!
//! 将算术表达式文本转换为 Token 流

pub mod token;
pub mod scanner;

pub use token::{Token, TokenKind, Span};
pub use scanner::Scanner;
