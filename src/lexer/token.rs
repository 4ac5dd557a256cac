//! Token 定义
//!
//! 词法分析器产生的标记类型

#![allow(dead_code)]

use std::fmt;

/// Token 类型
///
/// 封闭枚举：新增类型时所有 match 必须显式处理
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ============ 字面量 ============
    /// 标识符（字母开头，后接字母或数字）
    Identifier,
    /// 整数字面量（十进制数字串）
    Number,

    // ============ 算术运算符 ============
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,

    // ============ 分隔符 ============
    /// (
    LeftParen,
    /// )
    RightParen,

    // ============ 特殊 ============
    /// 文件结束
    Eof,
    /// 错误 token（携带描述信息）
    Error(String),
}

/// 源码位置信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// 起始位置（字符偏移）
    pub start: usize,
    /// 结束位置（字符偏移）
    pub end: usize,
    /// 行号（从1开始）
    pub line: usize,
    /// 列号（从1开始）
    pub column: usize,
}

impl Span {
    /// 创建新的位置信息
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self { start, end, line, column }
    }
}

/// Token 结构
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token 类型
    pub kind: TokenKind,
    /// 原始文本
    pub lexeme: String,
    /// 解析后的字面量值（当前扫描器不填充，保留给后续阶段）
    pub literal: Option<i64>,
    /// 位置信息
    pub span: Span,
}

impl Token {
    /// 创建新的 Token
    pub fn new(kind: TokenKind, lexeme: String, span: Span) -> Self {
        Self { kind, lexeme, literal: None, span }
    }

    /// 判断是否是指定类型
    pub fn is(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.kind) == std::mem::discriminant(kind)
    }

    /// 判断是否是文件结束
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// 判断是否是错误
    pub fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}' at {}:{}", self.kind, self.lexeme, self.span.line, self.span.column)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 字面量
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),

            // 算术运算符
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),

            // 分隔符
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),

            // 特殊
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Error(msg) => write!(f, "Error: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_predicates() {
        let eof = Token::new(TokenKind::Eof, String::new(), Span::default());
        assert!(eof.is_eof());
        assert!(!eof.is_error());

        let err = Token::new(TokenKind::Error("bad".to_string()), String::new(), Span::default());
        assert!(err.is_error());
        assert!(err.is(&TokenKind::Error(String::new())));

        let plus = Token::new(TokenKind::Plus, "+".to_string(), Span::new(0, 1, 1, 1));
        assert!(plus.is(&TokenKind::Plus));
        assert!(!plus.is(&TokenKind::Minus));
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Number, "42".to_string(), Span::new(0, 2, 1, 1));
        assert_eq!(token.to_string(), "Number '42' at 1:1");
        assert_eq!(TokenKind::Star.to_string(), "*");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_literal_slot_starts_empty() {
        let token = Token::new(TokenKind::Number, "7".to_string(), Span::new(0, 1, 1, 1));
        assert!(token.literal.is_none());
    }
}
