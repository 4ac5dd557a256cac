//! 词法扫描器
//!
//! 将算术表达式源文本转换为 Token 流

use super::token::{Token, TokenKind, Span};

/// 词法扫描器
///
/// 一次性持有完整源文本，逐个产生 token；
/// 扫描到末尾或遇到无法识别的字符后进入终止状态，
/// 之后的每次调用都只返回 Eof
pub struct Scanner {
    /// 源代码字符
    source: Vec<char>,
    /// 当前位置
    current: usize,
    /// 当前 token 起始位置
    start: usize,
    /// 当前行号
    line: usize,
    /// 当前列号
    column: usize,
    /// token 起始列号
    start_column: usize,
}

impl Scanner {
    /// 创建新的扫描器
    ///
    /// 接受任意文本（包括空字符串），不做任何校验
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            current: 0,
            start: 0,
            line: 1,
            column: 1,
            start_column: 1,
        }
    }

    /// 扫描所有 token
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.scan_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        tokens
    }

    /// 扫描单个 token
    pub fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        self.start = self.current;
        self.start_column = self.column;

        if self.is_at_end() {
            return self.make_token(TokenKind::Eof);
        }

        let c = self.advance();

        match c {
            // 分隔符
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),

            // 算术运算符（本文法没有多字符运算符，无需向前看）
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),

            // 数字
            '0'..='9' => self.scan_number(),

            // 标识符（字母开头，支持 Unicode 字母）
            c if c.is_alphabetic() => self.scan_identifier(),

            // 无法识别的字符：产生错误 token 并终止扫描
            _ => {
                self.error_token(&format!("Unexpected character '{}' (U+{:04X})", c, c as u32))
            }
        }
    }

    /// 跳过空白字符
    ///
    /// 换行符也算空白，但会使行号加一
    fn skip_whitespace(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\r' | '\t' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.line += 1;
                    self.column = 1;
                }
                _ => break,
            }
        }
    }

    /// 扫描数字（最长匹配的十进制数字串）
    ///
    /// 不支持小数、符号、科学计数法；负号由独立的 Minus token 表示
    fn scan_number(&mut self) -> Token {
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }

        self.make_token(TokenKind::Number)
    }

    /// 扫描标识符（最长匹配的字母数字串）
    ///
    /// 本文法没有关键字表，"var" 等一律是普通标识符
    fn scan_identifier(&mut self) -> Token {
        while !self.is_at_end() && self.peek().is_alphanumeric() {
            self.advance();
        }

        self.make_token(TokenKind::Identifier)
    }

    /// 判断是否到达源码末尾
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// 前进一个字符并返回
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    /// 查看当前字符
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    /// 创建 token
    fn make_token(&self, kind: TokenKind) -> Token {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let span = Span::new(self.start, self.current, self.line, self.start_column);
        Token::new(kind, lexeme, span)
    }

    /// 创建错误 token
    ///
    /// 同时把游标移到末尾：词法错误不可恢复，之后的调用只返回 Eof
    fn error_token(&mut self, message: &str) -> Token {
        let span = Span::new(self.start, self.current, self.line, self.start_column);
        self.current = self.source.len();
        Token::new(TokenKind::Error(message.to_string()), String::new(), span)
    }
}
