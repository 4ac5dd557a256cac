//! 交互式 REPL
//!
//! 逐行读取表达式并打印扫描出的 Token

use std::path::PathBuf;

use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use crate::config::{TOOL_NAME, VERSION};
use crate::lexer::{Scanner, Token, TokenKind};

/// 历史记录文件名
const HISTORY_FILE: &str = ".exprlex_history";

/// 历史记录条数上限
const MAX_HISTORY_SIZE: usize = 1000;

/// 交互式 REPL
pub struct Repl {
    editor: Editor<(), DefaultHistory>,
    history_path: PathBuf,
}

impl Repl {
    /// 创建 REPL
    pub fn new() -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let editor = Editor::with_config(config)?;

        // 历史记录放在用户数据目录下
        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(TOOL_NAME)
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        Ok(Self { editor, history_path })
    }

    /// 运行 REPL 主循环
    pub fn run(&mut self) -> rustyline::Result<()> {
        let _ = self.editor.load_history(&self.history_path);

        println!("{} {} REPL", TOOL_NAME, VERSION);
        println!("Type 'exit' to quit.\n");

        loop {
            let prompt = format!("{} ", "expr>".bright_green().bold());

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if line == "exit" || line == "quit" {
                        break;
                    }
                    print_tokens(line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("{}: {:?}", "Error".red().bold(), err);
                    break;
                }
            }
        }

        let _ = self.editor.save_history(&self.history_path);

        Ok(())
    }
}

/// 扫描一行输入并打印所有 token
fn print_tokens(line: &str) {
    let mut scanner = Scanner::new(line);

    for token in scanner.scan_tokens() {
        if token.is_eof() {
            break;
        }
        if let TokenKind::Error(msg) = &token.kind {
            eprintln!(
                "{} [{}:{}] {}",
                "Error".red().bold(),
                token.span.line,
                token.span.column,
                msg
            );
            break;
        }
        println!("{}", format_token(&token));
    }
}

/// 按 token 类型给词素着色
fn format_token(token: &Token) -> String {
    let lexeme = match token.kind {
        TokenKind::Identifier => token.lexeme.cyan().to_string(),
        TokenKind::Number => token.lexeme.yellow().to_string(),
        TokenKind::LeftParen | TokenKind::RightParen => token.lexeme.magenta().to_string(),
        _ => token.lexeme.green().to_string(),
    };
    format!("{:12} {}", format!("{:?}", token.kind), lexeme)
}
