//! 算术表达式词法扫描器
//!
//! 主入口点

mod config;
mod i18n;
mod lexer;
mod repl;

use std::env;
use std::fs;
use std::process;

use config::{TOOL_NAME, SOURCE_EXTENSION, VERSION};
use i18n::{Locale, format_message, get_message, messages};
use lexer::{Scanner, TokenKind};
use repl::Repl;

/// 扫描源文本并打印 token
///
/// 遇到词法错误时返回带位置的消息，剩余输入不再扫描
fn lex_source(source: &str) -> Result<(), String> {
    let mut scanner = Scanner::new(source);

    for token in scanner.scan_tokens() {
        if token.is_eof() {
            break;
        }
        if let TokenKind::Error(msg) = &token.kind {
            return Err(format!("[{}:{}] {}", token.span.line, token.span.column, msg));
        }
        println!("{}", token);
    }

    Ok(())
}

/// 扫描文件
fn lex_file(path: &str, locale: Locale) {
    // 检查文件后缀
    let expected_ext = format!(".{}", SOURCE_EXTENSION);
    if !path.ends_with(&expected_ext) {
        let msg = format_message(
            messages::MSG_CLI_INVALID_EXTENSION,
            locale,
            &[path, SOURCE_EXTENSION],
        );
        eprintln!("{}", msg);
        process::exit(1);
    }

    let source = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            let msg = format_message(messages::MSG_CLI_FILE_NOT_FOUND, locale, &[path]);
            eprintln!("{}", msg);
            process::exit(1);
        }
    };

    if let Err(e) = lex_source(&source) {
        eprintln!("{}\n  {}", get_message(messages::MSG_CLI_LEX_ERROR, locale), e);
        process::exit(1);
    }
}

/// REPL 交互模式
fn run_repl() {
    let result = Repl::new().and_then(|mut repl| repl.run());
    if let Err(e) = result {
        eprintln!("REPL error: {}", e);
        process::exit(1);
    }
}

/// 打印帮助信息
fn print_help(locale: Locale) {
    let usage = format_message(messages::MSG_CLI_USAGE, locale, &[TOOL_NAME]);
    println!("{}", usage);
    println!();
    println!("Commands:");
    println!("  lex <file>     Scan a source file and print its tokens");
    println!("  repl           Start interactive mode");
    println!("  help           Show this help message");
    println!("  version        Show version information");
    println!();
    println!("Options:");
    println!("  --lang <en|zh> Set language (default: en)");
}

/// 打印版本信息
fn print_version(locale: Locale) {
    let msg = format_message(messages::MSG_CLI_VERSION, locale, &[TOOL_NAME, VERSION]);
    println!("{}", msg);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // 默认语言
    let mut locale = Locale::En;

    // 解析语言选项
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--lang" && i + 1 < args.len() {
            locale = match args[i + 1].as_str() {
                "zh" | "cn" | "chinese" => Locale::Zh,
                _ => Locale::En,
            };
            i += 2;
        } else {
            break;
        }
    }

    // 剩余参数
    let remaining: Vec<&str> = args[i..].iter().map(|s| s.as_str()).collect();

    match remaining.as_slice() {
        [] | ["repl"] => run_repl(),
        ["help"] | ["--help"] | ["-h"] => print_help(locale),
        ["version"] | ["--version"] | ["-v"] => print_version(locale),
        ["lex", path] => lex_file(path, locale),
        [path] if path.ends_with(&format!(".{}", SOURCE_EXTENSION)) => {
            lex_file(path, locale)
        }
        _ => {
            print_help(locale);
            process::exit(1);
        }
    }
}
