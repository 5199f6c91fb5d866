//! Test support: a tiny regex scanner so grammar tests can be written as
//! Lox source instead of hand-built token vectors.

#![allow(dead_code)]

use regex::Regex;

use loxparse::{parse_with_config, Diagnostics, Literal, Parser, ParserConfig, Stmt, Token, TokenKind};

fn keyword(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "and" => TokenKind::And,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "fun" => TokenKind::Fun,
        "if" => TokenKind::If,
        "nil" => TokenKind::Nil,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

fn operator(op: &str) -> TokenKind {
    match op {
        "(" => TokenKind::LeftParen,
        ")" => TokenKind::RightParen,
        "{" => TokenKind::LeftBrace,
        "}" => TokenKind::RightBrace,
        "," => TokenKind::Comma,
        "." => TokenKind::Dot,
        "-" => TokenKind::Minus,
        "+" => TokenKind::Plus,
        ";" => TokenKind::Semicolon,
        "/" => TokenKind::Slash,
        "*" => TokenKind::Star,
        "!" => TokenKind::Bang,
        "!=" => TokenKind::BangEqual,
        "=" => TokenKind::Equal,
        "==" => TokenKind::EqualEqual,
        ">" => TokenKind::Greater,
        ">=" => TokenKind::GreaterEqual,
        "<" => TokenKind::Less,
        "<=" => TokenKind::LessEqual,
        other => panic!("test scanner: unknown operator {:?}", other),
    }
}

/// Scans Lox source into tokens, one line at a time, ending with `Eof`.
pub fn scan(source: &str) -> Vec<Token> {
    let pattern = Regex::new(
        r#"(?P<num>\d+(?:\.\d+)?)|(?P<str>"[^"]*")|(?P<word>[A-Za-z_][A-Za-z0-9_]*)|(?P<op>!=|==|<=|>=|[(){},.\-+;/*!=<>])"#,
    )
    .unwrap();

    let mut tokens = Vec::new();
    let mut last_line = 1;

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        last_line = line;

        for caps in pattern.captures_iter(text) {
            let token = if let Some(m) = caps.name("num") {
                let value: f64 = m.as_str().parse().unwrap();
                Token::with_literal(TokenKind::Number, m.as_str(), Literal::Number(value), line)
            } else if let Some(m) = caps.name("str") {
                let raw = m.as_str();
                let inner = &raw[1..raw.len() - 1];
                Token::with_literal(TokenKind::String, raw, Literal::String(inner.to_string()), line)
            } else if let Some(m) = caps.name("word") {
                let kind = keyword(m.as_str()).unwrap_or(TokenKind::Identifier);
                Token::new(kind, m.as_str(), line)
            } else {
                let op = caps.name("op").unwrap().as_str();
                Token::new(operator(op), op, line)
            };
            tokens.push(token);
        }
    }

    tokens.push(Token::eof(last_line));
    tokens
}

/// Parses source with an explicit config.
pub fn parse_source_with(source: &str, config: &ParserConfig) -> (Vec<Option<Stmt>>, Diagnostics) {
    let tokens = scan(source);
    let mut diagnostics = Diagnostics::new();
    let statements = parse_with_config(&tokens, config, &mut diagnostics);
    (statements, diagnostics)
}

/// Parses source with default limits.
pub fn parse_source(source: &str) -> (Vec<Option<Stmt>>, Diagnostics) {
    parse_source_with(source, &ParserConfig::default())
}

/// Renders every top-level result; failed declarations show as `<error>`.
pub fn render(statements: &[Option<Stmt>]) -> Vec<String> {
    statements
        .iter()
        .map(|s| match s {
            Some(stmt) => stmt.to_string(),
            None => "<error>".to_string(),
        })
        .collect()
}

/// Parses source that must be error-free and renders it.
pub fn sexpr(source: &str) -> Vec<String> {
    let (statements, diagnostics) = parse_source(source);
    let messages: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
    assert!(messages.is_empty(), "unexpected diagnostics: {:?}", messages);
    render(&statements)
}

/// Parses a single standalone expression and renders it.
pub fn expr(source: &str) -> String {
    let tokens = scan(source);
    let mut diagnostics = Diagnostics::new();
    let parsed = Parser::new(&tokens, &mut diagnostics).parse_expression();
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics);
    parsed.expect("expression").to_string()
}

/// Parses exactly one error-free declaration.
pub fn single(source: &str) -> Stmt {
    let (mut statements, diagnostics) = parse_source(source);
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics);
    assert_eq!(statements.len(), 1);
    statements.remove(0).expect("declaration")
}
