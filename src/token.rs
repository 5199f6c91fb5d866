/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     token.rs
 * Purpose:  Token model shared with the external scanner.
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the LOXPARSE project.
 *
 * LOXPARSE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::literal::Literal;

/// Represents the **category of a lexical token** in Lox.
///
/// The parser dispatches exclusively on this tag; the lexeme is only kept
/// for diagnostics and for naming identifiers.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Scanner → Tokens → Parser → AST → Resolver → Interpreter
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// End-of-input marker.
    ///
    /// Always the **final token** of a stream; the cursor never moves past it.
    Eof,
}

impl TokenKind {
    /// Returns `true` for keywords that start a fresh declaration or
    /// statement.
    ///
    /// Panic-mode recovery stops skipping as soon as one of these becomes
    /// the current token.
    pub fn begins_declaration(self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::For
                | TokenKind::Fun
                | TokenKind::If
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Var
                | TokenKind::While
        )
    }
}

/// Represents a **single lexical token** handed to the parser.
///
/// Tokens are produced and owned by the scanner. The parser only borrows
/// them and clones the ones it stores inside AST nodes (names, operators,
/// keywords), so later stages can report positions.
///
/// # Example Tokens
/// ```text
/// var  →  { kind: Var,        lexeme: "var", literal: None,            line: 1 }
/// i    →  { kind: Identifier, lexeme: "i",   literal: None,            line: 1 }
/// 42   →  { kind: Number,     lexeme: "42",  literal: Some(Number(42)), line: 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Literal payload for number and string tokens.
    #[serde(default)]
    pub literal: Option<Literal>,

    /// The 1-based source line where this token appeared.
    pub line: usize,
}

impl Token {
    /// Creates a token without a literal payload.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    /// Creates a token carrying a literal payload.
    pub fn with_literal(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Literal,
        line: usize,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: Some(literal),
            line,
        }
    }

    /// Creates the end-of-input marker.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    /// Returns `true` if this is the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    /// Prints **only the lexeme**, which is what users wrote and what error
    /// messages should quote. Use `{:?}` for the full structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synchronization_keywords() {
        for kind in [
            TokenKind::Class,
            TokenKind::For,
            TokenKind::Fun,
            TokenKind::If,
            TokenKind::Print,
            TokenKind::Return,
            TokenKind::Var,
            TokenKind::While,
        ] {
            assert!(kind.begins_declaration(), "{:?}", kind);
        }

        for kind in [TokenKind::Else, TokenKind::Identifier, TokenKind::Semicolon, TokenKind::Eof] {
            assert!(!kind.begins_declaration(), "{:?}", kind);
        }
    }

    #[test]
    fn display_is_the_lexeme() {
        let token = Token::new(TokenKind::BangEqual, "!=", 3);
        assert_eq!(token.to_string(), "!=");
    }

    #[test]
    fn deserializes_without_literal_field() {
        let token: Token =
            serde_json::from_str(r#"{"kind":"Identifier","lexeme":"x","line":2}"#).unwrap();
        assert_eq!(token, Token::new(TokenKind::Identifier, "x", 2));
    }
}
