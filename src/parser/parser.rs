/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver functions that turn a token stream into a list of top-level
 * statements.
 *
 * The grammar itself is split across sibling modules:
 * - `helpers.rs`      → Cursor primitives, diagnostics, nesting guard
 * - `expressions.rs`  → Expression grammar & operator precedence
 * - `statements.rs`   → Declarations, statements, `for` desugaring
 * - `recovery.rs`     → Panic-mode synchronization
 *
 * --------------------------------------------------------------------------
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

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::ast::{Expr, Stmt};
use crate::config::ParserConfig;
use crate::diagnostics::DiagnosticSink;
use crate::error::ParseResult;
use crate::token::Token;

/// The Lox recursive-descent parser.
///
/// This structure maintains:
/// - The token stream produced by the scanner (borrowed when possible)
/// - The cursor position into that stream
/// - The sink every syntax error is reported to
///
/// A parser runs exactly one pass: `parse` consumes it.
pub struct Parser<'a> {
    /// Token stream, always terminated by `Eof`.
    pub(crate) tokens: Cow<'a, [Token]>,

    /// Index of the next token to consume. Only ever moves forward.
    pub(crate) current: usize,

    /// Current nesting of guarded grammar rules.
    pub(crate) depth: usize,

    pub(crate) config: ParserConfig,

    pub(crate) sink: &'a mut dyn DiagnosticSink,
}

/// Parses a complete token stream with the default limits.
///
/// # Pipeline
/// ```text
/// Source → Scanner → Tokens → parse() → [Option<Stmt>] → Resolver → Interpreter
/// ```
///
/// Declarations that could not be parsed come back as `None`; their
/// diagnostics went to `sink`.
pub fn parse(tokens: &[Token], sink: &mut dyn DiagnosticSink) -> Vec<Option<Stmt>> {
    Parser::new(tokens, sink).parse()
}

/// Same as [`parse`] with explicit limits.
pub fn parse_with_config(
    tokens: &[Token],
    config: &ParserConfig,
    sink: &mut dyn DiagnosticSink,
) -> Vec<Option<Stmt>> {
    Parser::new(tokens, sink).with_config(config.clone()).parse()
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens`.
    ///
    /// If the stream is empty or does not end with `Eof`, a private copy
    /// with an `Eof` appended is used instead, so the cursor can never
    /// run off the end.
    pub fn new(tokens: &'a [Token], sink: &'a mut dyn DiagnosticSink) -> Self {
        let tokens = match tokens.last() {
            Some(last) if last.is_eof() => Cow::Borrowed(tokens),
            last => {
                let line = last.map_or(1, |t| t.line);
                let mut owned = tokens.to_vec();
                owned.push(Token::eof(line));
                Cow::Owned(owned)
            }
        };

        Self {
            tokens,
            current: 0,
            depth: 0,
            config: ParserConfig::default(),
            sink,
        }
    }

    /// Replaces the default limits.
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses the entire token stream into top-level declarations.
    ///
    /// This is the **main driver**: it keeps calling `declaration` until
    /// `Eof`. A failed declaration leaves a `None` in its slot and parsing
    /// resumes at the next synchronization point, so one pass can surface
    /// many independent errors.
    pub fn parse(mut self) -> Vec<Option<Stmt>> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            trace!(line = self.peek().line, "top-level declaration");
            statements.push(self.declaration());
        }

        debug!(
            declarations = statements.len(),
            failed = statements.iter().filter(|s| s.is_none()).count(),
            "parse finished"
        );

        statements
    }

    /// Parses a single expression that must span the whole stream.
    ///
    /// Meant for REPL-style input such as `1 + 2`. Returns `None` if any
    /// fatal error was reported.
    pub fn parse_expression(mut self) -> Option<Expr> {
        self.expression_to_end().ok()
    }

    fn expression_to_end(&mut self) -> ParseResult<Expr> {
        let expr = self.expression()?;

        if !self.is_at_end() {
            return Err(self.error_at_current("Expect end of expression."));
        }

        Ok(expr)
    }
}
