/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
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

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::error::{ParseError, ParseResult};
use crate::parser::parser::Parser;
use crate::token::{Token, TokenKind};

impl<'a> Parser<'a> {
    /// Returns the current token without consuming it.
    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Returns the most recently consumed token.
    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Returns true if the parser is at EOF.
    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Consumes and returns the current token.
    ///
    /// At EOF the cursor stays put and the `Eof` token is returned again.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Checks the current token's kind without consuming it.
    /// Always `false` at EOF.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes the current token if it has the given kind.
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if its kind is any of `kinds`.
    pub(crate) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a required token or reports `message` at the current token.
    pub(crate) fn consume(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Hands a diagnostic to the sink. Does not affect control flow.
    pub(crate) fn report(&mut self, kind: DiagnosticKind, token: Token, message: impl Into<String>) {
        self.sink.report(Diagnostic::new(kind, token, message));
    }

    /// Reports an unexpected-token error at `token` and returns the signal
    /// that aborts the current declaration.
    pub(crate) fn error(&mut self, token: Token, message: &str) -> ParseError {
        self.report(DiagnosticKind::UnexpectedToken, token, message);
        ParseError::UnexpectedToken
    }

    pub(crate) fn error_at_current(&mut self, message: &str) -> ParseError {
        let token = self.peek().clone();
        self.error(token, message)
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// Past `config.max_depth` the rule is not entered: a `NestingTooDeep`
    /// diagnostic is reported at the current token and the declaration
    /// fails, instead of the call stack overflowing.
    pub(crate) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= self.config.max_depth {
            let token = self.peek().clone();
            let message = format!("Nesting exceeds {} levels.", self.config.max_depth);
            self.report(DiagnosticKind::NestingTooDeep, token, message);
            return Err(ParseError::NestingTooDeep);
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Reports a soft-limit overflow for every entry past `limit`.
    /// Collection of the list is not interrupted.
    pub(crate) fn check_arity(&mut self, len: usize, limit: usize, kind: DiagnosticKind, what: &str) {
        if len >= limit {
            let token = self.peek().clone();
            self.report(kind, token, format!("Can't have more than {} {}.", limit, what));
        }
    }
}
