/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     parser/recovery.rs
 * Purpose:  Panic-mode resynchronization after a fatal syntax error.
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

use tracing::debug;

use crate::parser::parser::Parser;
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Skips tokens until a likely declaration boundary.
    ///
    /// Always consumes at least one token (unless already at EOF), then
    /// stops right after a `;` or right before a keyword that begins a
    /// declaration or statement (`class`, `for`, `fun`, `if`, `print`,
    /// `return`, `var`, `while`).
    pub(crate) fn synchronize(&mut self) {
        let start = self.current;
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                break;
            }

            if self.peek().kind.begins_declaration() {
                break;
            }

            self.advance();
        }

        debug!(
            skipped = self.current - start,
            resume_line = self.peek().line,
            "resynchronized after syntax error"
        );
    }
}
