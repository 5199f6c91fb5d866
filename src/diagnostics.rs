/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     diagnostics.rs
 * Purpose:  Syntax diagnostics and the sinks that receive them.
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

use serde::Serialize;
use thiserror::Error;

use crate::token::Token;

/// Category of a syntax diagnostic.
///
/// Only `UnexpectedToken` and `NestingTooDeep` abort the current
/// declaration; the others are reported and parsing carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    UnexpectedToken,
    InvalidAssignmentTarget,
    TooManyArguments,
    TooManyParameters,
    NestingTooDeep,
}

impl DiagnosticKind {
    /// Returns `true` if this kind unwinds to the declaration boundary.
    pub fn is_fatal(self) -> bool {
        matches!(self, DiagnosticKind::UnexpectedToken | DiagnosticKind::NestingTooDeep)
    }
}

/// One syntax error, anchored at the offending token.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("[line {}] Error{}: {}", .token.line, location(.token), .message)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,

    /// Token the error is reported at.
    pub token: Token,

    pub message: String,
}

fn location(token: &Token) -> String {
    if token.is_eof() {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme)
    }
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, token: Token, message: impl Into<String>) -> Self {
        Self {
            kind,
            token,
            message: message.into(),
        }
    }

    /// Source line of the offending token.
    pub fn line(&self) -> usize {
        self.token.line
    }
}

/// Receives every diagnostic the parser produces, in source order.
///
/// The parser never prints or exits. What happens to a diagnostic (and
/// whether later stages still run) is up to the driver that owns the sink.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Collects diagnostics for later inspection.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `true` once anything was reported. Drivers use this to skip
    /// resolution and execution.
    pub fn has_errors(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Number of diagnostics of one kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.items.iter().filter(|d| d.kind == kind).count()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }
}

/// Forwards every diagnostic to `tracing` at `WARN` level and keeps a count.
#[derive(Debug, Default)]
pub struct TracingSink {
    reported: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported += 1;
        tracing::warn!(
            line = diagnostic.line(),
            kind = ?diagnostic.kind,
            "{}",
            diagnostic
        );
    }
}
