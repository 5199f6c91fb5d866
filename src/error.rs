/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     error.rs
 * Purpose:  Recoverable error signal used inside the parser.
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

use thiserror::Error;

/// Result type of every grammar rule.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Aborts the declaration currently being parsed.
///
/// The diagnostic describing the problem has already been handed to the
/// `DiagnosticSink` by the time one of these is created, so the error
/// itself carries no message. Only `Parser::declaration` consumes it: it
/// resynchronizes the cursor and substitutes an absent placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required token was missing or no expression could start here.
    #[error("unexpected token")]
    UnexpectedToken,

    /// Nesting exceeded `ParserConfig::max_depth`.
    #[error("nesting limit exceeded")]
    NestingTooDeep,
}
