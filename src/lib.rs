/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root.
 *
 * Turns a scanner's token stream into a Lox syntax tree:
 *
 *   Tokens → Parser → [Option<Stmt>]   (+ diagnostics to a sink)
 *
 * Scanning, resolution and execution live elsewhere; this crate only owns
 * the grammar, operator precedence, error recovery and the `for` loop
 * desugaring.
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

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod literal;
pub mod parser;
pub mod token;

pub use ast::{Expr, FunctionDecl, Stmt};
pub use config::ParserConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, Diagnostics, TracingSink};
pub use error::{ParseError, ParseResult};
pub use literal::Literal;
pub use parser::{parse, parse_with_config, Parser};
pub use token::{Token, TokenKind};
