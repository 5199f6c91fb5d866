/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the Lox recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - Cursor helpers
 *   - Expression parsing
 *   - Statement parsing
 *   - Error recovery
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `parse(tokens, sink)` entry points
#[allow(clippy::module_inception)]
pub mod parser;

/// Shared parser helpers:
/// - token matching and lookahead
/// - required-token consumption
/// - diagnostic reporting
/// - nesting guard
pub mod helpers;

/// Expression-level parsing:
/// - assignment → or → and → equality → comparison → term → factor → unary → call → primary
pub mod expressions;

/// Statement-level parsing:
/// - class / fun / var declarations
/// - if / while / for / print / return / blocks
pub mod statements;

/// Panic-mode synchronization after a fatal syntax error.
pub mod recovery;

pub use parser::{parse, parse_with_config, Parser};
