/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     ast/function.rs
 * Purpose:  Function declarations shared by `fun` and class methods.
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

use crate::ast::Stmt;
use crate::token::Token;

/// Represents **one declared function**, either a top-level `fun` or a
/// method inside a `class` body.
///
/// ```text
/// fun add(a, b) { return a + b; }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDecl {
    /// Function name (identifier token).
    pub name: Token,

    /// Parameter names in declaration order.
    pub params: Vec<Token>,

    /// Statements of the function body block.
    pub body: Vec<Stmt>,
}

impl FunctionDecl {
    /// Returns the parameter names as plain strings.
    pub fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.lexeme.as_str()).collect()
    }
}

/// The syntactic role a function declaration plays.
///
/// Only used to phrase diagnostics ("Expect function name." vs
/// "Expect method name.").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Function,
    Method,
}

impl FunctionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FunctionKind::Function => "function",
            FunctionKind::Method => "method",
        }
    }
}
