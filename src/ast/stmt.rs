/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     ast/stmt.rs
 * Purpose:  Statement and declaration nodes of the Lox syntax tree.
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

use crate::ast::{Expr, FunctionDecl};
use crate::token::Token;

/// All Lox statements and declarations.
///
/// There is no `for` node: the parser rewrites every `for` loop into
/// `Block`, `While` and `Expression` statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /* ----------------------------- */
    /* EXPRESSIONS                   */
    /* ----------------------------- */

    Expression(Expr),

    Print(Expr),

    /* ----------------------------- */
    /* VARIABLES                     */
    /* ----------------------------- */

    Var {
        name: Token,
        initializer: Option<Expr>,
    },

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    Block(Vec<Stmt>),

    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    While {
        condition: Expr,
        body: Box<Stmt>,
    },

    /* ----------------------------- */
    /* FUNCTIONS                     */
    /* ----------------------------- */

    Function(FunctionDecl),

    Return {
        keyword: Token,
        value: Option<Expr>,
    },

    /* ----------------------------- */
    /* CLASSES                       */
    /* ----------------------------- */

    Class {
        name: Token,
        methods: Vec<FunctionDecl>,
    },
}
