/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     ast/expr.rs
 * Purpose:  Expression nodes of the Lox abstract syntax tree.
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

use crate::literal::Literal;
use crate::token::Token;

/// All Lox expressions.
///
/// Every variant that names something or applies an operator keeps the
/// originating `Token`, so the resolver and interpreter can point at the
/// exact line when they report an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// `123`, `"text"`, `true`, `false`, `nil`
    Literal(Literal),

    /// `( expression )`
    Grouping(Box<Expr>),

    /// `!right`, `-right`
    Unary { operator: Token, right: Box<Expr> },

    /// Arithmetic, comparison and equality operators.
    Binary { left: Box<Expr>, operator: Token, right: Box<Expr> },

    /// `and` / `or`. Kept apart from `Binary` because the right operand is
    /// evaluated conditionally.
    Logical { left: Box<Expr>, operator: Token, right: Box<Expr> },

    /// A bare identifier.
    Variable(Token),

    /// `name = value`
    Assign { name: Token, value: Box<Expr> },

    /// `callee(arguments...)`; `paren` is the closing parenthesis.
    Call { callee: Box<Expr>, paren: Token, arguments: Vec<Expr> },

    /// `object.name`
    Get { object: Box<Expr>, name: Token },

    /// `object.name = value`
    Set { object: Box<Expr>, name: Token, value: Box<Expr> },

    /// `this`
    This(Token),
}

impl Expr {
    /// Shorthand for a literal node.
    pub fn literal(value: impl Into<Literal>) -> Self {
        Expr::Literal(value.into())
    }
}
