/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     ast/printer.rs
 * Purpose:  Renders syntax trees as fully parenthesized prefix notation.
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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * Every node prints as `(head child child ...)`, which makes grouping and
 * associativity visible at a glance:
 *
 *   1 - 2 - 3                     →  (- (- 1 2) 3)
 *   a = b = c                     →  (= a (= b c))
 *   a(1)(2).b                     →  (. (call (call a 1) 2) b)
 *   for (var i = 0; i < 3; ) x;   →  (block (var i = 0) (while (< i 3) (; x)))
 *
 * String literals are quoted so they cannot be confused with variables.
 * ==========================================================================
 */

use std::fmt::{self, Display, Formatter};

use crate::ast::{Expr, FunctionDecl, Stmt};
use crate::literal::Literal;

/// Writes `(head part part ...)`.
fn parenthesize(f: &mut Formatter<'_>, head: &str, parts: &[&dyn Display]) -> fmt::Result {
    write!(f, "({}", head)?;
    for part in parts {
        write!(f, " {}", part)?;
    }
    write!(f, ")")
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(Literal::String(s)) => write!(f, "\"{}\"", s),
            Expr::Literal(value) => write!(f, "{}", value),

            Expr::Grouping(inner) => parenthesize(f, "group", &[inner]),

            Expr::Unary { operator, right } => parenthesize(f, &operator.lexeme, &[right]),

            Expr::Binary { left, operator, right }
            | Expr::Logical { left, operator, right } => {
                parenthesize(f, &operator.lexeme, &[left, right])
            }

            Expr::Variable(name) => write!(f, "{}", name.lexeme),

            Expr::Assign { name, value } => parenthesize(f, "=", &[&name.lexeme, value]),

            Expr::Call { callee, arguments, .. } => {
                let mut parts: Vec<&dyn Display> = vec![callee];
                parts.extend(arguments.iter().map(|a| a as &dyn Display));
                parenthesize(f, "call", &parts)
            }

            Expr::Get { object, name } => parenthesize(f, ".", &[object, &name.lexeme]),

            Expr::Set { object, name, value } => {
                write!(f, "(= (. {} {}) {})", object, name.lexeme, value)
            }

            Expr::This(_) => write!(f, "this"),
        }
    }
}

impl Display for FunctionDecl {
    /// `(fun name(a b) body...)`
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(fun {}({})", self.name.lexeme, self.param_names().join(" "))?;
        for stmt in &self.body {
            write!(f, " {}", stmt)?;
        }
        write!(f, ")")
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expression(expr) => parenthesize(f, ";", &[expr]),

            Stmt::Print(expr) => parenthesize(f, "print", &[expr]),

            Stmt::Var { name, initializer } => match initializer {
                Some(init) => parenthesize(f, "var", &[&name.lexeme, &"=", init]),
                None => parenthesize(f, "var", &[&name.lexeme]),
            },

            Stmt::Block(stmts) => {
                let parts: Vec<&dyn Display> = stmts.iter().map(|s| s as &dyn Display).collect();
                parenthesize(f, "block", &parts)
            }

            Stmt::If { condition, then_branch, else_branch } => match else_branch {
                Some(else_branch) => {
                    parenthesize(f, "if-else", &[condition, then_branch, else_branch])
                }
                None => parenthesize(f, "if", &[condition, then_branch]),
            },

            Stmt::While { condition, body } => parenthesize(f, "while", &[condition, body]),

            Stmt::Function(function) => write!(f, "{}", function),

            Stmt::Return { value, .. } => match value {
                Some(value) => parenthesize(f, "return", &[value]),
                None => write!(f, "(return)"),
            },

            Stmt::Class { name, methods } => {
                let mut parts: Vec<&dyn Display> = vec![&name.lexeme];
                parts.extend(methods.iter().map(|m| m as &dyn Display));
                parenthesize(f, "class", &parts)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, TokenKind};

    fn ident(name: &str) -> Token {
        Token::new(TokenKind::Identifier, name, 1)
    }

    #[test]
    fn prints_nested_binary() {
        let expr = Expr::Binary {
            left: Box::new(Expr::Unary {
                operator: Token::new(TokenKind::Minus, "-", 1),
                right: Box::new(Expr::literal(123.0)),
            }),
            operator: Token::new(TokenKind::Star, "*", 1),
            right: Box::new(Expr::Grouping(Box::new(Expr::literal(45.67)))),
        };

        assert_eq!(expr.to_string(), "(* (- 123) (group 45.67))");
    }

    #[test]
    fn quotes_string_literals() {
        assert_eq!(Expr::literal("hi").to_string(), "\"hi\"");
        assert_eq!(Expr::Variable(ident("hi")).to_string(), "hi");
    }

    #[test]
    fn prints_class_with_methods() {
        let stmt = Stmt::Class {
            name: ident("A"),
            methods: vec![FunctionDecl {
                name: ident("foo"),
                params: vec![ident("x"), ident("y")],
                body: vec![Stmt::Return {
                    keyword: Token::new(TokenKind::Return, "return", 1),
                    value: None,
                }],
            }],
        };

        assert_eq!(stmt.to_string(), "(class A (fun foo(x y) (return)))");
    }
}
