/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     parser/statements.rs
 * Purpose:  Declaration and statement grammar, including `for` desugaring.
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

use crate::ast::{Expr, FunctionDecl, FunctionKind, Stmt};
use crate::diagnostics::DiagnosticKind;
use crate::error::ParseResult;
use crate::literal::Literal;
use crate::parser::parser::Parser;
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// declaration → classDecl | funDecl | varDecl | statement
    ///
    /// This is the **only** place a `ParseError` stops propagating. On
    /// failure the cursor is resynchronized and `None` takes the place of
    /// the broken declaration.
    pub(crate) fn declaration(&mut self) -> Option<Stmt> {
        match self.nested(Self::declaration_kind) {
            Ok(stmt) => Some(stmt),
            Err(_) => {
                self.synchronize();
                None
            }
        }
    }

    fn declaration_kind(&mut self) -> ParseResult<Stmt> {
        if self.match_token(TokenKind::Class) {
            return self.class_declaration();
        }

        if self.match_token(TokenKind::Fun) {
            return self.function(FunctionKind::Function).map(Stmt::Function);
        }

        if self.match_token(TokenKind::Var) {
            return self.var_declaration();
        }

        self.statement()
    }

    /// Parses a single statement.
    ///
    /// This is the **main dispatcher** for statement grammar forms. It
    /// inspects the leading token and routes to the matching rule; an
    /// expression statement is the fallback.
    pub(crate) fn statement(&mut self) -> ParseResult<Stmt> {
        self.nested(|parser| {
            if parser.match_token(TokenKind::For) {
                return parser.for_statement();
            }

            if parser.match_token(TokenKind::If) {
                return parser.if_statement();
            }

            if parser.match_token(TokenKind::Print) {
                return parser.print_statement();
            }

            if parser.match_token(TokenKind::Return) {
                return parser.return_statement();
            }

            if parser.match_token(TokenKind::While) {
                return parser.while_statement();
            }

            if parser.match_token(TokenKind::LeftBrace) {
                return parser.block().map(Stmt::Block);
            }

            parser.expression_statement()
        })
    }

    /// block → "{" declaration* "}"
    ///
    /// Expects the `{` to be consumed already. Declarations that fail
    /// inside the block are left out of it.
    fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    /// classDecl → "class" IDENTIFIER "{" function* "}"
    fn class_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect class name.")?;
        self.consume(TokenKind::LeftBrace, "Expect '{' before class body.")?;

        let mut methods = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            methods.push(self.function(FunctionKind::Method)?);
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after class body.")?;
        Ok(Stmt::Class { name, methods })
    }

    /// function → IDENTIFIER "(" parameters? ")" block
    fn function(&mut self, kind: FunctionKind) -> ParseResult<FunctionDecl> {
        let kind = kind.as_str();
        let name = self.consume(TokenKind::Identifier, &format!("Expect {} name.", kind))?;
        self.consume(TokenKind::LeftParen, &format!("Expect '(' after {} name.", kind))?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                let limit = self.config.max_parameters;
                self.check_arity(params.len(), limit, DiagnosticKind::TooManyParameters, "parameters");
                params.push(self.consume(TokenKind::Identifier, "Expect parameter name.")?);

                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.consume(TokenKind::LeftBrace, &format!("Expect '{{' before {} body.", kind))?;
        let body = self.block()?;

        Ok(FunctionDecl { name, params, body })
    }

    /// varDecl → "var" IDENTIFIER ( "=" expression )? ";"
    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.match_token(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var { name, initializer })
    }

    /// forStmt → "for" "(" ( varDecl | exprStmt | ";" ) expression? ";"
    ///           expression? ")" statement
    ///
    /// There is no `for` node. The loop is rewritten, in this order:
    ///
    /// ```text
    /// for (init; cond; incr) body
    ///
    /// { init; while (cond) { body; incr; } }
    /// ```
    ///
    /// A missing condition becomes `true`; a missing initializer or
    /// increment simply drops the corresponding wrapper block.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.match_token(TokenKind::Semicolon) {
            None
        } else if self.match_token(TokenKind::Var) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if !self.check(TokenKind::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if !self.check(TokenKind::RightParen) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        let condition = condition.unwrap_or(Expr::Literal(Literal::Bool(true)));
        body = Stmt::While {
            condition,
            body: Box::new(body),
        };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    /// ifStmt → "if" "(" expression ")" statement ( "else" statement )?
    ///
    /// `else` is consumed greedily right after the then-branch, so it binds
    /// to the nearest `if`.
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_token(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// printStmt → "print" expression ";"
    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    /// returnStmt → "return" expression? ";"
    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous().clone();

        let value = if !self.check(TokenKind::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after return value.")?;
        Ok(Stmt::Return { keyword, value })
    }

    /// whileStmt → "while" "(" expression ")" statement
    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = self.statement()?;

        Ok(Stmt::While {
            condition,
            body: Box::new(body),
        })
    }

    /// exprStmt → expression ";"
    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }
}
