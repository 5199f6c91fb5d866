/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     parser/expressions.rs
 * Purpose:  Implements the Lox expression grammar using recursive descent
 *
 * Author:   Sam Wilcox
 *
 * --------------------------------------------------------------------------
 *  LICENSE
 * --------------------------------------------------------------------------
 * This file is part of the LOXPARSE project.
 *
 * LOXPARSE is dual-licensed under the terms of:
 *   - The MIT License
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
 * Parsing order follows strict precedence, weakest binding first:
 *
 *   assignment → or → and → equality → comparison → term → factor
 *              → unary → call → primary
 *
 *  - Assignment and unary are right-associative.
 *  - Every binary level is left-associative: `1 - 2 - 3` is `(1 - 2) - 3`.
 *  - An invalid assignment target is reported but does not abort parsing.
 *  - More arguments than `max_arguments` are reported but still collected.
 *
 * ==========================================================================
 */

use crate::ast::Expr;
use crate::diagnostics::DiagnosticKind;
use crate::error::ParseResult;
use crate::literal::Literal;
use crate::parser::parser::Parser;
use crate::token::{Token, TokenKind};

impl<'a> Parser<'a> {
    /// expression → assignment
    pub(crate) fn expression(&mut self) -> ParseResult<Expr> {
        self.nested(Self::assignment)
    }

    /// assignment → ( call "." )? IDENTIFIER "=" assignment | or
    ///
    /// The target is parsed as an ordinary expression first and only then
    /// checked: `Variable` becomes `Assign`, `Get` becomes `Set`, anything
    /// else is reported at the `=` and returned unchanged.
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.or()?;

        if self.match_token(TokenKind::Equal) {
            let equals = self.previous().clone();
            let value = self.nested(Self::assignment)?;

            return Ok(match expr {
                Expr::Variable(name) => Expr::Assign {
                    name,
                    value: Box::new(value),
                },

                Expr::Get { object, name } => Expr::Set {
                    object,
                    name,
                    value: Box::new(value),
                },

                target => {
                    self.report(
                        DiagnosticKind::InvalidAssignmentTarget,
                        equals,
                        "Invalid assignment target.",
                    );
                    target
                }
            });
        }

        Ok(expr)
    }

    /// or → and ( "or" and )*
    fn or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.and()?;

        while self.match_token(TokenKind::Or) {
            let operator = self.previous().clone();
            let right = self.and()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// and → equality ( "and" equality )*
    fn and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.equality()?;

        while self.match_token(TokenKind::And) {
            let operator = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Shared shape of every left-associative binary level:
    ///
    /// ```text
    /// level → operand ( operator operand )*
    /// ```
    fn binary_level(
        &mut self,
        operators: &[TokenKind],
        operand: fn(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut expr = operand(self)?;

        while self.match_any(operators) {
            let operator = self.previous().clone();
            let right = operand(self)?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// equality → comparison ( ( "!=" | "==" ) comparison )*
    fn equality(&mut self) -> ParseResult<Expr> {
        self.binary_level(&[TokenKind::BangEqual, TokenKind::EqualEqual], Self::comparison)
    }

    /// comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
    fn comparison(&mut self) -> ParseResult<Expr> {
        self.binary_level(
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
            Self::term,
        )
    }

    /// term → factor ( ( "-" | "+" ) factor )*
    fn term(&mut self) -> ParseResult<Expr> {
        self.binary_level(&[TokenKind::Minus, TokenKind::Plus], Self::factor)
    }

    /// factor → unary ( ( "/" | "*" ) unary )*
    fn factor(&mut self) -> ParseResult<Expr> {
        self.binary_level(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    /// unary → ( "!" | "-" ) unary | call
    fn unary(&mut self) -> ParseResult<Expr> {
        if self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.nested(Self::unary)?;
            return Ok(Expr::Unary {
                operator,
                right: Box::new(right),
            });
        }

        self.call()
    }

    /// call → primary ( "(" arguments? ")" | "." IDENTIFIER )*
    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;

        loop {
            // function call: f(...)
            if self.match_token(TokenKind::LeftParen) {
                expr = self.finish_call(expr)?;
                continue;
            }

            // property access: obj.prop
            if self.match_token(TokenKind::Dot) {
                let name = self.consume(TokenKind::Identifier, "Expect property name after '.'.")?;
                expr = Expr::Get {
                    object: Box::new(expr),
                    name,
                };
                continue;
            }

            break;
        }

        Ok(expr)
    }

    /// arguments → expression ( "," expression )*
    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let mut arguments = Vec::new();

        if !self.check(TokenKind::RightParen) {
            loop {
                let limit = self.config.max_arguments;
                self.check_arity(arguments.len(), limit, DiagnosticKind::TooManyArguments, "arguments");
                arguments.push(self.expression()?);

                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }

        let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;

        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        })
    }

    /// primary → "true" | "false" | "nil" | "this" | NUMBER | STRING
    ///         | IDENTIFIER | "(" expression ")"
    fn primary(&mut self) -> ParseResult<Expr> {
        if self.match_token(TokenKind::False) {
            return Ok(Expr::Literal(Literal::Bool(false)));
        }
        if self.match_token(TokenKind::True) {
            return Ok(Expr::Literal(Literal::Bool(true)));
        }
        if self.match_token(TokenKind::Nil) {
            return Ok(Expr::Literal(Literal::Nil));
        }

        if self.match_any(&[TokenKind::Number, TokenKind::String]) {
            let token = self.previous().clone();
            return self.literal_payload(token).map(Expr::Literal);
        }

        if self.match_token(TokenKind::LeftParen) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        if self.match_token(TokenKind::Identifier) {
            return Ok(Expr::Variable(self.previous().clone()));
        }

        if self.match_token(TokenKind::This) {
            return Ok(Expr::This(self.previous().clone()));
        }

        Err(self.error_at_current("Expect expression."))
    }

    /// Takes the scanner's literal payload, or derives it from the lexeme
    /// when a hand-built token stream left it out.
    fn literal_payload(&mut self, token: Token) -> ParseResult<Literal> {
        if let Some(literal) = &token.literal {
            return Ok(literal.clone());
        }

        match token.kind {
            TokenKind::Number => match token.lexeme.parse::<f64>() {
                Ok(n) => Ok(Literal::Number(n)),
                Err(_) => Err(self.error(token, "Invalid number literal.")),
            },
            _ => {
                let lexeme = token.lexeme.as_str();
                let text = lexeme
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or(lexeme);
                Ok(Literal::String(text.to_string()))
            }
        }
    }
}
