/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     literal.rs
 * Purpose:  Compile-time literal payloads carried by tokens and AST nodes.
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

use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal value known at parse time.
///
/// The scanner attaches one of these to number and string tokens, and the
/// parser copies it into `Expr::Literal`. The keywords `true`, `false` and
/// `nil` map to the fixed `Bool` / `Nil` payloads.
///
/// Runtime values (functions, instances, ...) are not represented here; they
/// belong to the interpreter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Literal {
    Number(f64),
    String(String),
    Bool(bool),
    Nil,
}

impl fmt::Display for Literal {
    /// Formats the literal the way Lox source would spell it.
    ///
    /// Integral numbers print without a fractional part (`3`, not `3.0`);
    /// strings print their raw contents without quotes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "{}", s),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Nil => write!(f, "nil"),
        }
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_print_without_fraction() {
        assert_eq!(Literal::Number(3.0).to_string(), "3");
        assert_eq!(Literal::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn keyword_literals_print_like_source() {
        assert_eq!(Literal::Bool(true).to_string(), "true");
        assert_eq!(Literal::Nil.to_string(), "nil");
    }

    #[test]
    fn serializes_with_tagged_payload() {
        let json = serde_json::to_string(&Literal::Number(1.5)).unwrap();
        assert_eq!(json, r#"{"type":"Number","value":1.5}"#);

        let back: Literal = serde_json::from_str(r#"{"type":"Nil"}"#).unwrap();
        assert_eq!(back, Literal::Nil);
    }
}
