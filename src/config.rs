/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     config.rs
 * Purpose:  Tunable parser limits.
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

/// Default soft cap on call arguments and function parameters.
pub const DEFAULT_MAX_ARITY: usize = 255;

/// Default bound on nested expressions/statements.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits applied while parsing.
///
/// Every field has a default, so a JSON config file only needs to name the
/// limits it changes:
///
/// ```text
/// { "max_depth": 64 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Arguments accepted in one call before a diagnostic is reported.
    /// Collection continues past the limit.
    pub max_arguments: usize,

    /// Parameters accepted in one function before a diagnostic is reported.
    /// Collection continues past the limit.
    pub max_parameters: usize,

    /// Maximum nesting of expressions and statements. Exceeding it fails
    /// the current declaration.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_arguments: DEFAULT_MAX_ARITY,
            max_parameters: DEFAULT_MAX_ARITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Loads a config from JSON text, filling omitted fields with defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Builder-style override of `max_depth`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_lox_limits() {
        let config = ParserConfig::default();
        assert_eq!(config.max_arguments, 255);
        assert_eq!(config.max_parameters, 255);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = ParserConfig::from_json(r#"{ "max_depth": 16 }"#).unwrap();
        assert_eq!(config.max_depth, 16);
        assert_eq!(config.max_arguments, 255);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(ParserConfig::from_json("{}").unwrap(), ParserConfig::default());
    }
}
