/*
 * ==========================================================================
 * LOXPARSE - Lox syntax front-end
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  Root module of the Lox abstract syntax tree.
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

/// Expression nodes (`Literal`, `Binary`, `Call`, ...).
pub mod expr;

/// Statement and declaration nodes (`Var`, `While`, `Class`, ...).
pub mod stmt;

/// Function declarations shared by `fun` and class methods.
pub mod function;

/// Parenthesized prefix rendering of the tree.
pub mod printer;

pub use expr::Expr;
pub use function::{FunctionDecl, FunctionKind};
pub use stmt::Stmt;
