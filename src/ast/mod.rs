/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  The MAPLE abstract syntax tree.
 *
 * The tree is strict: every node is owned by exactly one parent, there are
 * no back-references, and nothing is mutated after the parser builds it.
 * Every node carries the `Span` of source it was parsed from.
 *
 * License:
 * This file is part of the MAPLE programming language project.
 *
 * MAPLE is dual-licensed under the terms of:
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

pub mod expr;
pub mod ident;
pub mod stmt;

pub use expr::{BinaryOp, Expr, ObjectEntry, ObjectKey, UnaryOp};
pub use ident::Identifier;
pub use stmt::{Block, ElseIfArm, Stmt};

use crate::span::Span;
use serde::Serialize;

/// Root of the tree: every top-level statement in source order.
///
/// Blank lines are valid empty statements in the grammar but produce no
/// node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub statements: Vec<Stmt>,

    /// Always covers the whole input, `0..source.len()`.
    pub span: Span,
}
