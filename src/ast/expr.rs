/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
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

use crate::ast::{Block, Identifier};
use crate::span::Span;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    Assign,
    AddAssign,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Assign => "=",
            BinaryOp::AddAssign => "+=",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEqual => "<=",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    pub fn is_assignment(&self) -> bool {
        matches!(self, BinaryOp::Assign | BinaryOp::AddAssign)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOp {
    Negate,
    Not,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Negate => f.write_str("-"),
            UnaryOp::Not => f.write_str("!"),
        }
    }
}

/// Key of an object literal entry: a name or a number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum ObjectKey {
    Identifier(Identifier),
    Number { text: String, span: Span },
}

impl ObjectKey {
    pub fn span(&self) -> Span {
        match self {
            ObjectKey::Identifier(ident) => ident.span,
            ObjectKey::Number { span, .. } => *span,
        }
    }
}

/// `key = value` inside `{ ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectEntry {
    pub key: ObjectKey,
    pub value: Expr,
    pub span: Span,
}

/// Every MAPLE expression.
///
/// Postfix forms obey the *assignable* rule: a `Call` callee is always an
/// `Identifier`, `ObjectAccess` or `ArrayAccess`, and so is the left side
/// of an assignment `Binary`. The parser enforces this; see
/// [`Expr::is_assignable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Expr {
    Identifier(Identifier),

    #[serde(rename = "NumberLiteral")]
    Number {
        text: String,
        is_float: bool,
        span: Span,
    },

    #[serde(rename = "StringLiteral")]
    String {
        #[serde(rename = "decoded_text")]
        value: String,
        span: Span,
    },

    #[serde(rename = "CharacterLiteral")]
    Character {
        #[serde(rename = "decoded_scalar")]
        value: char,
        span: Span,
    },

    #[serde(rename = "BooleanLiteral")]
    Boolean {
        value: bool,
        span: Span,
    },

    /// `import ./path/to/module`, path kept verbatim.
    #[serde(rename = "ImportExpression")]
    Import {
        path: String,
        span: Span,
    },

    #[serde(rename = "BinaryOperator")]
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },

    #[serde(rename = "UnaryOperator")]
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        span: Span,
    },

    #[serde(rename = "FunctionCall")]
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        span: Span,
    },

    /// `base.a.b`, the base and every step a bare identifier.
    ObjectAccess {
        base: Identifier,
        path: Vec<Identifier>,
        span: Span,
    },

    /// `base[i][j]...`, indices in source order.
    ArrayAccess {
        base: Box<Expr>,
        indices: Vec<Expr>,
        span: Span,
    },

    ObjectLiteral {
        entries: Vec<ObjectEntry>,
        span: Span,
    },

    ArrayLiteral {
        elements: Vec<Expr>,
        span: Span,
    },

    /// `fn (a, b) { ... }` in expression position.
    AnonFunction {
        params: Vec<Identifier>,
        body: Block,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Identifier(ident) => ident.span,
            Expr::Number { span, .. }
            | Expr::String { span, .. }
            | Expr::Character { span, .. }
            | Expr::Boolean { span, .. }
            | Expr::Import { span, .. }
            | Expr::Binary { span, .. }
            | Expr::Unary { span, .. }
            | Expr::Call { span, .. }
            | Expr::ObjectAccess { span, .. }
            | Expr::ArrayAccess { span, .. }
            | Expr::ObjectLiteral { span, .. }
            | Expr::ArrayLiteral { span, .. }
            | Expr::AnonFunction { span, .. } => *span,
        }
    }

    /// Identifier, object access or array access: the only expressions
    /// that may be assigned to or called.
    pub fn is_assignable(&self) -> bool {
        matches!(
            self,
            Expr::Identifier(_) | Expr::ObjectAccess { .. } | Expr::ArrayAccess { .. }
        )
    }
}
