/*
 * ============================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ============================================================================
 *
 * License:
 * This file is part of the MAPLE programming language project.
 *
 * MAPLE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ============================================================================
 */

use crate::ast::{Expr, Identifier};
use crate::span::Span;
use serde::Serialize;

/// `{` newline, statements, `}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

/// One `elseif <condition> { ... }` arm of an if statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElseIfArm {
    pub condition: Expr,
    pub block: Block,
    pub span: Span,
}

/// All MAPLE statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Stmt {
    /* ----------------------------- */
    /* EXPRESSIONS                   */
    /* ----------------------------- */

    Expression {
        expr: Expr,
        span: Span,
    },

    /* ----------------------------- */
    /* DEFINITIONS                   */
    /* ----------------------------- */

    FunctionDefinition {
        name: Identifier,
        params: Vec<Identifier>,
        body: Block,
        span: Span,
    },

    VariableDefinition {
        is_const: bool,
        name: Identifier,
        init: Option<Expr>,
        span: Span,
    },

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    #[serde(rename = "WhileLoop")]
    While {
        condition: Expr,
        body: Block,
        span: Span,
    },

    #[serde(rename = "IfStatement")]
    If {
        condition: Expr,
        then_block: Block,
        elseif_blocks: Vec<ElseIfArm>,
        else_block: Option<Block>,
        span: Span,
    },

    #[serde(rename = "ReturnStatement")]
    Return {
        value: Expr,
        span: Span,
    },

    #[serde(rename = "BreakStatement")]
    Break {
        span: Span,
    },

    #[serde(rename = "ContinueStatement")]
    Continue {
        span: Span,
    },
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Expression { span, .. }
            | Stmt::FunctionDefinition { span, .. }
            | Stmt::VariableDefinition { span, .. }
            | Stmt::While { span, .. }
            | Stmt::If { span, .. }
            | Stmt::Return { span, .. }
            | Stmt::Break { span }
            | Stmt::Continue { span } => *span,
        }
    }
}
