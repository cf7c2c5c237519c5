/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
 *
 * File:     ident.rs
 * Purpose:  Defines the AST node for names.
 *
 * Identifiers appear on their own as expressions and inside other nodes:
 *  - Function and variable definition names
 *  - Parameter lists
 *  - Every step of an `a.b.c` object access
 *  - Object literal keys
 *
 * License:
 * This file is part of the MAPLE programming language project.
 *
 * MAPLE is dual-licensed under the terms of:
 *   - The MIT License
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

use crate::span::Span;
use serde::Serialize;

/// A bare name, `[a-zA-Z_][a-zA-Z0-9_]*`, never a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}
