/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Library root: module tree and the `parse` entry points.
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

//! # MAPLE front-end
//!
//! Lexer, parser and abstract syntax tree for maple, a small procedural
//! language with C-like statements and newline-terminated statements.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → (Program, Diagnostics) → consumer
//! ```
//!
//! 1. [`lexer`] turns text into tokens, keeping whitespace and comments as
//!    trivia so the source can be rebuilt exactly.
//! 2. [`parser`] builds an [`ast::Program`] by recursive descent for
//!    statements and precedence climbing for expressions, recovering from
//!    errors statement by statement.
//! 3. [`diagnostics`] holds the structured errors and warnings from both
//!    stages, plus a printer for terminal output.
//!
//! Parsing never fails outright: [`parse`] always returns a tree (possibly
//! missing the statements that did not parse) together with every
//! diagnostic found.
//!
//! ```rust
//! let output = maple::parse("fn add(a, b) {\nreturn a + b\n}\n");
//! assert!(output.diagnostics.is_empty());
//! assert_eq!(output.program.statements.len(), 1);
//! ```

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

use ast::Program;
use config::ParseOptions;
use diagnostics::Diagnostic;
use serde::Serialize;

/// Result of parsing one source buffer.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    pub program: Program,

    /// Lexer and parser diagnostics, ordered by source position.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }
}

/// Parses `source` with default options.
pub fn parse(source: &str) -> ParseOutput {
    parse_with(source, &ParseOptions::default())
}

/// Parses `source` with host-supplied options.
pub fn parse_with(source: &str, options: &ParseOptions) -> ParseOutput {
    let lexed = lexer::tokenize(source);
    let (program, parse_diagnostics) = parser::parse(lexed.tokens, options);

    let mut diagnostics = lexed.diagnostics;
    diagnostics.extend(parse_diagnostics);
    diagnostics.sort_by_key(|d| d.span.start);

    if let Some(name) = &options.source_name {
        for diagnostic in &mut diagnostics {
            diagnostic.source_name = Some(name.clone());
        }
    }

    ParseOutput {
        program,
        diagnostics,
    }
}
