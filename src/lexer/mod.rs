/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the MAPLE lexer.
 *
 * This module wires together:
 *   - Token definitions
 *   - Reserved-word lookup
 *   - Escape decoding
 *   - The character scanner itself
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

pub mod escape;
pub mod keywords;
pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Keyword, Symbol, Token, TokenKind, Trivia, TriviaKind};

use crate::diagnostics::Diagnostic;

/// Everything the lexer produces for one source buffer.
#[derive(Debug, Clone)]
pub struct Lexed {
    /// Significant tokens, always terminated by `TokenKind::Eof`.
    pub tokens: Vec<Token>,

    /// Whitespace and comments, in source order.
    pub trivia: Vec<Trivia>,

    pub diagnostics: Vec<Diagnostic>,
}

impl Lexed {
    /// Rebuilds the source text from token lexemes and trivia spans.
    ///
    /// For any input, `tokenize(src).reconstruct(src) == src`.
    pub fn reconstruct(&self, source: &str) -> String {
        let mut pieces: Vec<(usize, &str)> = self
            .tokens
            .iter()
            .map(|token| (token.span.start, token.lexeme.as_str()))
            .chain(
                self.trivia
                    .iter()
                    .map(|trivia| (trivia.span.start, &source[trivia.span.start..trivia.span.end])),
            )
            .collect();

        pieces.sort_by_key(|(start, _)| *start);
        pieces.into_iter().map(|(_, text)| text).collect()
    }
}

/// Converts raw source text into tokens, trivia and lexical diagnostics.
///
/// # Example
/// ```rust
/// let lexed = maple::lexer::tokenize("var x = 1\n");
/// assert!(lexed.diagnostics.is_empty());
/// ```
pub fn tokenize(source: &str) -> Lexed {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens();

    Lexed {
        tokens: lexer.tokens,
        trivia: lexer.trivia,
        diagnostics: lexer.diagnostics,
    }
}
