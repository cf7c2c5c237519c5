/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Source locations shared by tokens, syntax tree nodes and
 *            diagnostics.
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

use serde::Serialize;

/// A region of the source buffer.
///
/// `start` and `end` are **byte offsets** (half-open, `start..end`), so a
/// span can always be used to slice the original `&str`. `line` and
/// `column` describe where the region *begins* and are only used for
/// human-facing output.
///
/// # Conventions
/// - `line` is 1-based
/// - `column` is 0-based and counted in characters, not bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Builds the span that starts where `self` starts and ends where
    /// `other` ends.
    ///
    /// Used by the parser to stretch a node over all of its children:
    /// ```text
    /// a + b * c
    /// ^--------^   to(left, right)
    /// ```
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end.max(self.end),
            line: self.line,
            column: self.column,
        }
    }

    /// Zero-width spans mark a position, e.g. end of file.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
