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

use crate::error::{LexError, ParseError};
use crate::span::Span;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One structured problem found in a source buffer.
///
/// Produced by both the lexer and the parser and handed to the host as an
/// ordered list next to the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,

    /// Stable error code (E0001, E0101, W0001, …)
    pub code: &'static str,

    /// Human-readable message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// Token kinds that would have been accepted at `span`, if known.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expected: Vec<String>,

    /// Optional note / help text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Label of the source buffer (usually a file name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

impl Diagnostic {
    /// Generic constructor
    pub fn new(
        severity: Severity,
        code: &'static str,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            span,
            expected: Vec::new(),
            help: None,
            source_name: None,
        }
    }

    pub fn error(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Error, code, message, span)
    }

    pub fn warning(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Warning, code, message, span)
    }

    pub fn from_lex_error(error: &LexError, span: Span) -> Self {
        let diagnostic = Self::error(error.code(), error.to_string(), span);
        match error.help() {
            Some(help) => diagnostic.with_help(help),
            None => diagnostic,
        }
    }

    /// Attach a help message to the diagnostic (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(error: &ParseError) -> Self {
        let mut diagnostic = Diagnostic::error(error.code(), error.to_string(), error.span());

        if let ParseError::UnexpectedToken { expected, .. } = error {
            diagnostic.expected = expected.clone();
        }

        match error.help() {
            Some(help) => diagnostic.with_help(help),
            None => diagnostic,
        }
    }
}

/// Responsible for rendering human-friendly, compiler-style diagnostics.
///
/// This printer:
/// - Formats diagnostics with file/line/column information
/// - Displays the offending source line
/// - Underlines the offending region with carets (`^^^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is inspired by `rustc` diagnostics and stays readable
/// without color.
pub struct DiagnosticPrinter {
    /// Full source code of the buffer the diagnostics refer to.
    source: String,

    /// Name shown in the `-->` location line (e.g. `main.mpl`).
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders a diagnostic into a `String`.
    ///
    /// # Output Example
    /// ```text
    /// error[E0102]: expected a newline after '{', found 'return'
    ///   --> example.mpl:3:12
    ///    |
    ///  3 | while x { return 1 }
    ///    |           ^^^^^^
    /// help: block bodies and object entries must start on a new line
    /// ```
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let Span {
            start,
            end,
            line,
            column,
        } = diagnostic.span;

        let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let mut out = format!(
            "{}[{}]: {}\n  --> {}:{}:{}\n   |\n{:>3} | {}\n",
            diagnostic.severity,
            diagnostic.code,
            diagnostic.message,
            self.file_name,
            line,
            column + 1,
            line,
            src_line
        );

        // Underline up to the end of the span, clipped to the printed line.
        let visible = src_line.chars().count().saturating_sub(column);
        let width = if diagnostic.span.is_empty() {
            1
        } else {
            self.source
                .get(start..end)
                .map(|text| text.chars().take_while(|c| *c != '\n').count())
                .unwrap_or(1)
                .min(visible)
                .max(1)
        };

        out.push_str(&format!("   | {}{}\n", " ".repeat(column), "^".repeat(width)));

        if let Some(help) = &diagnostic.help {
            out.push_str(&format!("help: {}\n", help));
        }

        out
    }

    /// Prints a formatted diagnostic to stderr.
    pub fn print(&self, diagnostic: &Diagnostic) {
        eprint!("{}", self.render(diagnostic));
    }
}
