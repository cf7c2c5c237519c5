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

use crate::span::Span;
use thiserror::Error;

/// Errors raised while scanning characters into tokens.
///
/// A lex error never stops the lexer: the offending region becomes a
/// single `TokenKind::Error` token and scanning continues after it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unterminated string")]
    UnterminatedString,

    #[error("unterminated character literal")]
    UnterminatedCharacter,

    /// Empty (`''`) or multi-character (`'ab'`) literal.
    #[error("invalid character literal")]
    InvalidCharacterLiteral,

    #[error("unrecognized character '{}'", .0.escape_default())]
    UnrecognizedCharacter(char),
}

impl LexError {
    /// Stable error code (E0001, E0002, …)
    pub fn code(&self) -> &'static str {
        match self {
            LexError::UnterminatedString => "E0001",
            LexError::UnterminatedCharacter => "E0002",
            LexError::InvalidCharacterLiteral => "E0003",
            LexError::UnrecognizedCharacter(_) => "E0004",
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexError::UnterminatedString => Some("add a closing '\"' to end the string"),
            LexError::InvalidCharacterLiteral => {
                Some("a character literal holds exactly one character; use \"...\" for text")
            }
            _ => None,
        }
    }
}

/// Errors raised while building the syntax tree.
///
/// Every variant carries the span of the offending token or node. The
/// statement loops in `parser.rs` turn these into diagnostics and then
/// resynchronize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected {found}, expected {}", one_of(.expected))]
    UnexpectedToken {
        found: String,
        expected: Vec<String>,
        span: Span,
    },

    #[error("expected a newline after {after}, found {found}")]
    MissingNewline {
        after: String,
        found: String,
        span: Span,
    },

    #[error("invalid assignment target")]
    InvalidAssignmentTarget { span: Span },

    #[error("invalid call target")]
    InvalidCallTarget { span: Span },

    #[error("member access is only allowed on identifiers")]
    InvalidMemberBase { span: Span },

    #[error("too deeply nested (limit is {limit})")]
    TooDeeplyNested { limit: usize, span: Span },

    #[error("token limit of {limit} exceeded")]
    TokenLimitExceeded { limit: usize, span: Span },

    #[error("parse cancelled")]
    Cancelled { span: Span },

    /// An error token was reached. The lexer already reported it.
    #[error("invalid token")]
    Lexical { span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::MissingNewline { span, .. }
            | ParseError::InvalidAssignmentTarget { span }
            | ParseError::InvalidCallTarget { span }
            | ParseError::InvalidMemberBase { span }
            | ParseError::TooDeeplyNested { span, .. }
            | ParseError::TokenLimitExceeded { span, .. }
            | ParseError::Cancelled { span }
            | ParseError::Lexical { span } => *span,
        }
    }

    /// Stable error code (E0101, E0102, …)
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "E0101",
            ParseError::MissingNewline { .. } => "E0102",
            ParseError::InvalidAssignmentTarget { .. } => "E0103",
            ParseError::InvalidCallTarget { .. } => "E0104",
            ParseError::InvalidMemberBase { .. } => "E0105",
            ParseError::TooDeeplyNested { .. } => "E0106",
            ParseError::TokenLimitExceeded { .. } => "E0107",
            ParseError::Cancelled { .. } => "E0108",
            ParseError::Lexical { .. } => "E0109",
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::MissingNewline { .. } => {
                Some("block bodies and object entries must start on a new line")
            }
            ParseError::InvalidAssignmentTarget { .. } => {
                Some("only a name, `a.b.c` or `a[i]` can be assigned to")
            }
            ParseError::InvalidCallTarget { .. } => {
                Some("store the value in a variable and call it by name")
            }
            ParseError::InvalidMemberBase { .. } => {
                Some("`.` can only follow a name or another `.name`")
            }
            _ => None,
        }
    }

    /// Fatal errors stop the parse instead of resynchronizing.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ParseError::TokenLimitExceeded { .. } | ParseError::Cancelled { .. }
        )
    }

    /// Whether this error was already reported by the lexer.
    pub fn is_reported(&self) -> bool {
        matches!(self, ParseError::Lexical { .. })
    }
}

/// Failures of the `maple` command line front-end.
#[derive(Debug, Error)]
pub enum MapleError {
    #[error("could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Config {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

/// Joins an "expected" list the way a reader would say it:
/// `'a'`, `'a' or 'b'`, `'a', 'b' or 'c'`.
fn one_of(expected: &[String]) -> String {
    match expected {
        [] => "a statement".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}
