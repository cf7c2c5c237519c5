/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token types produced by the MAPLE lexer
 *            and consumed by the parser.
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
use std::fmt;

/// Represents the **category of a lexical token** in MAPLE.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → AST
/// ```
///
/// Unlike most C-like languages, a newline is **not** whitespace in MAPLE:
/// it is lexed as [`TokenKind::Eos`] and terminates statements, opens
/// block bodies and separates object-literal entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// A user-defined name: `[a-zA-Z_][a-zA-Z0-9_]*`.
    Identifier,

    /// A reserved word. See `keywords.rs`.
    Keyword(Keyword),

    /// A numeric literal.
    ///
    /// Includes:
    /// - Integer values: `42`
    /// - Decimal values: `3.14`
    /// - Trailing-dot values: `3.`
    Number,

    /// A `"`-delimited string literal. The decoded text lives in
    /// [`Token::value`].
    String,

    /// A `'`-delimited character literal holding exactly one scalar after
    /// escape decoding.
    Character,

    /// The bareword path following `import`, e.g. `./lib/math`.
    ImportPath,

    /// An operator or punctuation character.
    Symbol(Symbol),

    /// End of statement. Produced only by a literal `\n`.
    Eos,

    /// End-of-file marker, always the final token.
    Eof,

    /// A malformed region of source. The lexer has already reported it, so
    /// the parser must never report the same span again.
    Error,
}

/// All reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Fn,
    Var,
    Const,
    While,
    If,
    Elseif,
    Else,
    Break,
    Continue,
    Return,
    Import,
    True,
    False,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Fn => "fn",
            Keyword::Var => "var",
            Keyword::Const => "const",
            Keyword::While => "while",
            Keyword::If => "if",
            Keyword::Elseif => "elseif",
            Keyword::Else => "else",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Return => "return",
            Keyword::Import => "import",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }
}

/// Operators and punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbol {
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    PlusEqual,
    Dot,
    Comma,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
}

impl Symbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::Bang => "!",
            Symbol::Less => "<",
            Symbol::Greater => ">",
            Symbol::LessEqual => "<=",
            Symbol::GreaterEqual => ">=",
            Symbol::Equal => "=",
            Symbol::PlusEqual => "+=",
            Symbol::Dot => ".",
            Symbol::Comma => ",",
            Symbol::LeftParen => "(",
            Symbol::RightParen => ")",
            Symbol::LeftBrace => "{",
            Symbol::RightBrace => "}",
            Symbol::LeftBracket => "[",
            Symbol::RightBracket => "]",
        }
    }
}

impl TokenKind {
    /// Short user-facing description, used in "expected ..." lists.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Identifier => "identifier".to_string(),
            TokenKind::Keyword(kw) => format!("'{}'", kw.as_str()),
            TokenKind::Number => "number".to_string(),
            TokenKind::String => "string".to_string(),
            TokenKind::Character => "character".to_string(),
            TokenKind::ImportPath => "import path".to_string(),
            TokenKind::Symbol(sym) => format!("'{}'", sym.as_str()),
            TokenKind::Eos => "newline".to_string(),
            TokenKind::Eof => "end of file".to_string(),
            TokenKind::Error => "invalid token".to_string(),
        }
    }
}

/// Represents a **single lexical token** produced by the MAPLE lexer.
///
/// # Example Tokens
/// ```text
/// var   →  { kind: Keyword(Var),  lexeme: "var"  }
/// age   →  { kind: Identifier,    lexeme: "age"  }
/// 4.5   →  { kind: Number,        lexeme: "4.5"  }
/// "a\n" →  { kind: String,        lexeme: "\"a\\n\"", value: Some("a\n") }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,

    /// The exact source text that produced this token, quotes and
    /// backslashes included.
    pub lexeme: String,

    /// Decoded payload for string and character literals.
    pub value: Option<String>,

    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            value: None,
            span,
        }
    }

    pub fn with_value(mut self, value: String) -> Self {
        self.value = Some(value);
        self
    }

    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        self.kind == TokenKind::Symbol(symbol)
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**: only the source text.
    ///
    /// Newlines and end of file have no printable lexeme, so they are
    /// spelled out instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eos => write!(f, "newline"),
            TokenKind::Eof => write!(f, "end of file"),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}

/// Lexical content skipped by the parser but kept so the token stream can
/// reproduce the source byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TriviaKind {
    /// Spaces, tabs and carriage returns.
    Whitespace,

    /// A `//` comment, up to but excluding the newline.
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub span: Span,
}
