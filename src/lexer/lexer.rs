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

use crate::diagnostics::Diagnostic;
use crate::error::LexError;
use crate::lexer::escape::decode_escape;
use crate::lexer::keywords::keyword;
use crate::lexer::token::{Keyword, Symbol, Token, TokenKind, Trivia, TriviaKind};
use crate::span::Span;
use regex::Regex;
use std::sync::OnceLock;

/// Bareword path accepted after `import`.
fn import_path_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[./a-zA-Z0-9_]+").expect("import path pattern is valid"))
}

/// A position in the source: byte offset, line, column.
#[derive(Debug, Clone, Copy)]
struct Mark {
    offset: usize,
    line: usize,
    column: usize,
}

pub struct Lexer<'src> {
    source: &'src str,
    chars: Vec<char>,
    current: usize,
    offset: usize,
    line: usize,
    column: usize,

    /// Where the token currently being scanned began.
    start: Mark,

    pub tokens: Vec<Token>,
    pub trivia: Vec<Trivia>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Creates a new MAPLE lexer instance from raw source code.
    ///
    /// # Returns
    /// A fully initialized `Lexer` with:
    /// - Cursor at byte `0`
    /// - Line counter set to `1`
    /// - Empty token, trivia and diagnostic buffers
    pub fn new(source: &'src str) -> Self {
        let origin = Mark {
            offset: 0,
            line: 1,
            column: 0,
        };

        Self {
            source,
            chars: source.chars().collect(),
            current: 0,
            offset: 0,
            line: 1,
            column: 0,
            start: origin,
            tokens: Vec::new(),
            trivia: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// # Behavior
    /// - Records whitespace and comments as trivia
    /// - Emits a `TokenKind::Eos` token for every newline
    /// - Turns malformed regions into `TokenKind::Error` tokens plus a
    ///   diagnostic, then keeps going
    /// - Guarantees a terminating `TokenKind::Eof` marker
    ///
    /// This function **must be called exactly once** per lexer instance.
    pub fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.start = self.mark();
            self.scan_token();
        }

        self.start = self.mark();
        self.add_token(TokenKind::Eof);
    }

    /// Scans and emits a single token (or trivia run) from the source.
    fn scan_token(&mut self) {
        let ch = self.advance();

        match ch {
            ' ' | '\t' | '\r' => {
                while matches!(self.peek(), ' ' | '\t' | '\r') && !self.is_at_end() {
                    self.advance();
                }
                self.add_trivia(TriviaKind::Whitespace);
            }

            '\n' => self.add_token(TokenKind::Eos),

            '/' => {
                if self.match_char('/') {
                    while !self.is_at_end() && self.peek() != '\n' {
                        self.advance();
                    }
                    self.add_trivia(TriviaKind::Comment);
                } else {
                    self.add_symbol(Symbol::Slash);
                }
            }

            '+' => {
                if self.match_char('=') {
                    self.add_symbol(Symbol::PlusEqual);
                } else {
                    self.add_symbol(Symbol::Plus);
                }
            }

            '<' => {
                if self.match_char('=') {
                    self.add_symbol(Symbol::LessEqual);
                } else {
                    self.add_symbol(Symbol::Less);
                }
            }

            '>' => {
                if self.match_char('=') {
                    self.add_symbol(Symbol::GreaterEqual);
                } else {
                    self.add_symbol(Symbol::Greater);
                }
            }

            '-' => self.add_symbol(Symbol::Minus),
            '*' => self.add_symbol(Symbol::Star),
            '!' => self.add_symbol(Symbol::Bang),
            '=' => self.add_symbol(Symbol::Equal),
            '.' => self.add_symbol(Symbol::Dot),
            ',' => self.add_symbol(Symbol::Comma),
            '(' => self.add_symbol(Symbol::LeftParen),
            ')' => self.add_symbol(Symbol::RightParen),
            '{' => self.add_symbol(Symbol::LeftBrace),
            '}' => self.add_symbol(Symbol::RightBrace),
            '[' => self.add_symbol(Symbol::LeftBracket),
            ']' => self.add_symbol(Symbol::RightBracket),

            '"' => self.string(),
            '\'' => self.character(),

            '0'..='9' => self.number(),

            'a'..='z' | 'A'..='Z' | '_' => self.identifier(),

            other => self.error(LexError::UnrecognizedCharacter(other)),
        }
    }

    /// Parses a `"`-delimited string literal, decoding escapes as it goes.
    ///
    /// Strings may span lines. Reaching end of file before the closing
    /// quote turns everything from the opening quote onward into a single
    /// error token.
    fn string(&mut self) {
        let mut value = String::new();

        loop {
            if self.is_at_end() {
                self.error(LexError::UnterminatedString);
                return;
            }

            match self.peek() {
                '"' => {
                    self.advance();
                    break;
                }
                '\\' => match self.escape() {
                    Some(decoded) => value.push(decoded),
                    None => {
                        self.error(LexError::UnterminatedString);
                        return;
                    }
                },
                _ => value.push(self.advance()),
            }
        }

        let token = self.make_token(TokenKind::String).with_value(value);
        self.tokens.push(token);
    }

    /// Parses a `'`-delimited character literal.
    ///
    /// The body must be exactly one character or exactly one escape
    /// sequence:
    /// - `'a'`, `'\n'`  → character tokens
    /// - `''`, `'ab'`   → invalid character literal
    /// - `'a` + newline → unterminated character literal
    fn character(&mut self) {
        if self.is_at_end() || self.peek() == '\n' {
            self.error(LexError::UnterminatedCharacter);
            return;
        }

        if self.match_char('\'') {
            self.error(LexError::InvalidCharacterLiteral);
            return;
        }

        let decoded = if self.peek() == '\\' {
            match self.escape() {
                Some(decoded) => decoded,
                None => {
                    self.error(LexError::UnterminatedCharacter);
                    return;
                }
            }
        } else {
            self.advance()
        };

        if self.match_char('\'') {
            let token = self
                .make_token(TokenKind::Character)
                .with_value(decoded.to_string());
            self.tokens.push(token);
            return;
        }

        // Too many characters. Swallow up to the closing quote on this line
        // so the whole literal becomes one error token.
        while !self.is_at_end() && self.peek() != '\'' && self.peek() != '\n' {
            if self.advance() == '\\' && !self.is_at_end() && self.peek() != '\n' {
                self.advance();
            }
        }

        if self.match_char('\'') {
            self.error(LexError::InvalidCharacterLiteral);
        } else {
            self.error(LexError::UnterminatedCharacter);
        }
    }

    /// Consumes a backslash escape and returns the decoded character, or
    /// `None` if the input ends right after the backslash.
    ///
    /// Unknown escapes decode to the escaped character and produce a
    /// warning.
    fn escape(&mut self) -> Option<char> {
        let at = self.mark();
        self.advance(); // '\'

        if self.is_at_end() {
            return None;
        }

        let escaped = self.advance();
        let (decoded, known) = decode_escape(escaped);

        if !known {
            let span = self.span_from(at);
            self.diagnostics.push(
                Diagnostic::warning(
                    "W0001",
                    format!("unknown escape sequence '\\{}'", escaped),
                    span,
                )
                .with_help("the escaped character is used as-is"),
            );
        }

        Some(decoded)
    }

    /// Parses an identifier or keyword token.
    ///
    /// An `import` keyword is immediately followed by its bareword path,
    /// which has its own token kind because it is not an expression.
    fn identifier(&mut self) {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text = &self.source[self.start.offset..self.offset];

        match keyword(text) {
            Some(Keyword::Import) => {
                self.add_token(TokenKind::Keyword(Keyword::Import));
                self.import_path();
            }
            Some(kw) => self.add_token(TokenKind::Keyword(kw)),
            None => self.add_token(TokenKind::Identifier),
        }
    }

    /// Scans the `[./a-zA-Z0-9_]+` path that follows `import`.
    ///
    /// Spaces and tabs between the keyword and the path are trivia. If no
    /// path follows, nothing is emitted and the parser reports it.
    fn import_path(&mut self) {
        self.start = self.mark();
        while matches!(self.peek(), ' ' | '\t') && !self.is_at_end() {
            self.advance();
        }
        if self.offset > self.start.offset {
            self.add_trivia(TriviaKind::Whitespace);
        }

        self.start = self.mark();
        let Some(found) = import_path_pattern().find(&self.source[self.offset..]) else {
            return;
        };

        // The pattern is ASCII-only, so bytes and chars line up.
        for _ in 0..found.end() {
            self.advance();
        }
        self.add_token(TokenKind::ImportPath);
    }

    /// Parses a number: digits, optionally followed by `.` and more digits.
    ///
    /// # Examples
    /// - `42`
    /// - `3.1415`
    /// - `7.`
    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.match_char('.') {
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        self.add_token(TokenKind::Number);
    }

    fn error(&mut self, error: LexError) {
        let token = self.make_token(TokenKind::Error);
        self.diagnostics
            .push(Diagnostic::from_lex_error(&error, token.span));
        self.tokens.push(token);
    }

    fn add_symbol(&mut self, symbol: Symbol) {
        self.add_token(TokenKind::Symbol(symbol));
    }

    fn add_token(&mut self, kind: TokenKind) {
        let token = self.make_token(kind);
        self.tokens.push(token);
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        let span = self.span_from(self.start);
        Token::new(kind, &self.source[span.start..span.end], span)
    }

    fn add_trivia(&mut self, kind: TriviaKind) {
        let span = self.span_from(self.start);
        self.trivia.push(Trivia { kind, span });
    }

    fn span_from(&self, mark: Mark) -> Span {
        Span::new(mark.offset, self.offset, mark.line, mark.column)
    }

    fn mark(&self) -> Mark {
        Mark {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Conditionally consumes the next character.
    ///
    /// # Returns
    /// - `true` if the next character matched and was consumed
    /// - `false` otherwise
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Advances the cursor by one character, keeping the byte offset,
    /// line and column in step.
    ///
    /// Caller must ensure EOF has not been reached.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        self.offset += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        ch
    }

    /// Returns the current character without consuming it, or `'\0'` at
    /// end of input.
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        lexer.scan_tokens();
        lexer.tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn compound_operators_take_the_longest_match() {
        assert_eq!(
            kinds("+= <= >= + <"),
            vec![
                TokenKind::Symbol(Symbol::PlusEqual),
                TokenKind::Symbol(Symbol::LessEqual),
                TokenKind::Symbol(Symbol::GreaterEqual),
                TokenKind::Symbol(Symbol::Plus),
                TokenKind::Symbol(Symbol::Less),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn spans_track_lines_and_columns() {
        let mut lexer = Lexer::new("a\n  bb");
        lexer.scan_tokens();

        let bb = &lexer.tokens[2];
        assert_eq!(bb.lexeme, "bb");
        assert_eq!(bb.span, Span::new(4, 6, 2, 2));
    }

    #[test]
    fn multibyte_characters_keep_byte_offsets() {
        let mut lexer = Lexer::new("\"é\" x");
        lexer.scan_tokens();

        assert_eq!(lexer.tokens[0].span.end, 4);
        assert_eq!(lexer.tokens[1].lexeme, "x");
        assert_eq!(lexer.tokens[1].span.start, 5);
    }
}
