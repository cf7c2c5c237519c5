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

use crate::ast::Identifier;
use crate::error::ParseError;
use crate::lexer::token::{Keyword, Symbol, Token, TokenKind};
use crate::parser::parser::{ParseResult, Parser};

impl<'opts> Parser<'opts> {
    /// Returns the current token without consuming it.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Returns the token after the current one, if any.
    pub fn peek_next(&self) -> Option<&Token> {
        self.tokens.get(self.current + 1)
    }

    /// Advances one token forward and returns the consumed token.
    ///
    /// Never moves past `Eof`. Keeps the brace balance used by error
    /// recovery in step with what has been consumed.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();

        match token.kind {
            TokenKind::Eof => return token,
            TokenKind::Symbol(Symbol::LeftBrace) => self.braces += 1,
            TokenKind::Symbol(Symbol::RightBrace) => {
                self.braces = self.braces.saturating_sub(1)
            }
            _ => {}
        }

        self.current += 1;
        token
    }

    /// Returns true if the parser is at EOF.
    pub fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Checks if the current token is the given symbol.
    pub fn check_symbol(&self, symbol: Symbol) -> bool {
        self.peek().is_symbol(symbol)
    }

    /// Matches a symbol and consumes it.
    pub fn match_symbol(&mut self, symbol: Symbol) -> bool {
        if self.check_symbol(symbol) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Checks for a keyword without consuming it.
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.peek().is_keyword(keyword)
    }

    /// Matches a keyword and consumes it if present.
    pub fn match_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a newline token if one is next.
    pub fn match_eos(&mut self) -> bool {
        if self.peek().kind == TokenKind::Eos {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a required symbol or fails with the symbol as the only
    /// expected kind.
    pub fn expect_symbol(&mut self, symbol: Symbol) -> ParseResult<Token> {
        if self.check_symbol(symbol) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&[TokenKind::Symbol(symbol)]))
        }
    }

    /// Consumes and returns an identifier.
    pub fn consume_identifier(&mut self) -> ParseResult<Identifier> {
        if self.peek().kind != TokenKind::Identifier {
            return Err(self.unexpected(&[TokenKind::Identifier]));
        }

        let token = self.advance();
        Ok(Identifier::new(token.lexeme, token.span))
    }

    /// Consumes the newline that must follow `{` in a block and every
    /// object literal entry.
    pub fn expect_newline(&mut self, after: &str) -> ParseResult<()> {
        if self.match_eos() {
            return Ok(());
        }

        let found = self.peek();
        if found.kind == TokenKind::Error {
            return Err(ParseError::Lexical { span: found.span });
        }

        Err(ParseError::MissingNewline {
            after: after.to_string(),
            found: found.to_string(),
            span: found.span,
        })
    }

    /// Builds the error for the current token given what would have been
    /// accepted instead.
    ///
    /// An error token produces the silent `Lexical` error: the lexer has
    /// already reported that span.
    pub fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        let found = self.peek();

        if found.kind == TokenKind::Error {
            return ParseError::Lexical { span: found.span };
        }

        ParseError::UnexpectedToken {
            found: found.to_string(),
            expected: expected.iter().map(TokenKind::describe).collect(),
            span: found.span,
        }
    }
}
