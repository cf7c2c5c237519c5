/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure, the public `parse()`
 * driver, and the error recovery shared by every statement list.
 *
 * The grammar itself is split across multiple modules:
 * - `statements.rs`   → Statement-level grammar (`fn`, `var`, `if`, ...)
 * - `expressions.rs`  → Expression grammar & precedence climbing
 * - `precedence.rs`   → Static operator binding table
 * - `helpers.rs`      → Token matching, consumption, and navigation utilities
 *
 * --------------------------------------------------------------------------
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

use crate::ast::{Program, Stmt};
use crate::config::ParseOptions;
use crate::diagnostics::Diagnostic;
use crate::error::ParseError;
use crate::lexer::token::{Symbol, Token, TokenKind};
use crate::span::Span;

pub type ParseResult<T> = Result<T, ParseError>;

/// The core MAPLE recursive-descent parser.
///
/// This structure maintains:
/// - The full token stream produced by the lexer
/// - The current cursor position into that stream
/// - The diagnostics collected so far
/// - Nesting and brace bookkeeping used for limits and recovery
///
/// The grammar logic is implemented through extension modules
/// (`statements`, `expressions`, `helpers`) via additional `impl Parser`
/// blocks.
pub struct Parser<'opts> {
    /// Complete list of tokens to be parsed, ending in `Eof`.
    pub tokens: Vec<Token>,

    /// Current cursor position within the token stream. The parser never
    /// backtracks, so this is also the number of tokens consumed.
    pub current: usize,

    pub diagnostics: Vec<Diagnostic>,

    pub(crate) options: &'opts ParseOptions,

    /// Current expression/block nesting.
    pub(crate) depth: usize,

    /// `{` consumed minus `}` consumed.
    pub(crate) braces: usize,

    /// Set once a fatal error (token limit, cancellation) stops the parse.
    pub(crate) halted: bool,
}

/// Public entry point for the MAPLE parsing phase.
///
/// Never fails: malformed statements are reported in the returned
/// diagnostics and left out of the tree, and parsing resumes at the next
/// statement.
///
/// # MAPLE Compilation Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → (Program, Diagnostics) → consumer
/// ```
pub fn parse(tokens: Vec<Token>, options: &ParseOptions) -> (Program, Vec<Diagnostic>) {
    let mut parser = Parser::new(tokens, options);
    let program = parser.parse_program();
    (program, parser.diagnostics)
}

impl<'opts> Parser<'opts> {
    pub fn new(mut tokens: Vec<Token>, options: &'opts ParseOptions) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let end = tokens.last().map(|t| t.span.end).unwrap_or(0);
            tokens.push(Token::new(TokenKind::Eof, "", Span::new(end, end, 1, 0)));
        }

        Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
            options,
            depth: 0,
            braces: 0,
            halted: false,
        }
    }

    /// Parses the entire token stream into a `Program`.
    ///
    /// The program span always covers the whole input, from byte `0` to the
    /// end-of-file token.
    pub fn parse_program(&mut self) -> Program {
        let statements = self.statement_list(true);
        let end = self.tokens[self.tokens.len() - 1].span.end;

        Program {
            statements,
            span: Span::new(0, end, 1, 0),
        }
    }

    /// Parses `Statement*` until end of file or, inside a block, until the
    /// closing `}`.
    ///
    /// This is the parser's only recovery point: a statement that fails is
    /// reported, dropped, and skipped up to its terminating newline.
    pub(crate) fn statement_list(&mut self, top_level: bool) -> Vec<Stmt> {
        let mut statements = Vec::new();

        while !self.halted && !self.is_at_end() {
            if self.check_symbol(Symbol::RightBrace) {
                if !top_level {
                    break;
                }

                let stray = self.unexpected(&[]);
                self.advance();
                self.report(&stray);
                continue;
            }

            // Blank line: an empty statement.
            if self.match_eos() {
                continue;
            }

            let depth = self.depth;
            let braces = self.braces;

            let parsed = self.check_budget().and_then(|_| self.statement());
            match parsed {
                Ok(stmt) => {
                    statements.push(stmt);
                    if let Err(error) = self.end_of_statement(top_level) {
                        self.recover(error, depth, braces);
                    }
                }
                Err(error) => self.recover(error, depth, braces),
            }
        }

        statements
    }

    /// A statement ends with a newline. At top level, end of file also
    /// ends the last statement.
    fn end_of_statement(&mut self, top_level: bool) -> ParseResult<()> {
        if self.match_eos() || (top_level && self.is_at_end()) {
            return Ok(());
        }

        Err(self.unexpected(&[TokenKind::Eos]))
    }

    fn recover(&mut self, error: ParseError, depth: usize, braces: usize) {
        self.depth = depth;

        if self.halted {
            return;
        }

        self.report(&error);

        if error.is_fatal() {
            self.halted = true;
            return;
        }

        self.synchronize(braces);
    }

    /// Discards tokens up to and including the newline that ends the
    /// failed statement.
    ///
    /// Braces opened after `level` are skipped together with their
    /// contents. A `}` that would close the enclosing block is left for the
    /// block to consume; outside any block it is skipped.
    fn synchronize(&mut self, level: usize) {
        loop {
            match self.peek().kind {
                TokenKind::Eof => return,
                TokenKind::Eos if self.braces <= level => {
                    self.advance();
                    return;
                }
                // At top level a `}` closes nothing; it belongs to the
                // failed statement.
                TokenKind::Symbol(Symbol::RightBrace) if self.braces <= level && level > 0 => {
                    return
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    pub(crate) fn report(&mut self, error: &ParseError) {
        if !error.is_reported() {
            self.diagnostics.push(Diagnostic::from(error));
        }
    }

    /// Enters one level of nesting.
    ///
    /// Fails with `TooDeeplyNested` past `max_depth` so adversarial input
    /// cannot overflow the call stack. Also polls the token budget.
    pub(crate) fn enter(&mut self, span: Span) -> ParseResult<()> {
        self.check_budget()?;

        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(ParseError::TooDeeplyNested {
                limit: self.options.max_depth,
                span,
            });
        }

        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Host-imposed stop conditions: token limit and cancellation flag.
    ///
    /// Polled at every statement start and nesting level, so the parse
    /// stops at the first such boundary once `token_limit` tokens have
    /// been consumed.
    pub(crate) fn check_budget(&self) -> ParseResult<()> {
        let span = self.peek().span;

        if let Some(limit) = self.options.token_limit {
            if self.current >= limit {
                return Err(ParseError::TokenLimitExceeded { limit, span });
            }
        }

        if self.options.is_cancelled() {
            return Err(ParseError::Cancelled { span });
        }

        Ok(())
    }
}
