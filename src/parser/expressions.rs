/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
 *
 * File:     expressions.rs
 * Purpose:  Implements the MAPLE expression grammar
 *
 * --------------------------------------------------------------------------
 *  LICENSE
 * --------------------------------------------------------------------------
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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * Binary operators are parsed by precedence climbing over the table in
 * `precedence.rs`:
 *
 *   assignment < relational < additive < multiplicative < unary < postfix
 *
 * Postfix forms (`.name`, `[index]`, `(args)`) are folded in a tight loop
 * right after each primary expression, before any binary operator is
 * considered.
 *
 * There is no parenthesized grouping: `(` never starts an expression.
 *
 * ==========================================================================
 */

use crate::ast::{Expr, Identifier, ObjectEntry, ObjectKey, UnaryOp};
use crate::error::ParseError;
use crate::lexer::token::{Keyword, Symbol, Token, TokenKind};
use crate::parser::parser::{ParseResult, Parser};
use crate::parser::precedence::{binary_operator, binding_power};

/// Tokens that can begin an expression, for "expected ..." messages.
const EXPRESSION_START: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::Number,
    TokenKind::String,
    TokenKind::Character,
    TokenKind::Keyword(Keyword::True),
    TokenKind::Keyword(Keyword::False),
    TokenKind::Keyword(Keyword::Fn),
    TokenKind::Keyword(Keyword::Import),
    TokenKind::Symbol(Symbol::LeftBrace),
    TokenKind::Symbol(Symbol::LeftBracket),
    TokenKind::Symbol(Symbol::Minus),
    TokenKind::Symbol(Symbol::Bang),
];

/// What may follow an argument or parameter.
pub(crate) const LIST_CONTINUATION: &[TokenKind] = &[
    TokenKind::Symbol(Symbol::Comma),
    TokenKind::Symbol(Symbol::RightParen),
];

impl<'opts> Parser<'opts> {
    /// expression → binary(0)
    pub fn expression(&mut self) -> ParseResult<Expr> {
        self.binary(0)
    }

    /// Precedence climbing over every binary operator.
    ///
    /// # Grammar
    /// ```text
    /// binary → unary ( OP binary )*
    /// ```
    ///
    /// # Behavior
    /// - Folds operators whose left binding power is at least `min_power`
    /// - Parses each right operand with the operator's right binding power,
    ///   which makes `-` left-associative and `=` right-associative:
    ///   ```text
    ///   a - b - c  →  (a - b) - c
    ///   a = b = c  →  a = (b = c)
    ///   ```
    /// - Rejects `=` and `+=` whose left side is not assignable
    /// - Counts every fold as one level of nesting, so `1 + 1 + ... + 1`
    ///   is bounded by `max_depth` like any other nesting
    fn binary(&mut self, min_power: u8) -> ParseResult<Expr> {
        let start = self.peek().span;
        self.enter(start)?;

        let mut left = self.unary()?;
        let mut folds = 0;

        while let Some(op) = binary_operator(self.peek().kind) {
            let power = binding_power(op);
            if power.left < min_power {
                break;
            }

            if op.is_assignment() && !left.is_assignable() {
                return Err(ParseError::InvalidAssignmentTarget { span: left.span() });
            }

            let operator = self.advance();
            self.enter(operator.span)?;
            folds += 1;

            let right = self.binary(power.right)?;
            let span = left.span().to(right.span());

            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }

        for _ in 0..=folds {
            self.leave();
        }
        Ok(left)
    }

    /// unary → ( "!" | "-" ) unary | postfix
    fn unary(&mut self) -> ParseResult<Expr> {
        let op = match self.peek().kind {
            TokenKind::Symbol(Symbol::Minus) => UnaryOp::Negate,
            TokenKind::Symbol(Symbol::Bang) => UnaryOp::Not,
            _ => return self.postfix(),
        };

        let token = self.advance();
        self.enter(token.span)?;
        let operand = self.unary()?;
        self.leave();

        Ok(Expr::Unary {
            op,
            span: token.span.to(operand.span()),
            operand: Box::new(operand),
        })
    }

    /// postfix → primary ( "." identifier | "[" expression "]" | arguments )*
    ///
    /// # Rules
    /// - `.` only extends an identifier or an existing object access, so
    ///   `a.b.c` is one `ObjectAccess` and `f().x` is an error
    /// - consecutive `[i][j]` collect into one `ArrayAccess`
    /// - only assignable expressions can be called: `a()`, `a.b()` and
    ///   `a[0]()` are calls, `1()` and `f()()` are errors
    ///
    /// A call, or an index that starts a new `ArrayAccess`, wraps the
    /// expression so far and counts as one level of nesting.
    fn postfix(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;
        let mut wraps = 0;

        loop {
            if self.check_symbol(Symbol::Dot) {
                let dot = self.advance();
                expr = match expr {
                    Expr::Identifier(base) => {
                        let step = self.consume_identifier()?;
                        Expr::ObjectAccess {
                            span: base.span.to(step.span),
                            base,
                            path: vec![step],
                        }
                    }
                    Expr::ObjectAccess {
                        base,
                        mut path,
                        span,
                    } => {
                        let step = self.consume_identifier()?;
                        let span = span.to(step.span);
                        path.push(step);
                        Expr::ObjectAccess { base, path, span }
                    }
                    other => {
                        return Err(ParseError::InvalidMemberBase {
                            span: other.span().to(dot.span),
                        })
                    }
                };
                continue;
            }

            if self.match_symbol(Symbol::LeftBracket) {
                let index = self.expression()?;
                let close = self.expect_symbol(Symbol::RightBracket)?;

                expr = match expr {
                    Expr::ArrayAccess {
                        base,
                        mut indices,
                        span,
                    } => {
                        indices.push(index);
                        Expr::ArrayAccess {
                            base,
                            indices,
                            span: span.to(close.span),
                        }
                    }
                    other => {
                        self.enter(close.span)?;
                        wraps += 1;

                        Expr::ArrayAccess {
                            span: other.span().to(close.span),
                            base: Box::new(other),
                            indices: vec![index],
                        }
                    }
                };
                continue;
            }

            if self.check_symbol(Symbol::LeftParen) {
                if !expr.is_assignable() {
                    return Err(ParseError::InvalidCallTarget { span: expr.span() });
                }

                let (args, close) = self.argument_list()?;
                self.enter(close.span)?;
                wraps += 1;

                expr = Expr::Call {
                    span: expr.span().to(close.span),
                    callee: Box::new(expr),
                    args,
                };
                continue;
            }

            break;
        }

        for _ in 0..wraps {
            self.leave();
        }
        Ok(expr)
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        match self.peek().kind {
            TokenKind::Identifier => {
                let token = self.advance();
                Ok(Expr::Identifier(Identifier::new(token.lexeme, token.span)))
            }

            TokenKind::Number => {
                let token = self.advance();
                Ok(Expr::Number {
                    is_float: token.lexeme.contains('.'),
                    text: token.lexeme,
                    span: token.span,
                })
            }

            TokenKind::String => {
                let token = self.advance();
                Ok(Expr::String {
                    value: token.value.unwrap_or_default(),
                    span: token.span,
                })
            }

            TokenKind::Character => {
                let token = self.advance();
                Ok(Expr::Character {
                    value: token
                        .value
                        .as_deref()
                        .and_then(|v| v.chars().next())
                        .unwrap_or_default(),
                    span: token.span,
                })
            }

            TokenKind::Keyword(Keyword::True) | TokenKind::Keyword(Keyword::False) => {
                let token = self.advance();
                Ok(Expr::Boolean {
                    value: token.is_keyword(Keyword::True),
                    span: token.span,
                })
            }

            TokenKind::Keyword(Keyword::Import) => self.import_expression(),
            TokenKind::Keyword(Keyword::Fn) => self.anon_function(),
            TokenKind::Symbol(Symbol::LeftBrace) => self.object_literal(),
            TokenKind::Symbol(Symbol::LeftBracket) => self.array_literal(),

            _ => Err(self.unexpected(EXPRESSION_START)),
        }
    }

    /// import → "import" IMPORT_PATH
    fn import_expression(&mut self) -> ParseResult<Expr> {
        let keyword = self.advance();

        if self.peek().kind != TokenKind::ImportPath {
            return Err(self.unexpected(&[TokenKind::ImportPath]));
        }

        let path = self.advance();
        Ok(Expr::Import {
            span: keyword.span.to(path.span),
            path: path.lexeme,
        })
    }

    /// anon_function → "fn" parameters block
    fn anon_function(&mut self) -> ParseResult<Expr> {
        let keyword = self.advance();
        let params = self.parameter_list()?;
        let body = self.block()?;

        Ok(Expr::AnonFunction {
            span: keyword.span.to(body.span),
            params,
            body,
        })
    }

    /// Parses an object literal.
    ///
    /// # Grammar
    /// ```text
    /// object → "{" EOS* ( ( IDENT | NUMBER ) "=" expression ","? EOS+ )* "}"
    /// ```
    ///
    /// Every entry, the last one included, must be followed by a newline;
    /// the comma is optional:
    /// ```text
    /// {
    ///     name = "maple",
    ///     0 = 1
    /// }
    /// ```
    fn object_literal(&mut self) -> ParseResult<Expr> {
        let open = self.advance();
        self.enter(open.span)?;

        while self.match_eos() {}

        let mut entries = Vec::new();
        while !self.check_symbol(Symbol::RightBrace) {
            let key = match self.peek().kind {
                TokenKind::Identifier => {
                    let token = self.advance();
                    ObjectKey::Identifier(Identifier::new(token.lexeme, token.span))
                }
                TokenKind::Number => {
                    let token = self.advance();
                    ObjectKey::Number {
                        text: token.lexeme,
                        span: token.span,
                    }
                }
                _ => {
                    return Err(self.unexpected(&[
                        TokenKind::Identifier,
                        TokenKind::Number,
                        TokenKind::Symbol(Symbol::RightBrace),
                    ]))
                }
            };

            self.expect_symbol(Symbol::Equal)?;
            let value = self.expression()?;
            let span = key.span().to(value.span());
            self.match_symbol(Symbol::Comma);

            self.expect_newline("object entry")?;
            while self.match_eos() {}

            entries.push(ObjectEntry { key, value, span });
        }

        let close = self.advance();
        self.leave();

        Ok(Expr::ObjectLiteral {
            entries,
            span: open.span.to(close.span),
        })
    }

    /// Parses an array literal.
    ///
    /// # Grammar
    /// ```text
    /// array → "[" EOS* ( expression ","? EOS? )* "]"
    /// ```
    ///
    /// Elements are separated by a comma, a newline, or both. Only the last
    /// element may have neither.
    fn array_literal(&mut self) -> ParseResult<Expr> {
        let open = self.advance();
        self.enter(open.span)?;

        while self.match_eos() {}

        let mut elements = Vec::new();
        while !self.check_symbol(Symbol::RightBracket) {
            elements.push(self.expression()?);

            let comma = self.match_symbol(Symbol::Comma);
            let newline = self.match_eos();

            if !comma && !newline && !self.check_symbol(Symbol::RightBracket) {
                return Err(self.unexpected(&[
                    TokenKind::Symbol(Symbol::Comma),
                    TokenKind::Eos,
                    TokenKind::Symbol(Symbol::RightBracket),
                ]));
            }
        }

        let close = self.advance();
        self.leave();

        Ok(Expr::ArrayLiteral {
            elements,
            span: open.span.to(close.span),
        })
    }

    /// arguments → "(" ( expression ( "," expression )* )? ")"
    ///
    /// Returns the arguments and the closing parenthesis.
    fn argument_list(&mut self) -> ParseResult<(Vec<Expr>, Token)> {
        self.expect_symbol(Symbol::LeftParen)?;

        let mut args = Vec::new();
        if !self.check_symbol(Symbol::RightParen) {
            loop {
                args.push(self.expression()?);
                if self.match_symbol(Symbol::Comma) {
                    continue;
                }
                if !self.check_symbol(Symbol::RightParen) {
                    return Err(self.unexpected(LIST_CONTINUATION));
                }
                break;
            }
        }

        let close = self.expect_symbol(Symbol::RightParen)?;
        Ok((args, close))
    }
}
