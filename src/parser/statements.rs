/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
 *
 * Statement-Level Parsing Logic
 *
 * This file contains all grammar rules responsible for parsing **MAPLE
 * statements** into their corresponding AST forms.
 *
 * It handles:
 * - Function definitions (`fn name(a, b) { ... }`)
 * - Variables (`var`, `const`)
 * - Control flow (`while`, `if`, `elseif`, `else`)
 * - `return`, `break`, `continue`
 * - Blocks and parameter lists
 * - Expression-backed statements
 *
 * Statement terminators (the newline after each statement) are handled by
 * the statement list in `parser.rs`, not here.
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

use crate::ast::{Block, ElseIfArm, Identifier, Stmt};
use crate::lexer::token::{Keyword, Symbol, TokenKind};
use crate::parser::expressions::LIST_CONTINUATION;
use crate::parser::parser::{ParseResult, Parser};

impl<'opts> Parser<'opts> {
    /// Parses the body of a single statement (everything before its
    /// newline).
    ///
    /// This is the **main dispatcher** for all statement grammar forms. It
    /// inspects the leading token and routes to the appropriate parser,
    /// falling back to an expression statement.
    pub fn statement(&mut self) -> ParseResult<Stmt> {
        match self.peek().kind {
            // `fn name` defines; a bare `fn (` is an anonymous function
            // expression.
            TokenKind::Keyword(Keyword::Fn)
                if self
                    .peek_next()
                    .is_some_and(|t| t.kind == TokenKind::Identifier) =>
            {
                self.function_definition()
            }

            TokenKind::Keyword(Keyword::Var) | TokenKind::Keyword(Keyword::Const) => {
                self.variable_definition()
            }

            TokenKind::Keyword(Keyword::While) => self.while_loop(),
            TokenKind::Keyword(Keyword::If) => self.if_statement(),
            TokenKind::Keyword(Keyword::Return) => self.return_statement(),

            TokenKind::Keyword(Keyword::Break) => {
                let token = self.advance();
                Ok(Stmt::Break { span: token.span })
            }

            TokenKind::Keyword(Keyword::Continue) => {
                let token = self.advance();
                Ok(Stmt::Continue { span: token.span })
            }

            _ => self.expression_statement(),
        }
    }

    /// function → "fn" IDENT parameters block
    fn function_definition(&mut self) -> ParseResult<Stmt> {
        let keyword = self.advance();
        let name = self.consume_identifier()?;
        let params = self.parameter_list()?;
        let body = self.block()?;

        Ok(Stmt::FunctionDefinition {
            span: keyword.span.to(body.span),
            name,
            params,
            body,
        })
    }

    /// Parses a variable definition.
    ///
    /// # Grammar
    /// ```text
    /// variable → ( "var" | "const" ) IDENT ( "=" expression )?
    /// ```
    ///
    /// `const` without an initializer is accepted; whether that is
    /// meaningful is for later stages to decide.
    fn variable_definition(&mut self) -> ParseResult<Stmt> {
        let keyword = self.advance();
        let is_const = keyword.is_keyword(Keyword::Const);
        let name = self.consume_identifier()?;

        let init = if self.match_symbol(Symbol::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        let end = init.as_ref().map(|e| e.span()).unwrap_or(name.span);

        Ok(Stmt::VariableDefinition {
            span: keyword.span.to(end),
            is_const,
            name,
            init,
        })
    }

    /// while → "while" expression block
    fn while_loop(&mut self) -> ParseResult<Stmt> {
        let keyword = self.advance();
        let condition = self.expression()?;
        let body = self.block()?;

        Ok(Stmt::While {
            span: keyword.span.to(body.span),
            condition,
            body,
        })
    }

    /// Parses an if statement with its `elseif` and `else` arms.
    ///
    /// # Grammar
    /// ```text
    /// if → "if" expression block ( "elseif" expression block )* ( "else" block )?
    /// ```
    ///
    /// Every `elseif` carries its own condition. Each arm keyword must sit
    /// on the same line as the `}` that closes the previous block, since a
    /// newline there would end the statement.
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.advance();
        let condition = self.expression()?;
        let then_block = self.block()?;
        let mut end = then_block.span;

        let mut elseif_blocks = Vec::new();
        while self.check_keyword(Keyword::Elseif) {
            let arm_keyword = self.advance();
            let condition = self.expression()?;
            let block = self.block()?;
            end = block.span;

            elseif_blocks.push(ElseIfArm {
                span: arm_keyword.span.to(block.span),
                condition,
                block,
            });
        }

        let else_block = if self.match_keyword(Keyword::Else) {
            let block = self.block()?;
            end = block.span;
            Some(block)
        } else {
            None
        };

        Ok(Stmt::If {
            span: keyword.span.to(end),
            condition,
            then_block,
            elseif_blocks,
            else_block,
        })
    }

    /// return → "return" expression
    ///
    /// The value is mandatory; a bare `return` is a syntax error.
    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.advance();
        let value = self.expression()?;

        Ok(Stmt::Return {
            span: keyword.span.to(value.span()),
            value,
        })
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        Ok(Stmt::Expression {
            span: expr.span(),
            expr,
        })
    }

    /// Parses a block.
    ///
    /// # Grammar
    /// ```text
    /// block → "{" EOS statement* "}"
    /// ```
    ///
    /// The newline right after `{` is mandatory, so `{ return 1 }` is a
    /// syntax error while
    /// ```text
    /// {
    ///     return 1
    /// }
    /// ```
    /// is a block with one statement.
    pub(crate) fn block(&mut self) -> ParseResult<Block> {
        let open = self.expect_symbol(Symbol::LeftBrace)?;
        self.enter(open.span)?;

        self.expect_newline("'{'")?;
        let statements = self.statement_list(false);
        let close = self.expect_symbol(Symbol::RightBrace)?;

        self.leave();
        Ok(Block {
            statements,
            span: open.span.to(close.span),
        })
    }

    /// parameters → "(" ( IDENT ( "," IDENT )* )? ")"
    ///
    /// No trailing comma.
    pub(crate) fn parameter_list(&mut self) -> ParseResult<Vec<Identifier>> {
        self.expect_symbol(Symbol::LeftParen)?;

        let mut params = Vec::new();
        if !self.check_symbol(Symbol::RightParen) {
            loop {
                params.push(self.consume_identifier()?);
                if self.match_symbol(Symbol::Comma) {
                    continue;
                }
                if !self.check_symbol(Symbol::RightParen) {
                    return Err(self.unexpected(LIST_CONTINUATION));
                }
                break;
            }
        }

        self.expect_symbol(Symbol::RightParen)?;
        Ok(params)
    }
}
