/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the MAPLE recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic and error recovery
 *   - Statement parsing
 *   - Expression parsing (precedence climbing)
 *   - The static operator table
 *   - Shared helper utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the main `parse(tokens, options)` entry point
/// - Statement lists and resynchronization
pub mod parser;

/// Statement-level parsing:
/// - fn / var / const definitions
/// - while / if / elseif / else
/// - return / break / continue
/// - blocks and parameter lists
pub mod statements;

/// Expression-level parsing:
/// - binary operators by precedence climbing
/// - unary prefix, postfix member/index/call
/// - literals, anonymous functions, imports
pub mod expressions;

/// Operator binding powers.
pub mod precedence;

/// Shared parser helpers:
/// - token matching
/// - lookahead checks
/// - required-token consumption
pub mod helpers;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse(...)`
pub use parser::{parse, ParseResult, Parser};
