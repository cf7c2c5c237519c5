/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
 *
 * File:     precedence.rs
 * Purpose:  Static operator table consulted by the precedence climber.
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

use crate::ast::BinaryOp;
use crate::lexer::token::{Symbol, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// Binding power of a binary operator.
///
/// An operator is folded into the current expression while its `left`
/// power is at least the caller's minimum; its right operand is parsed with
/// `right` as the new minimum.
/// - Left-associative: `left < right` (`a - b - c` = `(a - b) - c`)
/// - Right-associative: `left > right` (`a = b = c` = `a = (b = c)`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingPower {
    pub left: u8,
    pub right: u8,
}

impl BindingPower {
    pub const fn new(level: u8, assoc: Assoc) -> Self {
        match assoc {
            Assoc::Left => Self {
                left: level,
                right: level + 1,
            },
            Assoc::Right => Self {
                left: level + 1,
                right: level,
            },
        }
    }
}

/// Loosest to tightest. Unary prefix and postfix forms bind tighter than
/// all of these and are handled outside the table.
pub mod prec {
    use super::{Assoc, BindingPower};

    /// `=`, `+=`
    pub const ASSIGNMENT: BindingPower = BindingPower::new(2, Assoc::Right);

    /// `<`, `>`, `<=`, `>=`
    pub const RELATIONAL: BindingPower = BindingPower::new(4, Assoc::Left);

    /// `+`, `-`
    pub const ADDITIVE: BindingPower = BindingPower::new(6, Assoc::Left);

    /// `*`, `/`
    pub const MULTIPLICATIVE: BindingPower = BindingPower::new(8, Assoc::Left);
}

/// Maps a token to the binary operator it spells, if any.
pub fn binary_operator(kind: TokenKind) -> Option<BinaryOp> {
    let TokenKind::Symbol(symbol) = kind else {
        return None;
    };

    let op = match symbol {
        Symbol::Equal => BinaryOp::Assign,
        Symbol::PlusEqual => BinaryOp::AddAssign,
        Symbol::Less => BinaryOp::Less,
        Symbol::Greater => BinaryOp::Greater,
        Symbol::LessEqual => BinaryOp::LessEqual,
        Symbol::GreaterEqual => BinaryOp::GreaterEqual,
        Symbol::Plus => BinaryOp::Add,
        Symbol::Minus => BinaryOp::Sub,
        Symbol::Star => BinaryOp::Mul,
        Symbol::Slash => BinaryOp::Div,
        _ => return None,
    };

    Some(op)
}

pub fn binding_power(op: BinaryOp) -> BindingPower {
    match op {
        BinaryOp::Assign | BinaryOp::AddAssign => prec::ASSIGNMENT,
        BinaryOp::Less | BinaryOp::Greater | BinaryOp::LessEqual | BinaryOp::GreaterEqual => {
            prec::RELATIONAL
        }
        BinaryOp::Add | BinaryOp::Sub => prec::ADDITIVE,
        BinaryOp::Mul | BinaryOp::Div => prec::MULTIPLICATIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_loosest_to_tightest() {
        assert!(prec::ASSIGNMENT.left < prec::RELATIONAL.left);
        assert!(prec::RELATIONAL.left < prec::ADDITIVE.left);
        assert!(prec::ADDITIVE.left < prec::MULTIPLICATIVE.left);
    }

    #[test]
    fn only_assignment_is_right_associative() {
        assert!(prec::ASSIGNMENT.left > prec::ASSIGNMENT.right);
        for power in [prec::RELATIONAL, prec::ADDITIVE, prec::MULTIPLICATIVE] {
            assert!(power.left < power.right);
        }
    }

    #[test]
    fn non_operator_symbols_are_not_binary() {
        assert_eq!(binary_operator(TokenKind::Symbol(Symbol::Dot)), None);
        assert_eq!(binary_operator(TokenKind::Symbol(Symbol::Bang)), None);
        assert_eq!(binary_operator(TokenKind::Identifier), None);
    }
}
