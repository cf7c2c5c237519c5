/*
 * ==========================================================================
 * MAPLE - Lexer, Parser & Syntax Tree
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines all reserved keywords for the MAPLE programming language.
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

use crate::lexer::token::Keyword;

/// Classifies a scanned identifier as a **reserved keyword**, if it is one.
///
/// This function is used exclusively by the lexer to distinguish
/// user-defined identifiers from language-defined keywords.
///
/// # Returns
/// - `Some(Keyword)` if the word is reserved
/// - `None` if the word should be treated as a normal identifier
///
/// # Examples
/// ```text
/// fn       -> Some(Keyword::Fn)
/// elseif   -> Some(Keyword::Elseif)
/// Fn       -> None   (case-sensitive)
/// function -> None
/// ```
pub fn keyword(word: &str) -> Option<Keyword> {
    let kw = match word {
        "fn" => Keyword::Fn,
        "var" => Keyword::Var,
        "const" => Keyword::Const,
        "while" => Keyword::While,
        "if" => Keyword::If,
        "elseif" => Keyword::Elseif,
        "else" => Keyword::Else,
        "break" => Keyword::Break,
        "continue" => Keyword::Continue,
        "return" => Keyword::Return,
        "import" => Keyword::Import,
        "true" => Keyword::True,
        "false" => Keyword::False,
        _ => return None,
    };

    Some(kw)
}
