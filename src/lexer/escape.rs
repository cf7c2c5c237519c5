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

/// Decodes the character following a backslash.
///
/// Returns the decoded character and whether the escape was recognised.
/// Unknown escapes pass the escaped character through literally
/// (`\q` → `q`); the lexer turns `false` into a warning.
pub fn decode_escape(escaped: char) -> (char, bool) {
    match escaped {
        'n' => ('\n', true),
        't' => ('\t', true),
        'r' => ('\r', true),
        '0' => ('\0', true),
        '\\' => ('\\', true),
        '\'' => ('\'', true),
        '"' => ('"', true),
        other => (other, false),
    }
}

#[cfg(test)]
mod tests {
    use super::decode_escape;

    #[test]
    fn known_escapes_decode() {
        assert_eq!(decode_escape('n'), ('\n', true));
        assert_eq!(decode_escape('t'), ('\t', true));
        assert_eq!(decode_escape('\\'), ('\\', true));
        assert_eq!(decode_escape('\''), ('\'', true));
        assert_eq!(decode_escape('"'), ('"', true));
    }

    #[test]
    fn unknown_escape_passes_through() {
        assert_eq!(decode_escape('q'), ('q', false));
    }
}
