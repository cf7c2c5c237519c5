use maple::diagnostics::Severity;
use maple::lexer::keywords::keyword;
use maple::lexer::{tokenize, Keyword, Symbol, TokenKind, TriviaKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).tokens.into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        kinds("fn var const while if elseif else break continue return true false foo"),
        vec![
            TokenKind::Keyword(Keyword::Fn),
            TokenKind::Keyword(Keyword::Var),
            TokenKind::Keyword(Keyword::Const),
            TokenKind::Keyword(Keyword::While),
            TokenKind::Keyword(Keyword::If),
            TokenKind::Keyword(Keyword::Elseif),
            TokenKind::Keyword(Keyword::Else),
            TokenKind::Keyword(Keyword::Break),
            TokenKind::Keyword(Keyword::Continue),
            TokenKind::Keyword(Keyword::Return),
            TokenKind::Keyword(Keyword::True),
            TokenKind::Keyword(Keyword::False),
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );

    // Keywords are case-sensitive and whole-word.
    assert_eq!(keyword("elseif"), Some(Keyword::Elseif));
    assert_eq!(keyword("Fn"), None);
    assert_eq!(kinds("iffy _x1"), vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn test_numbers_keep_their_text() {
    let lexed = tokenize("42 3.14 7.");
    let lexemes: Vec<&str> = lexed.tokens.iter().map(|t| t.lexeme.as_str()).collect();

    assert_eq!(lexemes, vec!["42", "3.14", "7.", ""]);
    assert!(lexed.tokens[..3].iter().all(|t| t.kind == TokenKind::Number));
}

#[test]
fn test_newline_is_a_token_and_comments_are_trivia() {
    let lexed = tokenize("a // note\nb");

    assert_eq!(
        lexed.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Identifier, TokenKind::Eos, TokenKind::Identifier, TokenKind::Eof]
    );
    assert_eq!(
        lexed.trivia.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TriviaKind::Whitespace, TriviaKind::Comment]
    );
}

#[test]
fn test_empty_source_is_just_eof() {
    let lexed = tokenize("");

    assert_eq!(lexed.tokens.len(), 1);
    assert_eq!(lexed.tokens[0].kind, TokenKind::Eof);
    assert!(lexed.tokens[0].span.is_empty());
}

#[test]
fn test_string_escapes_are_decoded() {
    let lexed = tokenize(r#""a\tb\n\"q\"""#);
    let token = &lexed.tokens[0];

    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.lexeme, r#""a\tb\n\"q\"""#);
    assert_eq!(token.value.as_deref(), Some("a\tb\n\"q\""));
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn test_strings_may_span_lines() {
    let lexed = tokenize("\"a\nb\" c");

    assert_eq!(lexed.tokens[0].kind, TokenKind::String);
    assert_eq!(lexed.tokens[0].value.as_deref(), Some("a\nb"));

    let c = &lexed.tokens[1];
    assert_eq!(c.lexeme, "c");
    assert_eq!(c.span.line, 2);
    assert_eq!(c.span.column, 3);
}

#[test]
fn test_unknown_escape_is_a_warning() {
    let lexed = tokenize(r#""\q""#);

    assert_eq!(lexed.tokens[0].kind, TokenKind::String);
    assert_eq!(lexed.tokens[0].value.as_deref(), Some("q"));

    assert_eq!(lexed.diagnostics.len(), 1);
    assert_eq!(lexed.diagnostics[0].severity, Severity::Warning);
    assert_eq!(lexed.diagnostics[0].code, "W0001");
}

#[test]
fn test_unterminated_string() {
    let lexed = tokenize("\"abc");

    assert_eq!(lexed.tokens[0].kind, TokenKind::Error);
    assert_eq!(lexed.tokens[0].lexeme, "\"abc");
    assert_eq!(lexed.tokens[1].kind, TokenKind::Eof);

    assert_eq!(lexed.diagnostics.len(), 1);
    assert_eq!(lexed.diagnostics[0].code, "E0001");
    assert_eq!(lexed.diagnostics[0].span.start, 0);
    assert_eq!(lexed.diagnostics[0].span.end, 4);
}

#[test]
fn test_character_literals() {
    let lexed = tokenize(r"'a' '\n'");

    assert_eq!(lexed.tokens[0].kind, TokenKind::Character);
    assert_eq!(lexed.tokens[0].value.as_deref(), Some("a"));
    assert_eq!(lexed.tokens[1].kind, TokenKind::Character);
    assert_eq!(lexed.tokens[1].value.as_deref(), Some("\n"));
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn test_invalid_character_literals() {
    for source in ["''", "'ab'"] {
        let lexed = tokenize(source);

        assert_eq!(lexed.tokens[0].kind, TokenKind::Error, "{}", source);
        assert_eq!(lexed.tokens[0].lexeme, source);
        assert_eq!(lexed.diagnostics.len(), 1);
        assert_eq!(lexed.diagnostics[0].code, "E0003");
    }

    let lexed = tokenize("'a\nb");
    assert_eq!(lexed.tokens[0].kind, TokenKind::Error);
    assert_eq!(lexed.diagnostics[0].code, "E0002");
    assert_eq!(lexed.tokens[1].kind, TokenKind::Eos);
}

#[test]
fn test_unrecognized_character_keeps_going() {
    let lexed = tokenize("a @ b");

    assert_eq!(
        lexed.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Identifier, TokenKind::Error, TokenKind::Identifier, TokenKind::Eof]
    );
    assert_eq!(lexed.diagnostics.len(), 1);
    assert_eq!(lexed.diagnostics[0].code, "E0004");
    assert_eq!(lexed.diagnostics[0].message, "unrecognized character '@'");
}

#[test]
fn test_import_path_is_one_token() {
    let lexed = tokenize("import ./lib/math_2\n");

    assert_eq!(
        lexed.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Keyword(Keyword::Import),
            TokenKind::ImportPath,
            TokenKind::Eos,
            TokenKind::Eof,
        ]
    );
    assert_eq!(lexed.tokens[1].lexeme, "./lib/math_2");
    assert_eq!(lexed.trivia.len(), 1);
}

#[test]
fn test_symbols() {
    assert_eq!(
        kinds("!a.b, (c)[d] {}"),
        vec![
            TokenKind::Symbol(Symbol::Bang),
            TokenKind::Identifier,
            TokenKind::Symbol(Symbol::Dot),
            TokenKind::Identifier,
            TokenKind::Symbol(Symbol::Comma),
            TokenKind::Symbol(Symbol::LeftParen),
            TokenKind::Identifier,
            TokenKind::Symbol(Symbol::RightParen),
            TokenKind::Symbol(Symbol::LeftBracket),
            TokenKind::Identifier,
            TokenKind::Symbol(Symbol::RightBracket),
            TokenKind::Symbol(Symbol::LeftBrace),
            TokenKind::Symbol(Symbol::RightBrace),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_tokens_and_trivia_rebuild_the_source() {
    let sources = [
        "fn add(a, b) {\n    return a + b\n}\n",
        "var x = 'ab' // note\n  \"é\\q\" @\r\n",
        "import   ./lib\t\n\"unterminated",
        "",
    ];

    for source in sources {
        let lexed = tokenize(source);
        assert_eq!(lexed.reconstruct(source), source);
    }
}

#[test]
fn test_diagnostics_come_out_in_source_order() {
    let source = "var x = 'ab' // note\n  \"é\\q\" @\r\n";
    let codes: Vec<&str> = tokenize(source).diagnostics.iter().map(|d| d.code).collect();

    assert_eq!(codes, vec!["E0003", "W0001", "E0004"]);
}
