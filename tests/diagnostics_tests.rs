use maple::config::{ParseOptions, DEFAULT_MAX_DEPTH};
use maple::diagnostics::{Diagnostic, DiagnosticPrinter, Severity};
use maple::error::ParseError;
use maple::parse;
use maple::span::Span;

#[test]
fn test_render_points_at_the_offending_token() {
    let source = "while x { return 1 }\n";
    let output = parse(source);
    let printer = DiagnosticPrinter::new("example.mpl", source);

    let expected = "\
error[E0102]: expected a newline after '{', found 'return'
  --> example.mpl:1:11
   |
  1 | while x { return 1 }
   |           ^^^^^^
help: block bodies and object entries must start on a new line
";

    assert_eq!(printer.render(&output.diagnostics[0]), expected);
}

#[test]
fn test_render_warning() {
    let source = "var s = \"\\q\"\n";
    let output = parse(source);
    let printer = DiagnosticPrinter::new("warn.mpl", source);

    assert!(!output.has_errors());
    let rendered = printer.render(&output.diagnostics[0]);

    assert!(rendered.starts_with("warning[W0001]: unknown escape sequence '\\q'"));
    assert!(rendered.contains("  --> warn.mpl:1:10"));
    assert!(rendered.contains("   |          ^^\n"));
}

#[test]
fn test_render_on_a_later_line() {
    let source = "var a = 1\nvar = 2\n";
    let output = parse(source);
    let rendered = DiagnosticPrinter::new("two.mpl", source).render(&output.diagnostics[0]);

    assert!(rendered.contains("  --> two.mpl:2:5"));
    assert!(rendered.contains("  2 | var = 2\n"));
    assert!(rendered.contains("   |     ^\n"));
}

#[test]
fn test_expected_kinds_are_listed() {
    let output = parse("var = 1\n");
    let diagnostic = &output.diagnostics[0];

    assert_eq!(diagnostic.expected, vec!["identifier".to_string()]);
    assert_eq!(diagnostic.message, "unexpected '=', expected identifier");
}

#[test]
fn test_parse_error_messages() {
    let error = ParseError::UnexpectedToken {
        found: "'x'".to_string(),
        expected: vec!["'a'".to_string(), "'b'".to_string(), "'c'".to_string()],
        span: Span::default(),
    };
    assert_eq!(error.to_string(), "unexpected 'x', expected 'a', 'b' or 'c'");

    let error = ParseError::TooDeeplyNested {
        limit: 128,
        span: Span::default(),
    };
    assert_eq!(error.to_string(), "too deeply nested (limit is 128)");
    assert!(!error.is_fatal());

    assert!(ParseError::Cancelled { span: Span::default() }.is_fatal());
}

#[test]
fn test_diagnostic_builder() {
    let diagnostic = Diagnostic::error("E0101", "bad", Span::new(3, 5, 1, 3))
        .with_help("try again")
        .with_source_name("a.mpl");

    assert!(diagnostic.is_error());
    assert_eq!((diagnostic.start(), diagnostic.end()), (3, 5));
    assert_eq!(diagnostic.help.as_deref(), Some("try again"));
    assert_eq!(diagnostic.source_name.as_deref(), Some("a.mpl"));
    assert_eq!(Diagnostic::warning("W0001", "meh", Span::default()).severity, Severity::Warning);
}

#[test]
fn test_tree_serializes_with_kind_tags() {
    let output = parse("var x = a + 1\n");
    let json = serde_json::to_value(&output).expect("serializable");

    let stmt = &json["program"]["statements"][0];
    assert_eq!(stmt["kind"], "VariableDefinition");
    assert_eq!(stmt["is_const"], false);
    assert_eq!(stmt["name"]["name"], "x");

    let init = &stmt["init"];
    assert_eq!(init["kind"], "BinaryOperator");
    assert_eq!(init["op"], "Add");
    assert_eq!(init["left"]["kind"], "Identifier");
    assert_eq!(init["left"]["name"], "a");
    assert_eq!(init["right"]["kind"], "NumberLiteral");
    assert_eq!(init["right"]["text"], "1");
    assert_eq!(init["span"]["start"], 8);

    assert_eq!(json["diagnostics"], serde_json::json!([]));
}

#[test]
fn test_node_kinds_use_the_schema_names() {
    let source = "while f(a) {\nreturn \"s\" + 'c'\n}\nif -x {\nbreak\n} else {\ncontinue\n}\nvar m = import ./m\nvar t = true\n";
    let output = parse(source);
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);

    let json = serde_json::to_value(&output.program).expect("serializable");
    let statements = &json["statements"];

    let while_loop = &statements[0];
    assert_eq!(while_loop["kind"], "WhileLoop");
    assert_eq!(while_loop["condition"]["kind"], "FunctionCall");

    let ret = &while_loop["body"]["statements"][0];
    assert_eq!(ret["kind"], "ReturnStatement");
    assert_eq!(ret["value"]["kind"], "BinaryOperator");
    assert_eq!(ret["value"]["left"]["kind"], "StringLiteral");
    assert_eq!(ret["value"]["left"]["decoded_text"], "s");
    assert_eq!(ret["value"]["right"]["kind"], "CharacterLiteral");
    assert_eq!(ret["value"]["right"]["decoded_scalar"], "c");

    let if_stmt = &statements[1];
    assert_eq!(if_stmt["kind"], "IfStatement");
    assert_eq!(if_stmt["condition"]["kind"], "UnaryOperator");
    assert_eq!(if_stmt["then_block"]["statements"][0]["kind"], "BreakStatement");
    assert_eq!(if_stmt["else_block"]["statements"][0]["kind"], "ContinueStatement");

    assert_eq!(statements[2]["init"]["kind"], "ImportExpression");
    assert_eq!(statements[2]["init"]["path"], "./m");
    assert_eq!(statements[3]["init"]["kind"], "BooleanLiteral");
}

#[test]
fn test_diagnostic_serializes() {
    let output = parse("var = 1\n");
    let json = serde_json::to_value(&output.diagnostics[0]).expect("serializable");

    assert_eq!(json["severity"], "error");
    assert_eq!(json["code"], "E0101");
    assert_eq!(json["expected"], serde_json::json!(["identifier"]));
    assert!(json.get("help").is_none());
    assert!(json.get("source_name").is_none());
}

#[test]
fn test_options_load_from_json() {
    let options: ParseOptions =
        serde_json::from_str(r#"{ "max_depth": 8, "source_name": "main.mpl" }"#)
            .expect("valid options");
    assert_eq!(options.max_depth, 8);
    assert_eq!(options.source_name.as_deref(), Some("main.mpl"));
    assert_eq!(options.token_limit, None);

    let options: ParseOptions = serde_json::from_str("{}").expect("valid options");
    assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    assert!(!options.is_cancelled());
}
