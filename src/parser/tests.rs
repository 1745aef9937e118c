//! Unit tests for the parser module.
//!
//! This module contains tests for recognizing language constructs including:
//! - Imports, classes and member classification
//! - Statements, including the dangling `else`
//! - The expression ladder
//! - Entry class placement and trailing input
//! - Cursor checkpoints and lookahead

use pretty_assertions::assert_eq;

use crate::lexer::{
    interchange::parse_records,
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

use super::{
    diagnostics::{DiagnosticKind, Found},
    parser::{parse, ParseResult, Parser},
};

fn check(source: &str) -> ParseResult {
    parse(tokenize(source))
}

/// Wraps `body` in an entry method of class `Main`.
fn check_body(body: &str) -> ParseResult {
    check(&format!(
        "class Main {{\n  public static void main(String[] args) {{\n{}\n  }}\n}}",
        body
    ))
}

fn assert_accepted(result: &ParseResult) {
    assert!(result.accepted, "rejected with {:?}", result.diagnostics);
    assert!(result.diagnostics.is_empty());
}

fn found(lexeme: &str) -> Found {
    Found::Lexeme(lexeme.to_string())
}

#[test]
fn test_parse_minimal_program() {
    let result = check("class Main { public static void main(String[] args) { } }");

    assert_accepted(&result);
    assert_eq!(result.entry_class.as_deref(), Some("Main"));
}

#[test]
fn test_parse_entry_method_with_trailing_brackets() {
    let result = check("class Main { public static void main(String args[]) { } }");

    assert_accepted(&result);
}

#[test]
fn test_missing_closing_brace() {
    let result = check("class Main {\n  public static void main(String[] args) {\n    int x;");

    assert!(!result.accepted);
    assert_eq!(result.diagnostics.len(), 1);

    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.expected, "}");
    assert_eq!(diagnostic.found, Found::EndOfInput);
    assert_eq!(diagnostic.line, 3);
    assert_eq!(diagnostic.kind, DiagnosticKind::Expectation);
    assert_eq!(
        diagnostic.to_string(),
        "SYNTAX ERROR at line 3: Expected '}' but found end of input"
    );
}

#[test]
fn test_parse_identifier_statements() {
    let result = check_body(
        "print(x);\n\
         x = 1 + 2 * 3;\n\
         x;\n\
         x++;\n\
         --x;\n\
         obj.method(a, b).next();\n\
         this.count = count;\n\
         super.init();\n\
         shift <<= 2;",
    );

    assert_accepted(&result);
}

#[test]
fn test_parse_local_declarations() {
    let result = check_body(
        "int[] arr = new int[10];\n\
         Foo f = new Foo(1, \"two\");\n\
         String s = \"hi\";\n\
         final double d = 1.5, e;\n\
         java.util.List items = new java.util.ArrayList();\n\
         char[][] grid = new char[3][];",
    );

    assert_accepted(&result);
}

#[test]
fn test_statement_failure_reports_furthest_point() {
    let result = check_body("x = a + ;");

    assert!(!result.accepted);
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.expected == "expression" && d.found == found(";")));
}

#[test]
fn test_dangling_else_binds_to_inner_if() {
    let result = check_body(
        "if (a) if (b) x = 1; else x = 2;\n\
         if (a) { x = 1; } else if (b) { x = 2; } else { x = 3; }",
    );

    assert_accepted(&result);
}

#[test]
fn test_second_else_needs_an_inner_if() {
    let nested = check_body("if (a) if (b) x = 1; else x = 2; else x = 3;");
    assert_accepted(&nested);

    let flat = check_body("if (a) x = 1; else x = 2; else x = 3;");
    assert!(!flat.accepted);
    assert_eq!(flat.diagnostics[0].found, found("else"));
}

#[test]
fn test_else_without_if_is_rejected() {
    let result = check_body("else x = 1;");

    assert!(!result.accepted);
    assert!(result.diagnostics.iter().any(|d| d.found == found("else")));
}

#[test]
fn test_parse_precedence_ladder() {
    let result = check_body(
        "x = a || b && c == d < e + f * -g % (h - 1);\n\
         ok = !done && count != 0 || retry >= limit;\n\
         y = -(-z);",
    );

    assert_accepted(&result);
}

#[test]
fn test_binary_operator_needs_right_operand() {
    let result = check_body("x = a * ;");

    assert!(!result.accepted);
    assert_eq!(result.diagnostics[0].expected, "expression");
}

#[test]
fn test_parse_loops() {
    let result = check_body(
        "for (int i = 0; i < 10; i++) { sum = sum + i; }\n\
         for (;;) { break; }\n\
         for (i = 0; ; i = i + 1) continue;\n\
         while (running) { step(); }",
    );

    assert_accepted(&result);
}

#[test]
fn test_parse_jumps_and_returns() {
    let result = check(
        "class Main {\n\
           int size() { return items.length; }\n\
           void stop() { return; }\n\
           void fail() { throw new Error(\"boom\"); }\n\
           public static void main(String[] args) { ; { } }\n\
         }",
    );

    assert_accepted(&result);
}

#[test]
fn test_parse_try_statement() {
    let result = check_body(
        "try { risky(); } catch (IOException e) { log(e); } catch (Exception e) { } finally { close(); }\n\
         try { risky(); } finally { }",
    );

    assert_accepted(&result);
}

#[test]
fn test_try_needs_a_handler() {
    let result = check_body("try { risky(); }\nx = 1;");

    assert!(!result.accepted);
    assert_eq!(result.diagnostics[0].expected, "catch or finally");
    assert_eq!(result.diagnostics[0].found, found("x"));
}

#[test]
fn test_parse_members_and_imports() {
    let source = "import java.util.List;\n\
                  import java.io.*;\n\
                  public class Point extends Base implements Shape, Printable {\n\
                    private int x, y = 0;\n\
                    static final double ORIGIN = 0.0;\n\
                    public Point(int x, final int y) { this.x = x; super.init(); }\n\
                    public int getX() { return x; }\n\
                    abstract void draw();\n\
                    String[] names(int[] ids, Point other) { return null; }\n\
                  }\n\
                  class Main { public static void main(String[] args) { Point p = new Point(1, 2); } }";

    let result = check(source);

    assert_accepted(&result);
    assert_eq!(result.entry_class.as_deref(), Some("Main"));
}

#[test]
fn test_constructor_must_use_class_name() {
    let result = check("class Main {\n  Other() { }\n  public static void main(String[] args) { }\n}");

    assert!(!result.accepted);
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.expected == "member name" && d.found == found("(")));
}

#[test]
fn test_unknown_member_is_reported_at_offending_token() {
    let result = check("class Main {\n  int 5;\n}");

    assert!(!result.accepted);
    assert_eq!(result.diagnostics[0].expected, "member name");
    assert_eq!(result.diagnostics[0].found, found("5"));
    assert_eq!(result.diagnostics[0].line, 2);
}

#[test]
fn test_invalid_token_reaches_parser() {
    let result = check("class Main { $ }");

    assert!(!result.accepted);
    assert!(result.diagnostics.iter().any(|d| d.found == found("$")));
}

#[test]
fn test_missing_entry_class() {
    for source in ["", "class A { }", "class A { void main(String[] args) { } }"] {
        let result = check(source);

        assert!(!result.accepted, "{}", source);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].kind, DiagnosticKind::MissingEntryClass);
        assert_eq!(result.diagnostics[0].found, Found::EndOfInput);
    }
}

#[test]
fn test_second_entry_class_is_rejected() {
    let result = check(
        "class A { public static void main(String[] a) { } }\n\
         class B { public static void main(String[] a) { } }",
    );

    assert!(!result.accepted);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(
        result.diagnostics[0].kind,
        DiagnosticKind::DuplicateEntryClass(String::from("B"))
    );
    assert_eq!(result.diagnostics[0].line, 2);
}

#[test]
fn test_second_entry_method_in_one_class_is_rejected() {
    let result = check(
        "class A {\n\
           public static void main(String[] a) { }\n\
           public static void main(String[] b) { }\n\
         }",
    );

    assert!(!result.accepted);
    assert_eq!(
        result.diagnostics[0].kind,
        DiagnosticKind::DuplicateEntryClass(String::from("A"))
    );
}

#[test]
fn test_entry_class_must_be_last() {
    let result = check("class Main { public static void main(String[] args) { } }\nclass Helper { }");

    assert!(!result.accepted);
    assert_eq!(result.diagnostics.len(), 1);

    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.kind, DiagnosticKind::EntryClassNotLast(String::from("Main")));
    assert_eq!(diagnostic.found, found("Helper"));
    assert_eq!(diagnostic.line, 2);
    assert!(diagnostic.is_structural());
}

#[test]
fn test_trailing_tokens_are_rejected() {
    let result = check("class Main { public static void main(String[] args) { } }\nint x;");

    assert!(!result.accepted);
    assert_eq!(result.diagnostics[0].kind, DiagnosticKind::TrailingTokens);
    assert_eq!(result.diagnostics[0].found, found("int"));
    assert_eq!(result.diagnostics[0].expected, "end of input");
}

#[test]
fn test_parse_from_records() {
    let records = parse_records(
        "<1,Keyword,class>\n<1,Identifier,Main>\n<1,Punctuation,{>\n\
         <2,Keyword,public>\n<2,Keyword,static>\n<2,Keyword,void>\n<2,Identifier,main>\n\
         <2,Punctuation,(>\n<2,Identifier,String>\n<2,Punctuation,[>\n<2,Punctuation,]>\n\
         <2,Identifier,args>\n<2,Punctuation,)>\n<2,Punctuation,{>\n<3,Punctuation,}>\n\
         <4,Punctuation,}>\n",
    );

    let result = parse(records.tokens);

    assert_accepted(&result);
}

#[test]
fn test_parser_appends_eof() {
    let mut parser = Parser::new(vec![]);

    assert!(!parser.has_tokens());
    assert_eq!(parser.advance().value, "EOF");
    assert_eq!(parser.position(), 0);
    assert_eq!(parser.peek(5).value, "EOF");
}

#[test]
fn test_restore_is_idempotent() {
    let mut parser = Parser::new(tokenize("a b c d"));
    parser.advance();

    let checkpoint = parser.mark();
    parser.advance();
    parser.advance();
    assert_eq!(parser.current_token().value, "d");

    parser.restore(checkpoint);
    assert_eq!(parser.current_token().value, "b");
    parser.restore(checkpoint);
    assert_eq!(parser.position(), 1);
}

#[test]
fn test_attempt_restores_on_failure() {
    let mut parser = Parser::new(tokenize("a b c"));

    let result = parser.attempt(|p| {
        p.advance();
        p.expect_punct(";")
    });

    assert!(result.is_err());
    assert_eq!(parser.position(), 0);
    assert_eq!(parser.diagnostics().len(), 1);
    assert_eq!(parser.diagnostics()[0].found, found("b"));

    let kept = parser.attempt(|p| p.expect_identifier("name"));
    assert!(kept.is_ok());
    assert_eq!(parser.position(), 1);
}

#[test]
fn test_look_ahead_never_consumes_or_records() {
    let mut parser = Parser::new(tokenize("a b c"));

    let matched = parser.look_ahead(|p| {
        p.advance();
        p.advance();
        let _ = p.fail("anything");
        p.check_kind(crate::lexer::tokens::TokenKind::Identifier)
    });

    assert!(matched);
    assert_eq!(parser.position(), 0);
    assert!(parser.diagnostics().is_empty());
}

#[test]
fn test_failures_keep_only_furthest_distinct() {
    let mut parser = Parser::new(tokenize("a b c"));

    let _ = parser.fail("early");
    parser.advance();
    let _ = parser.fail("x");
    let _ = parser.fail("x");
    let _ = parser.fail("y");
    parser.advance();

    let expected: Vec<&str> = parser.diagnostics().iter().map(|d| d.expected.as_str()).collect();
    assert_eq!(expected, vec!["x", "y"]);
}

const DEEP: usize = 100_000;

#[test]
fn test_deeply_nested_parentheses() {
    let open = "(".repeat(DEEP);
    let close = ")".repeat(DEEP);

    assert_accepted(&check_body(&format!("x = {}1{};", open, close)));

    let result = check_body(&format!("x = {}1{};", open, &close[1..]));
    assert!(!result.accepted);
    assert!(result.diagnostics.iter().any(|d| d.expected == ")" && d.found == found(";")));
}

#[test]
fn test_deeply_nested_unary_operators() {
    assert_accepted(&check_body(&format!("x = {}done;", "!".repeat(DEEP))));

    let result = check_body(&format!("x = {};", "!".repeat(DEEP)));
    assert!(!result.accepted);
    assert_eq!(result.diagnostics[0].expected, "expression");
}

#[test]
fn test_deeply_nested_blocks() {
    assert_accepted(&check_body(&format!("{}{}", "{".repeat(DEEP), "}".repeat(DEEP))));

    let result = check_body(&"{".repeat(DEEP));
    assert!(!result.accepted);
}

#[test]
fn test_deeply_nested_conditionals() {
    assert_accepted(&check_body(&format!("{}x = 1;", "if (a) ".repeat(DEEP))));

    let result = check_body(&"if (a) ".repeat(DEEP));
    assert!(!result.accepted);
}

#[test]
fn test_tokens_after_inner_eof_are_still_parsed() {
    let mut tokens = tokenize("class Main { public static void main(String[] args) { } }");
    tokens.push(Token {
        kind: TokenKind::Identifier,
        value: String::from("garbage"),
        line: 2,
    });

    let result = parse(tokens);

    assert!(!result.accepted);
    assert_eq!(result.diagnostics[0].kind, DiagnosticKind::TrailingTokens);
    assert_eq!(result.diagnostics[0].found, found("garbage"));
}
