// loxrs-scanner/tests/scan_programs.rs

use loxrs_scanner::{scan, scan_file, LexErrorKind, Literal, TokenKind};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn scan_fibonacci_program() {
    let source = r#"// Naive recursive fibonacci.
fun fib(n) {
  if (n <= 1) return n;
  return fib(n - 2) + fib(n - 1);
}

var i = 0;
while (i < 10) {
  i = i + 1;
}
"#;

    let output = scan(source);
    assert!(!output.has_errors());

    // The comment line vanishes; the first token is the declaration below it.
    let first = &output.tokens[0];
    assert_eq!(first.kind, TokenKind::Fun);
    assert_eq!(first.line, 2);

    let eof = output.tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.line, 1 + source.matches('\n').count());

    let kind_count = |kind: TokenKind| output.tokens.iter().filter(|t| t.kind == kind).count();
    assert_eq!(kind_count(TokenKind::Fun), 1);
    assert_eq!(kind_count(TokenKind::Return), 2);
    assert_eq!(kind_count(TokenKind::While), 1);
    assert_eq!(kind_count(TokenKind::LessEqual), 1);
    assert_eq!(kind_count(TokenKind::Less), 1);
    assert_eq!(kind_count(TokenKind::Eof), 1);

    // fib appears as a plain identifier throughout.
    let fib_tokens = output
        .tokens
        .iter()
        .filter(|t| t.lexeme == "fib")
        .collect::<Vec<_>>();
    assert_eq!(fib_tokens.len(), 3);
    assert!(fib_tokens.iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn scan_class_hierarchy_program() {
    let source = r#"class Brunch < Breakfast {
  init(meat, bread, drink) {
    super.init(meat, bread);
    this.drink = drink;
  }

  describe() {
    if (this.drink == nil) return "dry brunch";
    return "brunch with " + this.drink;
  }
}
"#;

    let output = scan(source);
    assert!(!output.has_errors());

    let kinds: Vec<TokenKind> = output.tokens.iter().map(|t| t.kind).collect();
    assert!(kinds.contains(&TokenKind::Class));
    assert!(kinds.contains(&TokenKind::Super));
    assert!(kinds.contains(&TokenKind::This));
    assert!(kinds.contains(&TokenKind::Nil));
    assert!(kinds.contains(&TokenKind::EqualEqual));

    // The inheritance marker scans as a plain less-than.
    assert_eq!(output.tokens[2].kind, TokenKind::Less);

    let strings: Vec<&loxrs_scanner::Token> = output
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .collect();
    assert_eq!(strings.len(), 2);
    assert_eq!(
        strings[0].literal,
        Some(Literal::String("dry brunch".to_string()))
    );
}

#[test]
fn scan_comment_heavy_source() {
    let source = "var a = 1; // trailing comment\n/* block\n/* nested */\nstill comment */ var b = 2;\n";
    let output = scan(source);

    assert!(!output.has_errors());

    let var_lines: Vec<usize> = output
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Var)
        .map(|t| t.line)
        .collect();
    assert_eq!(var_lines, vec![1, 4]);

    let numbers: Vec<f64> = output
        .tokens
        .iter()
        .filter_map(|t| match t.literal {
            Some(Literal::Number(n)) => Some(n),
            _ => None,
        })
        .collect();
    assert_eq!(numbers, vec![1.0, 2.0]);
}

#[test]
fn scan_recovers_and_reports_every_error() {
    let source = "var ok = 1;\nvar bad = @;\nvar s = \"unterminated";
    let output = scan(source);

    // Both errors are reported and everything scannable still comes out.
    assert_eq!(output.errors.len(), 2);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnexpectedCharacter('@'));
    assert_eq!(output.errors[0].line, 2);
    assert_eq!(output.errors[1].kind, LexErrorKind::UnterminatedString);
    assert_eq!(output.errors[1].line, 3);

    let var_count = output
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Var)
        .count();
    assert_eq!(var_count, 3);
    assert_eq!(output.tokens.last().unwrap().kind, TokenKind::Eof);
}

#[test]
fn scan_file_matches_scan_of_contents() -> std::io::Result<()> {
    let source = "fun greet(name) {\n  return \"hello \" + name;\n}\n";

    let mut file = NamedTempFile::new()?;
    file.write_all(source.as_bytes())?;

    let from_file = scan_file(file.path())?;
    assert_eq!(from_file, scan(source));
    assert!(!from_file.has_errors());

    Ok(())
}
