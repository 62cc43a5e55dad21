// loxrs-scanner/src/lib.rs

//! A Rust-native lexical analyzer for the Lox scripting language.
//!
//! This library provides functionality to:
//! - Tokenize Lox source text in a single forward pass with one character
//!   of lookahead
//! - Classify punctuation, one- and two-character operators, string and
//!   number literals, identifiers, and keywords
//! - Track 1-based line numbers through code, strings, and comments
//! - Handle line comments and arbitrarily nested block comments
//! - Recover from lexical errors and report all of them alongside the
//!   token sequence

pub mod error;
pub mod scanner;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub use error::{LexError, LexErrorKind};
pub use scanner::{Literal, ScanOutput, Scanner, Token, TokenKind};

/// Scan Lox source text into tokens.
///
/// # Examples
///
/// ```
/// use loxrs_scanner::TokenKind;
///
/// let output = loxrs_scanner::scan("var x = 1;");
/// assert!(!output.has_errors());
/// assert_eq!(output.tokens.first().map(|t| t.kind), Some(TokenKind::Var));
/// assert_eq!(output.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
/// ```
pub fn scan(source: &str) -> ScanOutput {
    let scanner = Scanner::new(source);
    scanner.scan_tokens()
}

/// Scan a Lox source file into tokens.
///
/// # Examples
///
/// ```no_run
/// fn main() -> std::io::Result<()> {
///     let output = loxrs_scanner::scan_file("script.lox")?;
///     for token in &output.tokens {
///         println!("{}", token);
///     }
///     Ok(())
/// }
/// ```
pub fn scan_file<P: AsRef<Path>>(path: P) -> io::Result<ScanOutput> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(scan(&contents))
}
