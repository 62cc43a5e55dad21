// loxrs-scanner/src/scanner/mod.rs

//! Lexical scanner for Lox source text.
//!
//! This module implements tokenization for the Lox scripting language.
//! Scanning is a single forward pass with one character of lookahead.
//! Lexical errors never abort the pass; they are collected and returned
//! alongside the token sequence, which always ends with an `Eof` token.

pub mod lexer;
pub mod scanner;
pub mod token;

// Re-export main types
pub use lexer::Lexer;
pub use scanner::{ScanOutput, Scanner};
pub use token::{Literal, Token, TokenKind};
