// loxrs-scanner/src/scanner/scanner.rs

//! Core scanner implementation producing the full token sequence.

use super::lexer::Lexer;
use super::token::{Token, TokenKind};
use crate::error::LexError;

/// Lexical scanner for Lox source text.
pub struct Scanner {
    source: String,
}

/// Everything a scan produces: the token sequence and the lexical errors
/// collected along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl ScanOutput {
    /// Whether the scan reported any lexical errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }

    /// Scan the whole source into tokens.
    ///
    /// Lexical errors never abort the scan; the offending input is skipped
    /// and reported in the output next to the tokens. The token sequence
    /// always ends with exactly one `Eof` token carrying the line reached at
    /// the end of input.
    pub fn scan_tokens(&self) -> ScanOutput {
        let mut lexer = Lexer::new(&self.source);
        let mut tokens = Vec::new();

        while !lexer.is_at_end() {
            if let Some(token) = lexer.scan_token() {
                tokens.push(token);
            }
        }

        tokens.push(Token::new(TokenKind::Eof, String::new(), None, lexer.line()));

        ScanOutput {
            tokens,
            errors: lexer.into_errors(),
        }
    }
}
