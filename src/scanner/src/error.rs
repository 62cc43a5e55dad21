// loxrs-scanner/src/error.rs

//! Error types for Lox lexical analysis.
//!
//! Lexical errors never abort a scan. The lexer records every error it
//! encounters and keeps going, so a single pass reports all of them.

use thiserror::Error;

/// The kinds of errors the scanner can detect.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexErrorKind {
    /// A character that starts no token
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),
    /// A string literal whose closing quote never arrives
    #[error("Unterminated string.")]
    UnterminatedString,
    /// A block comment whose nesting never returns to zero
    #[error("Unterminated comment.")]
    UnterminatedComment,
}

/// A lexical error and the source line it was reported at.
///
/// For unterminated strings the line is the line of the opening quote; for
/// unterminated comments it is the line reached at end of input; for
/// unexpected characters it is the line of the offending character.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// Create a new unexpected character error.
    pub fn unexpected_character(character: char, line: usize) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter(character), line)
    }

    /// Create a new unterminated string error.
    pub fn unterminated_string(line: usize) -> Self {
        Self::new(LexErrorKind::UnterminatedString, line)
    }

    /// Create a new unterminated comment error.
    pub fn unterminated_comment(line: usize) -> Self {
        Self::new(LexErrorKind::UnterminatedComment, line)
    }
}
