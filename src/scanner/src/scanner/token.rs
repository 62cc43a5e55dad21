// loxrs-scanner/src/scanner/token.rs

//! Token types and structures for Lox lexical analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A token in a Lox source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The raw text of the token
    pub lexeme: String,
    /// Literal value, present for string and number tokens only
    pub literal: Option<Literal>,
    /// Line number (1-based) the token started on
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, literal: Option<Literal>, line: usize) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{:?}({}) {}", self.kind, self.lexeme, literal),
            None => write!(f, "{:?}({})", self.kind, self.lexeme),
        }
    }
}

/// The literal value carried by string and number tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    String(String),
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(value) => write!(f, "{}", value),
            Literal::Number(value) => write!(f, "{}", value),
        }
    }
}

/// Kinds of tokens that can appear in Lox source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Left brace {
    LeftBrace,
    /// Right brace }
    RightBrace,
    /// Comma separator (,)
    Comma,
    /// Property access dot (.)
    Dot,
    /// Minus operator (-)
    Minus,
    /// Plus operator (+)
    Plus,
    /// Statement terminator (;)
    Semicolon,
    /// Division operator (/)
    Slash,
    /// Multiplication operator (*)
    Star,
    /// Logical not (!)
    Bang,
    /// Inequality operator (!=)
    BangEqual,
    /// Assignment operator (=)
    Equal,
    /// Equality operator (==)
    EqualEqual,
    /// Greater-than operator (>)
    Greater,
    /// Greater-or-equal operator (>=)
    GreaterEqual,
    /// Less-than operator (<)
    Less,
    /// Less-or-equal operator (<=)
    LessEqual,
    /// Identifier (variable, function, and class names)
    Identifier,
    /// String literal
    String,
    /// Number literal
    Number,
    /// Keyword `and`
    And,
    /// Keyword `class`
    Class,
    /// Keyword `else`
    Else,
    /// Keyword `false`
    False,
    /// Keyword `fun`
    Fun,
    /// Keyword `for`
    For,
    /// Keyword `if`
    If,
    /// Keyword `nil`
    Nil,
    /// Keyword `or`
    Or,
    /// Keyword `return`
    Return,
    /// Keyword `super`
    Super,
    /// Keyword `this`
    This,
    /// Keyword `true`
    True,
    /// Keyword `var`
    Var,
    /// Keyword `while`
    While,
    /// End of file
    Eof,
}

impl TokenKind {
    /// Look up the keyword kind for an identifier-shaped lexeme.
    ///
    /// The lookup is exact and case-sensitive; anything that is not a
    /// reserved word returns `None` and stays an identifier.
    pub fn keyword(lexeme: &str) -> Option<TokenKind> {
        let kind = match lexeme {
            "and" => TokenKind::And,
            "class" => TokenKind::Class,
            "else" => TokenKind::Else,
            "false" => TokenKind::False,
            "fun" => TokenKind::Fun,
            "for" => TokenKind::For,
            "if" => TokenKind::If,
            "nil" => TokenKind::Nil,
            "or" => TokenKind::Or,
            "return" => TokenKind::Return,
            "super" => TokenKind::Super,
            "this" => TokenKind::This,
            "true" => TokenKind::True,
            "var" => TokenKind::Var,
            "while" => TokenKind::While,
            _ => return None,
        };
        Some(kind)
    }
}
