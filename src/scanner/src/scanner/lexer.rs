// loxrs-scanner/src/scanner/lexer.rs

//! Low-level lexical analysis for Lox source text.

use super::token::{Literal, Token, TokenKind};
use crate::error::LexError;

/// Low-level lexer for Lox source text.
///
/// The lexer walks the input in a single forward pass with one character of
/// lookahead. Newlines are counted centrally in `advance`, so line tracking
/// stays correct inside strings and block comments too.
pub struct Lexer {
    input: Vec<char>,
    start: usize,
    current: usize,
    line: usize,
    errors: Vec<LexError>,
}

impl Lexer {
    /// Create a new lexer for the given input.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            errors: Vec::new(),
        }
    }

    /// Scan the next token.
    ///
    /// Returns `None` when the consumed input produced no token: whitespace,
    /// comments, or erroneous input. Lexical errors are recorded on the lexer
    /// and scanning can continue with the next call.
    pub fn scan_token(&mut self) -> Option<Token> {
        self.start = self.current;
        let start_line = self.line;

        let c = self.advance()?;

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '!' => {
                if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                }
            }
            '=' => {
                if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }
            '<' => {
                if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            '/' => return self.scan_slash(start_line),
            ' ' | '\r' | '\t' | '\n' => return None,
            '"' => return self.scan_string(start_line),
            _ if c.is_ascii_digit() => return Some(self.scan_number(start_line)),
            _ if c.is_ascii_alphabetic() || c == '_' => {
                return Some(self.scan_identifier(start_line));
            }
            _ => {
                self.errors
                    .push(LexError::unexpected_character(c, start_line));
                return None;
            }
        };

        let lexeme: String = self.input[self.start..self.current].iter().collect();
        Some(Token::new(kind, lexeme, None, start_line))
    }

    /// A `/` is a division operator, a line comment, or a block comment.
    fn scan_slash(&mut self, start_line: usize) -> Option<Token> {
        if self.match_char('/') {
            // Consume until end of line; the newline itself is left for the
            // next scan.
            while self.peek() != Some('\n') && !self.is_at_end() {
                self.advance();
            }
            None
        } else if self.match_char('*') {
            self.scan_block_comment();
            None
        } else {
            let lexeme: String = self.input[self.start..self.current].iter().collect();
            Some(Token::new(TokenKind::Slash, lexeme, None, start_line))
        }
    }

    /// Consume a block comment body, honoring arbitrary nesting.
    ///
    /// The opening `/*` has already been consumed. Reaching end of input with
    /// open nesting records an unterminated comment error at the line reached
    /// and leaves the cursor exactly at the end of input.
    fn scan_block_comment(&mut self) {
        let mut depth: usize = 1;

        while depth > 0 {
            match self.advance() {
                Some('/') if self.peek() == Some('*') => {
                    self.advance();
                    depth += 1;
                }
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    depth -= 1;
                }
                Some(_) => {}
                None => {
                    self.errors.push(LexError::unterminated_comment(self.line));
                    return;
                }
            }
        }
    }

    fn scan_string(&mut self, start_line: usize) -> Option<Token> {
        while self.peek() != Some('"') && !self.is_at_end() {
            self.advance();
        }

        if self.is_at_end() {
            self.errors.push(LexError::unterminated_string(start_line));
            return None;
        }

        self.advance(); // consume closing '"'

        // The literal is the raw text between the quotes.
        let value: String = self.input[self.start + 1..self.current - 1].iter().collect();
        let lexeme: String = self.input[self.start..self.current].iter().collect();
        Some(Token::new(
            TokenKind::String,
            lexeme,
            Some(Literal::String(value)),
            start_line,
        ))
    }

    fn scan_number(&mut self, start_line: usize) -> Token {
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }

        // A fractional part only counts when a digit follows the dot.
        if self.peek() == Some('.') && self.peek_next().map_or(false, |c| c.is_ascii_digit()) {
            self.advance(); // consume '.'

            while self.peek().map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme: String = self.input[self.start..self.current].iter().collect();
        let value = lexeme
            .parse::<f64>()
            .expect("number lexemes contain only digits and at most one interior dot");
        Token::new(
            TokenKind::Number,
            lexeme,
            Some(Literal::Number(value)),
            start_line,
        )
    }

    fn scan_identifier(&mut self, start_line: usize) -> Token {
        while self
            .peek()
            .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let lexeme: String = self.input[self.start..self.current].iter().collect();
        let kind = TokenKind::keyword(&lexeme).unwrap_or(TokenKind::Identifier);
        Token::new(kind, lexeme, None, start_line)
    }

    /// Consume the next character if it matches `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance(&mut self) -> Option<char> {
        if self.is_at_end() {
            return None;
        }

        let c = self.input[self.current];
        self.current += 1;

        if c == '\n' {
            self.line += 1;
        }

        Some(c)
    }

    fn peek(&self) -> Option<char> {
        if self.is_at_end() {
            None
        } else {
            Some(self.input[self.current])
        }
    }

    fn peek_next(&self) -> Option<char> {
        let pos = self.current + 1;
        if pos >= self.input.len() {
            None
        } else {
            Some(self.input[pos])
        }
    }

    /// Whether the cursor has reached the end of input.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.input.len()
    }

    /// The current 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Consume the lexer, yielding the errors recorded during the scan.
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }
}
