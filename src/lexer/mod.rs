//! Lexical analyzer for the Monkey programming language.
//!
//! This module provides the [`Lexer`] struct which converts source code text
//! into a stream of [`Token`]s for the parser, one token at a time.
//!
//! # Overview
//!
//! The lexer is a pure state machine over `(position, one-character
//! lookahead)`. It never looks back and never fails: any character it can't
//! classify becomes a `TokenKind::Illegal` token rather than an error, so
//! `next_token` always returns a token and is infallible.
//!
//! # Supported tokens
//!
//! - **Keywords**: `fn`, `let`, `true`, `false`, `if`, `else`, `return`
//! - **Identifiers**: `[A-Za-z_]+`, looked up against the keyword table
//! - **Integer literals**: `[0-9]+`, stored as raw text (parsed to `i64` later)
//! - **String literals**: `"..."`, raw content between the quotes, no escapes
//! - **Operators**: `= + - ! * / < > == !=`
//! - **Delimiters**: `, ; ( ) { }`
//!
//! # Module structure
//!
//! - [`cursor`] - Character navigation (`read_char`/`peek_char`) and the
//!   identifier/number/string scanners
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Consumes the token stream produced here

mod cursor;

#[cfg(test)]
mod tests;

use crate::token::{Token, TokenKind};

/// Tokenizes Monkey source code one token at a time.
///
/// The `'a` lifetime ties the lexer to the input string slice it was built
/// from, so no copy of the source is needed to scan it.
pub struct Lexer<'a> {
    input: &'a str,
    /// Byte offset of `ch` in `input`.
    position: usize,
    /// Byte offset of the next character to read.
    read_position: usize,
    /// The character currently under the cursor, or `None` at end of input.
    ch: Option<char>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input,
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    /// Returns the next token in the input.
    ///
    /// Stable at end of input: once the cursor has passed the last
    /// character, every subsequent call returns another `Eof` token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            Some('=') => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            Some('+') => Token::new(TokenKind::Plus, "+"),
            Some('-') => Token::new(TokenKind::Minus, "-"),
            Some('!') => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            Some('*') => Token::new(TokenKind::Asterisk, "*"),
            Some('/') => Token::new(TokenKind::Slash, "/"),
            Some('<') => Token::new(TokenKind::Lt, "<"),
            Some('>') => Token::new(TokenKind::Gt, ">"),
            Some(',') => Token::new(TokenKind::Comma, ","),
            Some(';') => Token::new(TokenKind::Semicolon, ";"),
            Some('(') => Token::new(TokenKind::Lparen, "("),
            Some(')') => Token::new(TokenKind::Rparen, ")"),
            Some('{') => Token::new(TokenKind::Lbrace, "{"),
            Some('}') => Token::new(TokenKind::Rbrace, "}"),
            Some('"') => Token::new(TokenKind::String, self.read_string()),
            Some(c) if is_letter(c) => {
                let literal = self.read_identifier();
                let kind = TokenKind::lookup_ident(&literal);
                return self.emit(Token::new(kind, literal));
            }
            Some(c) if c.is_ascii_digit() => {
                let literal = self.read_number();
                return self.emit(Token::new(TokenKind::Int, literal));
            }
            Some(c) => Token::new(TokenKind::Illegal, c.to_string()),
            None => Token::new(TokenKind::Eof, ""),
        };

        self.read_char();
        self.emit(token)
    }

    fn emit(&self, token: Token) -> Token {
        log::trace!("token: {:?} {:?}", token.kind, token.literal);
        token
    }

    /// Tokenizes the entire input, returning every token up to and including
    /// `Eof`. Convenience built on top of [`Lexer::next_token`]; not used by
    /// the parser, which pulls tokens one at a time.
    pub fn tokenize_all(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                return tokens;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(c) if c.is_whitespace()) {
            self.read_char();
        }
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}
