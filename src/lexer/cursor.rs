//! Character navigation and multi-character scanners for the [`super::Lexer`].

use super::{Lexer, is_letter};

impl<'a> Lexer<'a> {
    /// Advances the cursor by one character.
    pub(super) fn read_char(&mut self) {
        self.ch = self.input[self.read_position..].chars().next();
        self.position = self.read_position;
        if let Some(c) = self.ch {
            self.read_position += c.len_utf8();
        }
    }

    /// Looks at the next character without consuming it.
    pub(super) fn peek_char(&self) -> Option<char> {
        self.input[self.read_position..].chars().next()
    }

    /// Consumes `[A-Za-z_]+` starting at the cursor and returns it.
    ///
    /// Leaves the cursor on the first character that isn't part of the
    /// identifier; the outer dispatch in `next_token` does not advance past
    /// it (consistent with `read_number`).
    pub(super) fn read_identifier(&mut self) -> String {
        let start = self.position;
        while matches!(self.ch, Some(c) if is_letter(c)) {
            self.read_char();
        }
        self.input[start..self.position].to_string()
    }

    /// Consumes `[0-9]+` starting at the cursor and returns it.
    pub(super) fn read_number(&mut self) -> String {
        let start = self.position;
        while matches!(self.ch, Some(c) if c.is_ascii_digit()) {
            self.read_char();
        }
        self.input[start..self.position].to_string()
    }

    /// Consumes the content of a string literal, up to the next `"` or EOF.
    ///
    /// The opening quote is already under the cursor on entry; the closing
    /// quote (if found) is consumed before returning, matching
    /// `original_source`'s `Lexer::_readString`. No escape sequences are
    /// interpreted.
    pub(super) fn read_string(&mut self) -> String {
        let start = self.position + 1;
        loop {
            self.read_char();
            match self.ch {
                Some('"') | None => break,
                _ => {}
            }
        }
        let text = self.input[start..self.position].to_string();
        text
    }
}
