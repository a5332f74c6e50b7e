//! Token navigation and diagnostic recording for the [`super::Parser`].

use super::Parser;
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Advances the lookahead window by one token.
    pub(super) fn next_token(&mut self) {
        std::mem::swap(&mut self.current_token, &mut self.peek_token);
        self.peek_token = self.lexer.next_token();
    }

    pub(super) fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub(super) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// If `peek_token` matches `kind`, advances and returns `true`.
    /// Otherwise records a diagnostic and returns `false`, leaving the
    /// caller to abandon the statement/expression under construction.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let message = format!(
            "Expected next token to be {}, got {} instead",
            expected, self.peek_token.kind
        );
        log::warn!("{message}");
        self.errors.push(message);
    }

    pub(super) fn no_prefix_parse_fn_error(&mut self, kind: TokenKind) {
        let message = format!("No prefix parse function for '{kind}' found");
        log::warn!("{message}");
        self.errors.push(message);
    }
}
