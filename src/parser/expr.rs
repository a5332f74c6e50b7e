//! Expression parsing: the Pratt core.
//!
//! Every function here is a plain `fn(&mut Parser) -> Option<Expression>`
//! (prefix) or `fn(&mut Parser, Expression) -> Option<Expression>` (infix),
//! registered against a [`crate::token::TokenKind`] in [`super::Parser::new`].
//! Returning `None` means a diagnostic was already recorded and the caller
//! should abandon the expression under construction.

use super::Parser;
use crate::ast::{BlockStatement, Expression};
use crate::token::TokenKind;

/// Operator precedence, ascending: tighter-binding operators compare
/// greater. `LOWEST < EQUALS < LESS_GREATER < SUM < PRODUCT < PREFIX < CALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Slash | TokenKind::Asterisk => Precedence::Product,
        TokenKind::Lparen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

impl<'a> Parser<'a> {
    pub(super) fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token.kind)
    }

    fn current_precedence(&self) -> Precedence {
        precedence_of(self.current_token.kind)
    }

    /// The core Pratt loop: a prefix handler produces `left`, then infix
    /// handlers fold further tokens into it as long as the next operator
    /// binds tighter than `precedence`.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_parse_fns.get(&self.current_token.kind).copied() else {
            self.no_prefix_parse_fn_error(self.current_token.kind);
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_parse_fns.get(&self.peek_token.kind).copied() else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    pub(super) fn parse_block_statement(&mut self) -> BlockStatement {
        self.next_token();
        let mut statements = Vec::new();

        while !self.current_token_is(TokenKind::Rbrace) && !self.current_token_is(TokenKind::Eof)
        {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { statements }
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(TokenKind::Rparen) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(self.current_token.literal.clone());

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(self.current_token.literal.clone());
        }

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        Some(parameters)
    }

    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_token_is(TokenKind::Rparen) {
            self.next_token();
            return Some(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        Some(arguments)
    }
}

pub(super) fn parse_identifier(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::Identifier(parser.current_token.literal.clone()))
}

pub(super) fn parse_integer_literal(parser: &mut Parser) -> Option<Expression> {
    let literal = &parser.current_token.literal;
    match literal.parse::<i64>() {
        Ok(value) => Some(Expression::IntegerLiteral(value)),
        Err(_) => {
            let message = format!("Could not parse {literal} as integer");
            log::warn!("{message}");
            parser.errors.push(message);
            None
        }
    }
}

pub(super) fn parse_string_literal(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::StringLiteral(
        parser.current_token.literal.clone(),
    ))
}

pub(super) fn parse_boolean(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::BooleanLiteral(
        parser.current_token_is(TokenKind::True),
    ))
}

pub(super) fn parse_prefix_expression(parser: &mut Parser) -> Option<Expression> {
    let operator = parser.current_token.literal.clone();
    parser.next_token();
    let right = parser.parse_expression(Precedence::Prefix)?;
    Some(Expression::Prefix {
        operator,
        right: Box::new(right),
    })
}

pub(super) fn parse_infix_expression(parser: &mut Parser, left: Expression) -> Option<Expression> {
    let operator = parser.current_token.literal.clone();
    let precedence = parser.current_precedence();
    parser.next_token();
    let right = parser.parse_expression(precedence)?;
    Some(Expression::Infix {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

pub(super) fn parse_grouped_expression(parser: &mut Parser) -> Option<Expression> {
    parser.next_token();
    let expression = parser.parse_expression(Precedence::Lowest)?;
    if !parser.expect_peek(TokenKind::Rparen) {
        return None;
    }
    Some(expression)
}

pub(super) fn parse_if_expression(parser: &mut Parser) -> Option<Expression> {
    if !parser.expect_peek(TokenKind::Lparen) {
        return None;
    }
    parser.next_token();
    let condition = parser.parse_expression(Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::Rparen) {
        return None;
    }
    if !parser.expect_peek(TokenKind::Lbrace) {
        return None;
    }
    let consequence = parser.parse_block_statement();

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.next_token();
        if !parser.expect_peek(TokenKind::Lbrace) {
            return None;
        }
        Some(parser.parse_block_statement())
    } else {
        None
    };

    Some(Expression::If {
        condition: Box::new(condition),
        consequence,
        alternative,
    })
}

pub(super) fn parse_function_literal(parser: &mut Parser) -> Option<Expression> {
    if !parser.expect_peek(TokenKind::Lparen) {
        return None;
    }
    let parameters = parser.parse_function_parameters()?;

    if !parser.expect_peek(TokenKind::Lbrace) {
        return None;
    }
    let body = parser.parse_block_statement();

    Some(Expression::FunctionLiteral { parameters, body })
}

pub(super) fn parse_call_expression(parser: &mut Parser, function: Expression) -> Option<Expression> {
    let arguments = parser.parse_call_arguments()?;
    Some(Expression::Call {
        function: Box::new(function),
        arguments,
    })
}
