use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer literals
/// - parenthesized expressions
///
/// This function dispatches to a specialized parsing function depending on
/// the leading token.
///
/// Grammar:
/// ```text
///     primary := literal
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        (Token::Number(_), _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (token, offset) => Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                             offset: *offset, }),
    }
}

/// Parses an integer literal.
///
/// Converts the token's digit string to an `i64`. Literals are unsigned in
/// the grammar, so the conversion can only fail when the value exceeds
/// `i64::MAX`; such literals are rejected rather than wrapped or saturated.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a `Number` token.
///
/// # Returns
/// An [`Expr::Number`] leaf, or `ParseError::LiteralTooLarge` for a literal
/// outside the representable range.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, offset) = tokens.peek().unwrap();
    match token {
        Token::Number(text) => {
            let value = text.parse::<i64>()
                            .map_err(|_| ParseError::LiteralTooLarge { offset: *offset })?;
            tokens.next();
            Ok(Expr::Number { value })
        },
        token => Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                   offset: *offset, }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form: `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen` at the offset of the
/// unmatched `(`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, offset) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { offset }),
    }
}
