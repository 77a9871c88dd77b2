use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Span, Token},
        parser::{
            core::{ParseContext, ParseResult},
            unary::{is_sci_marker, parse_sci_exponent, parse_unary},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with spans.
/// - `ctx`: Source text and input base.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, ctx: &ParseContext<'_>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut left = parse_multiplicative(tokens, ctx)?;
    loop {
        if let Some((token, span)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, ctx)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: span.start };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, plus scientific notation
/// written with a space before the marker (`3 E2`, `1A _^2`), which scales
/// everything to its left within the term.
///
/// A `/` only reaches this level when it is not part of a fraction literal,
/// so `12/ 3` and `12 / 3` divide while `12/3` is one numeral.
///
/// The rule is: `multiplicative := unary (("*" | "/" | sci) unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with spans.
/// - `ctx`: Source text and input base.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, ctx: &ParseContext<'_>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut left = parse_unary(tokens, ctx)?;
    loop {
        if let Some((token, span)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_unary(tokens, ctx)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: span.start };
            continue;
        }

        if let Some((token, span)) = tokens.peek()
           && is_sci_marker(token, ctx.base)
        {
            let position = span.start;
            let (exponent, _) = parse_sci_exponent(tokens, ctx)?;
            left = Expr::Scientific { mantissa: Box::new(left),
                                      radix: ctx.base.base(),
                                      exponent,
                                      position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to the arithmetic operator it denotes, if any.
const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
