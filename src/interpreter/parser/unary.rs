use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::{Expr, PowerOperator, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Span, Token},
        parser::{
            core::{ParseContext, ParseResult, is_tight, parse_expression},
            numeral::collect_numeral,
        },
    },
    number::base::BaseSystem,
    numeral::parse_numeral,
    util::num::{bigint_to_i64_checked, parse_decimal_digits},
};

/// Parses a unary negation or falls through to a primary.
///
/// A `-` written directly against a numeral that contains `:`, `[` or `~`
/// belongs to that numeral (`-1:2`, `-1.3[+-1]`, `-3.~7`), so the sign is
/// read as part of the literal. Any other `-` negates the factor after it,
/// suffixes included: `-2^2` is `-(2^2)`.
///
/// Grammar: `unary := "-" unary | primary`
///
/// # Parameters
/// - `tokens`: Token stream with spans.
/// - `ctx`: Source text and input base.
///
/// # Returns
/// An `Expr::UnaryOp` node, a literal, or the result of `parse_primary`.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>, ctx: &ParseContext<'_>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    if let Some((Token::Minus, span)) = tokens.peek() {
        let position = span.start;

        if signed_numeral_follows(tokens, ctx, span.end) {
            tokens.next();
            trace!(position, "minus binds to numeral");
            return parse_numeral_literal(tokens, ctx, position, true);
        }

        tokens.next();
        let operand = parse_unary(tokens, ctx)?;
        return Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                                  expr: Box::new(operand),
                                  position });
    }

    parse_primary(tokens, ctx)
}

/// Parses a primary expression followed by its suffixes.
///
/// Grammar: `primary := ("(" expression ")" | numeral) suffixes`
///
/// # Errors
/// - `ParseError::Syntax` for a missing `)`, an unexpected token, or an
///   unexpected end of input.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, ctx: &ParseContext<'_>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let inner = parse_expression(tokens, ctx)?;

            match tokens.next() {
                Some((Token::RParen, close)) => parse_suffixes(tokens, ctx, inner, close.end),
                Some((token, span)) => {
                    Err(ParseError::syntax(format!("expected ')' but found '{}'", token.text()), span.start).into())
                },
                None => Err(ctx.unexpected_end("')'")),
            }
        },
        Some((Token::Alnum(_) | Token::Dot, span)) => parse_numeral_literal(tokens, ctx, span.start, false),
        Some((token, span)) => Err(ParseError::syntax(format!("unexpected '{}'", token.text()), span.start).into()),
        None => Err(ctx.unexpected_end("a number or '('")),
    }
}

/// Collects a numeral, interprets it, and applies any suffixes.
fn parse_numeral_literal<'a, I>(tokens: &mut Peekable<I>,
                                ctx: &ParseContext<'_>,
                                position: usize,
                                negative: bool)
                                -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let (text, span) = collect_numeral(tokens, ctx)?;
    let text = if negative { format!("-{text}") } else { text };

    trace!(numeral = text.as_str(), "literal");
    let value = parse_numeral(&text, ctx.base)?;

    parse_suffixes(tokens, ctx, Expr::Literal { value, position }, span.end)
}

/// Applies the postfix suffixes in their fixed order: tight scientific
/// notation, then `!` or `!!`, then one `^n` or `**n`.
///
/// Tight scientific notation binds tighter than a power, so `(2)E1^2` is
/// `((2)E1)^2`.
///
/// Grammar: `suffixes := [sci] ["!" | "!!"] [("^" | "**") integer]`
fn parse_suffixes<'a, I>(tokens: &mut Peekable<I>, ctx: &ParseContext<'_>, expr: Expr, end: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut expr = expr;

    if is_tight(end, tokens.peek())
       && let Some((token, span)) = tokens.peek()
       && is_sci_marker(token, ctx.base)
    {
        let position = span.start;
        let (exponent, _) = parse_sci_exponent(tokens, ctx)?;
        expr = Expr::Scientific { mantissa: Box::new(expr),
                                  radix: ctx.base.base(),
                                  exponent,
                                  position };
    }

    if let Some((token, span)) = tokens.peek()
       && let Some(op) = token_to_factorial(token)
    {
        tokens.next();
        expr = Expr::UnaryOp { op,
                               expr: Box::new(expr),
                               position: span.start };
    }

    if let Some((token, span)) = tokens.peek()
       && let Some(op) = token_to_power(token)
    {
        tokens.next();
        let exponent = parse_integer_exponent(tokens, ctx)?;
        expr = Expr::Power { base: Box::new(expr),
                             op,
                             exponent,
                             position: span.start };
    }

    Ok(expr)
}

/// Parses the exponent of `^` or `**`: an optional `-` and decimal digits,
/// read in base 10 whatever the input base.
fn parse_integer_exponent<'a, I>(tokens: &mut Peekable<I>, ctx: &ParseContext<'_>) -> ParseResult<i64>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let negative = matches!(tokens.peek(), Some((Token::Minus, _)));
    if negative {
        tokens.next();
    }

    match tokens.next() {
        Some((Token::Alnum(digits), span)) => {
            let magnitude = parse_decimal_digits(digits).ok_or_else(|| {
                                ParseError::syntax(format!("exponent '{digits}' is not a base-10 integer"), span.start)
                            })?;
            let magnitude = bigint_to_i64_checked(&magnitude,
                                                  ParseError::Range { message: format!("exponent {digits} is too large") })?;
            Ok(if negative { -magnitude } else { magnitude })
        },
        Some((token, span)) => {
            Err(ParseError::syntax(format!("expected an integer exponent but found '{}'", token.text()), span.start).into())
        },
        None => Err(ctx.unexpected_end("an integer exponent")),
    }
}

/// Returns `true` if `token` opens scientific notation in `base`: an
/// `E`-prefixed run (`E5`, `E`) when `E` is not a digit, otherwise `_^`.
pub(in crate::interpreter::parser) fn is_sci_marker(token: &Token, base: &BaseSystem) -> bool {
    match token {
        Token::Alnum(text) => !base.uses_alternate_exponent() && text.starts_with('E'),
        Token::SciMarker => base.uses_alternate_exponent(),
        _ => false,
    }
}

/// Consumes a scientific marker and its exponent, returning the exponent
/// and the end offset.
///
/// The exponent may follow the marker directly (`E5`, `_^A`) or after a
/// tight sign (`E-5`, `_^-A`). Its digits are read in the input base.
pub(in crate::interpreter::parser) fn parse_sci_exponent<'a, I>(tokens: &mut Peekable<I>,
                                                                ctx: &ParseContext<'_>)
                                                                -> ParseResult<(i64, usize)>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let Some((marker, span)) = tokens.next() else {
        return Err(ctx.unexpected_end("scientific notation"));
    };

    let mut end = span.end;
    let mut negative = false;
    let mut digits = match marker {
        Token::Alnum(text) => text.strip_prefix('E').unwrap_or_default().to_string(),
        _ => String::new(),
    };

    if digits.is_empty() {
        if is_tight(end, tokens.peek())
           && let Some((sign @ (Token::Plus | Token::Minus), span)) = tokens.peek()
        {
            negative = *sign == Token::Minus;
            end = span.end;
            tokens.next();
        }

        match tokens.peek() {
            Some((Token::Alnum(text), span)) if span.start == end => {
                digits.clone_from(text);
                end = span.end;
                tokens.next();
            },
            _ => {
                return Err(ParseError::syntax(format!("missing exponent after '{}'", ctx.base.exponent_marker()), end).into());
            },
        }
    }

    let magnitude = ctx.base.to_decimal(&digits)?;
    let magnitude = bigint_to_i64_checked(&magnitude, ParseError::Range { message: format!("exponent {digits} is too large") })?;

    Ok((if negative { -magnitude } else { magnitude }, end))
}

/// Looks past a `-` ending at `end` for a tight numeral that owns the sign.
fn signed_numeral_follows<'a, I>(tokens: &Peekable<I>, ctx: &ParseContext<'_>, end: usize) -> bool
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();

    if !is_tight(end, lookahead.peek()) || !matches!(lookahead.peek(), Some((Token::Alnum(_) | Token::Dot, _))) {
        return false;
    }

    collect_numeral(&mut lookahead, ctx).is_ok_and(|(text, _)| text.contains([':', '[', '~']))
}

const fn token_to_factorial(token: &Token) -> Option<UnaryOperator> {
    match token {
        Token::Bang => Some(UnaryOperator::Factorial),
        Token::DoubleBang => Some(UnaryOperator::DoubleFactorial),
        _ => None,
    }
}

const fn token_to_power(token: &Token) -> Option<PowerOperator> {
    match token {
        Token::Caret => Some(PowerOperator::Pow),
        Token::StarStar => Some(PowerOperator::MPow),
        _ => None,
    }
}
