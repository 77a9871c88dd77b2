use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{
        lexer::{Span, Token},
        parser::binary::parse_additive,
    },
    number::base::BaseSystem,
};

pub type ParseResult<T> = Result<T, Error>;

/// What the grammar needs besides the tokens: the source text (for error
/// messages) and the radix for bare numerals.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'s> {
    /// The expression being parsed.
    pub source: &'s str,
    /// Radix for numerals without an explicit `[base]`.
    pub base:   &'s BaseSystem,
}

impl<'s> ParseContext<'s> {
    /// Bundles the source and input base.
    #[must_use]
    pub const fn new(source: &'s str, base: &'s BaseSystem) -> Self {
        Self { source,
               base }
    }

    /// A syntax error for running out of tokens.
    #[must_use]
    pub fn unexpected_end(&self, expected: &str) -> Error {
        ParseError::syntax(format!("unexpected end of expression, expected {expected}"), self.source.len()).into()
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, span)` pairs.
/// - `ctx`: Source text and input base.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, ctx: &ParseContext<'_>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_additive(tokens, ctx)
}

/// Parses a complete token stream into one expression.
///
/// # Errors
/// - `ParseError::Syntax` naming the unconsumed suffix if tokens remain
///   after a full expression.
/// - Any error raised while parsing the expression or its numerals.
///
/// # Example
/// ```
/// use exacta::{
///     interpreter::{
///         lexer::tokenize,
///         parser::core::{ParseContext, parse_tokens},
///     },
///     number::base::BaseSystem,
/// };
///
/// let source = "1 + 2)";
/// let tokens = tokenize(source).unwrap();
/// let base = BaseSystem::decimal();
/// assert!(parse_tokens(&tokens, &ParseContext::new(source, &base)).is_err());
/// ```
pub fn parse_tokens(tokens: &[(Token, Span)], ctx: &ParseContext<'_>) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, ctx)?;

    if let Some((_, span)) = iter.peek() {
        let rest = ctx.source.get(span.start..).unwrap_or_default();
        trace!(rest, "unconsumed input");
        return Err(ParseError::syntax(format!("unexpected input '{rest}'"), span.start).into());
    }

    Ok(expr)
}

/// Returns `true` if `next` starts exactly where `end` stops, with no
/// whitespace between.
pub(in crate::interpreter::parser) fn is_tight(end: usize, next: Option<&&(Token, Span)>) -> bool {
    next.is_some_and(|(_, span)| span.start == end)
}
