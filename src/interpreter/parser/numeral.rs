use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Span, Token},
        parser::core::{ParseContext, ParseResult, is_tight},
    },
};

/// Collects the text of one numeral starting at the next token.
///
/// A numeral is the longest run of tokens written with no whitespace
/// between them, restricted to the characters numerals use:
/// - digits and letters, `.`, `#`, `~`, `:` and `_^` always join;
/// - `/` joins only when a digit or `.` follows it directly, and at most once
///   per interval endpoint, so `12/ 3` divides and `1/2/3` is `(1/2)/3`;
/// - `+` or `-` joins only right after `:`, `_^`, or a letter run ending in
///   the `E` marker (`1:-2`, `1E-3`);
/// - `[` joins together with everything up to its `]`, which ends the
///   numeral.
///
/// # Errors
/// - `ParseError::Syntax` for an unclosed `[`, or when the next token cannot
///   start a numeral.
///
/// # Returns
/// The numeral text and its span in the source.
pub fn collect_numeral<'a, I>(tokens: &mut Peekable<I>, ctx: &ParseContext<'_>) -> ParseResult<(String, Span)>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let Some((first, span)) = tokens.next() else {
        return Err(ctx.unexpected_end("a number"));
    };

    if !matches!(first, Token::Alnum(_) | Token::Dot) {
        return Err(ParseError::syntax(format!("expected a number but found '{}'", first.text()), span.start).into());
    }

    let start = span.start;
    let mut end = span.end;
    let mut text = first.text().to_string();
    let mut slash_seen = false;
    let e_marker = !ctx.base.uses_alternate_exponent();

    while is_tight(end, tokens.peek())
          && let Some((token, span)) = tokens.peek()
    {
        let joins = match token {
            Token::Alnum(_) | Token::Dot | Token::Hash | Token::Tilde | Token::SciMarker => true,
            Token::Colon => {
                slash_seen = false;
                true
            },
            Token::Slash => !slash_seen && starts_digits(tokens, span.end),
            Token::Plus | Token::Minus => {
                text.ends_with(':') || text.ends_with("_^") || (e_marker && text.ends_with('E'))
            },
            Token::LBracket => {
                let close = collect_bracket(tokens, &mut text, ctx)?;
                return Ok((text, start..close));
            },
            _ => false,
        };

        if !joins {
            break;
        }

        if matches!(token, Token::Slash) {
            slash_seen = true;
        }

        text.push_str(token.text());
        end = span.end;
        tokens.next();
    }

    Ok((text, start..end))
}

/// Appends `[ ... ]` to `text` and returns the end offset of the `]`.
fn collect_bracket<'a, I>(tokens: &mut Peekable<I>, text: &mut String, ctx: &ParseContext<'_>) -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let open = tokens.peek().map_or(ctx.source.len(), |(_, span)| span.start);

    for (token, span) in tokens.by_ref() {
        text.push_str(token.text());

        if *token == Token::RBracket {
            return Ok(span.end);
        }
    }

    Err(ParseError::syntax("missing closing ']'", open).into())
}

/// Returns `true` if the token after the next one is a digit run or `.`
/// starting exactly at `end`.
fn starts_digits<'a, I>(tokens: &Peekable<I>, end: usize) -> bool
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();

    is_tight(end, lookahead.peek()) && matches!(lookahead.peek(), Some((Token::Alnum(_) | Token::Dot, _)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{interpreter::lexer::tokenize, number::base::BaseSystem};

    fn collect(source: &str, base: &BaseSystem) -> (String, Span) {
        let tokens = tokenize(source).unwrap();
        let mut iter = tokens.iter().peekable();
        collect_numeral(&mut iter, &ParseContext::new(source, base)).unwrap()
    }

    fn decimal(source: &str) -> String {
        collect(source, &BaseSystem::decimal()).0
    }

    #[test]
    fn whitespace_ends_a_numeral() {
        assert_eq!(decimal("12/3"), "12/3");
        assert_eq!(decimal("12/ 3"), "12");
        assert_eq!(decimal("12 /3"), "12");
        assert_eq!(decimal("1.5 E2"), "1.5");
    }

    #[test]
    fn one_slash_per_endpoint() {
        assert_eq!(decimal("1/2/3"), "1/2");
        assert_eq!(decimal("1/2:3/4"), "1/2:3/4");
        assert_eq!(decimal("1..1/2"), "1..1/2");
    }

    #[test]
    fn signs_join_only_after_markers() {
        assert_eq!(decimal("1:-2"), "1:-2");
        assert_eq!(decimal("1.5E-3"), "1.5E-3");
        assert_eq!(decimal("1-2"), "1");
        assert_eq!(collect("1E-2", &BaseSystem::hexadecimal()).0, "1E");
        assert_eq!(collect("1_^-2", &BaseSystem::hexadecimal()).0, "1_^-2");
    }

    #[test]
    fn brackets_close_the_numeral() {
        assert_eq!(collect("1.3[+- 1]^2", &BaseSystem::decimal()),
                   ("1.3[+-1]".to_string(), 0..9));
        assert_eq!(decimal("FF[16]"), "FF[16]");
    }

    #[test]
    fn unclosed_bracket_is_a_syntax_error() {
        let source = "1.3[+-1";
        let tokens = tokenize(source).unwrap();
        let base = BaseSystem::decimal();
        let err = collect_numeral(&mut tokens.iter().peekable(), &ParseContext::new(source, &base)).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Syntax);
    }
}
