use std::ops::Range;

use logos::Logos;

use crate::error::ParseError;

/// Byte range of a token in the source expression.
pub type Span = Range<usize>;

/// Represents a lexical token in the source input.
///
/// Digits and letters are not interpreted here: which characters are digits
/// depends on the radix in force, so every run of ASCII letters and digits is
/// one `Alnum` token and the parser decides what it means. Whitespace is
/// skipped, but token spans are kept so the parser can tell `1/2` (a
/// fraction) from `1 / 2` (a division).
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// A run of ASCII digits and letters, such as `12`, `FF`, `E5` or `1E`.
    #[regex(r"[0-9A-Za-z]+", |lex| lex.slice().to_string())]
    Alnum(String),
    /// `.`
    #[token(".")]
    Dot,
    /// `#`
    #[token("#")]
    Hash,
    /// `~`
    #[token("~")]
    Tilde,
    /// `:`
    #[token(":")]
    Colon,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    StarStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `_^`, the scientific-notation marker for alphabets that contain `E`.
    #[token("_^")]
    SciMarker,
    /// `!`
    #[token("!")]
    Bang,
    /// `!!`
    #[token("!!")]
    DoubleBang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// The source text the token stands for.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Alnum(text) => text,
            Self::Dot => ".",
            Self::Hash => "#",
            Self::Tilde => "~",
            Self::Colon => ":",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comma => ",",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::StarStar => "**",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::SciMarker => "_^",
            Self::Bang => "!",
            Self::DoubleBang => "!!",
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }
}

/// Splits an expression into spanned tokens.
///
/// # Errors
/// - `ParseError::Syntax` at the first character no token matches.
///
/// # Example
/// ```
/// use exacta::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1/2 + 3").unwrap();
/// assert_eq!(tokens[1], (Token::Slash, 1..2));
/// assert_eq!(tokens[3], (Token::Plus, 4..5));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span()));
        } else {
            return Err(ParseError::syntax(format!("unexpected character '{}'", lexer.slice()), lexer.span().start));
        }
    }

    Ok(tokens)
}
