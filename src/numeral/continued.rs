use num_bigint::BigInt;
use num_traits::Signed;

use crate::{
    error::{Error, ParseError},
    number::rational::{Rational, split_sign},
    util::num::parse_decimal_digits,
};

/// Reads the coefficients of a continued fraction written `I.~t1~t2~...~tk`.
///
/// `I` is a signed integer; each `ti` must be a positive integer. The result
/// is `[I, t1, ..., tk]`, ready for [`Rational::from_continued_fraction`].
///
/// # Errors
/// - `ParseError::Format` for a missing `.~`, an empty term list, a trailing
///   `~`, consecutive `~~`, or a term that is not a positive integer.
///
/// # Example
/// ```
/// use exacta::numeral::parse_continued_fraction;
/// use num_bigint::BigInt;
///
/// let terms = parse_continued_fraction("3.~7~15~1~292").unwrap();
/// let expected: Vec<BigInt> = [3, 7, 15, 1, 292].into_iter().map(BigInt::from).collect();
/// assert_eq!(terms, expected);
/// ```
pub fn parse_continued_fraction(text: &str) -> Result<Vec<BigInt>, Error> {
    let Some((head, tail)) = text.split_once(".~") else {
        return Err(ParseError::format(format!("continued fraction '{text}' must start with 'I.~'")).into());
    };

    if tail.is_empty() {
        return Err(ParseError::format(format!("continued fraction '{text}' has no terms after '.~'")).into());
    }

    if tail.ends_with('~') {
        return Err(ParseError::format(format!("continued fraction '{text}' ends with a trailing '~'")).into());
    }

    if tail.contains("~~") {
        return Err(ParseError::format(format!("continued fraction '{text}' has an empty term ('~~')")).into());
    }

    let (negative, digits) = split_sign(head);
    let head = parse_decimal_digits(digits).ok_or_else(|| {
                                               ParseError::format(format!("integer part '{head}' of '{text}' is not an integer"))
                                           })?;

    let mut terms = vec![if negative { -head } else { head }];

    for (index, term) in tail.split('~').enumerate() {
        let value = parse_decimal_digits(term).ok_or_else(|| {
                                                  ParseError::format(format!("term {} ('{term}') of '{text}' is not a positive integer",
                                                                             index + 1))
                                              })?;

        if !value.is_positive() {
            return Err(ParseError::format(format!("term {} of '{text}' must be positive, found 0", index + 1)).into());
        }

        terms.push(value);
    }

    Ok(terms)
}

/// Continued-fraction sub-grammar for decimal scalars.
pub(crate) fn continued_fraction_scalar(text: &str) -> Option<Result<Rational, Error>> {
    if !text.contains('~') {
        return None;
    }

    Some(parse_continued_fraction(text).and_then(|terms| Rational::from_continued_fraction(&terms)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn format_error(text: &str) -> bool {
        parse_continued_fraction(text).is_err_and(|e| e.kind() == ErrorKind::Format)
    }

    #[test]
    fn reads_signed_head_and_positive_terms() {
        let terms = parse_continued_fraction("-3.~7~2").unwrap();
        assert_eq!(terms, vec![BigInt::from(-3), BigInt::from(7), BigInt::from(2)]);
    }

    #[test]
    fn rejects_each_malformation() {
        assert!(format_error("3~7"));
        assert!(format_error("3.~"));
        assert!(format_error("3.~7~"));
        assert!(format_error("3.~7~~2"));
        assert!(format_error("3.~0"));
        assert!(format_error("3.~-2"));
        assert!(format_error("x.~2"));
    }

    #[test]
    fn folds_to_an_exact_fraction() {
        let value = continued_fraction_scalar("3.~7~15~1~292").unwrap().unwrap();
        assert_eq!(value, Rational::new(103_993, 33_102).unwrap());
        assert!(continued_fraction_scalar("3.14").is_none());
    }
}
