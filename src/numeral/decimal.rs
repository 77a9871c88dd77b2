use num_bigint::BigInt;

use crate::{
    error::{ArithmeticError, Error, ParseError},
    number::{
        interval::RationalInterval,
        rational::{Rational, split_sign},
        value::{Provenance, Tagged, Value},
    },
    numeral::{continued, first_success, repeating},
    util::num::{bigint_to_i64_checked, parse_decimal_digits},
};

/// Parses a bare decimal numeral: an interval `a:b` or a single scalar.
///
/// Scalars are exact. Each interval endpoint is a scalar, and the endpoints
/// are ordered, so `3:1` is `1:3`.
///
/// # Errors
/// - `ArithmeticError::UndefinedOperation` for an endpoint that is itself
///   an interval (`1:2:3`).
/// - Whatever the scalar grammar reports for a malformed endpoint.
///
/// # Example
/// ```
/// use exacta::numeral::decimal::parse_decimal_numeral;
///
/// assert_eq!(parse_decimal_numeral("0.5:1/4").unwrap().value.to_string(), "1/4:1/2");
/// assert_eq!(parse_decimal_numeral("1..1/2").unwrap().value.to_string(), "3/2");
/// ```
pub fn parse_decimal_numeral(text: &str) -> Result<Tagged, Error> {
    first_success::<Tagged>(text,
                            &[&|t: &str| parse_interval(t),
                              &|t: &str| Some(parse_decimal_scalar(t).map(|r| Tagged::plain(Value::Rational(r))))])
}

fn parse_interval(text: &str) -> Option<Result<Tagged, Error>> {
    let (low, high) = text.split_once(':')?;

    Some(decimal_interval(text, low, high))
}

fn decimal_interval(text: &str, low: &str, high: &str) -> Result<Tagged, Error> {
    if high.contains(':') {
        return Err(ArithmeticError::undefined(format!("nested interval in '{text}'")).into());
    }

    let interval = RationalInterval::new(parse_decimal_scalar(low)?, parse_decimal_scalar(high)?);
    Ok(Tagged::new(Value::Interval(interval), Provenance::ExplicitInterval))
}

/// Parses one exact decimal scalar in any of the single-value notations:
/// continued fraction, repeating decimal, mixed number, fraction, or plain
/// decimal, each optionally followed by `E<exponent>`.
///
/// # Errors
/// - `ParseError::InvalidDigit` for a letter other than the `E` marker.
/// - `ParseError::Format` for malformed structure.
/// - `ArithmeticError::DivisionByZero` for a zero denominator.
pub fn parse_decimal_scalar(text: &str) -> Result<Rational, Error> {
    if let Some((mantissa, exponent)) = text.split_once('E') {
        return parse_decimal_scalar(mantissa)?.e(parse_decimal_exponent(exponent)?);
    }

    if let Some(c) = text.chars().find(char::is_ascii_alphabetic) {
        return Err(ParseError::InvalidDigit { digit: c, base: 10 }.into());
    }

    first_success::<Rational>(text,
                              &[&|t: &str| continued::continued_fraction_scalar(t),
                                &|t: &str| repeating::repeating_scalar(t),
                                &|t: &str| parse_mixed(t),
                                &|t: &str| parse_fraction(t),
                                &|t: &str| Some(Rational::from_decimal_str(t))])
}

/// Reads a signed base-10 integer exponent such as `3`, `-12` or `+4`.
pub(crate) fn parse_decimal_exponent(text: &str) -> Result<i64, Error> {
    let (negative, digits) = split_sign(text);
    let magnitude = parse_decimal_digits(digits).ok_or_else(|| ParseError::format(format!("invalid exponent '{text}'")))?;
    let magnitude = bigint_to_i64_checked(&magnitude, ParseError::Range { message: format!("exponent {text} is too large") })?;

    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_mixed(text: &str) -> Option<Result<Rational, Error>> {
    let (negative, unsigned) = split_sign(text);
    let (whole, fraction) = unsigned.split_once("..")?;

    Some(mixed_number(text, whole, fraction).map(|value| if negative { value.negate() } else { value }))
}

fn mixed_number(text: &str, whole: &str, fraction: &str) -> Result<Rational, Error> {
    if !fraction.contains('/') {
        return Err(ParseError::format(format!("mixed number '{text}' needs a fraction after '..'")).into());
    }

    let whole = parse_unsigned_integer(whole, text)?;
    Ok(Rational::from_integer(whole).add(&parse_unsigned_fraction(fraction, text)?))
}

fn parse_fraction(text: &str) -> Option<Result<Rational, Error>> {
    if !text.contains('/') {
        return None;
    }

    let (negative, unsigned) = split_sign(text);

    Some(parse_unsigned_fraction(unsigned, text).map(|value| if negative { value.negate() } else { value }))
}

/// `n/d` with plain decimal numerator and denominator.
fn parse_unsigned_fraction(text: &str, numeral: &str) -> Result<Rational, Error> {
    let Some((numerator, denominator)) = text.split_once('/') else {
        return Err(ParseError::format(format!("'{numeral}' is missing a '/'")).into());
    };

    if denominator.contains('/') {
        return Err(ParseError::format(format!("'{numeral}' has more than one '/'")).into());
    }

    let numerator = unsigned_decimal(numerator, numeral)?;
    let denominator = unsigned_decimal(denominator, numeral)?;

    if denominator.is_zero() {
        return Err(ArithmeticError::division_by_zero(format!("'{numeral}' has a zero denominator")).into());
    }

    numerator.divide(&denominator)
}

fn unsigned_decimal(text: &str, numeral: &str) -> Result<Rational, Error> {
    if text.starts_with(['+', '-']) {
        return Err(ParseError::format(format!("misplaced sign in '{numeral}'")).into());
    }

    Rational::from_decimal_str(text)
}

fn parse_unsigned_integer(text: &str, numeral: &str) -> Result<BigInt, Error> {
    Ok(parse_decimal_digits(text).ok_or_else(|| ParseError::format(format!("'{text}' in '{numeral}' is not a whole number")))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn scalar(text: &str) -> String {
        parse_decimal_scalar(text).unwrap().to_string()
    }

    #[test]
    fn plain_decimals_are_exact() {
        assert_eq!(scalar("1.23"), "123/100");
        assert_eq!(scalar("-0.5"), "-1/2");
        assert_eq!(scalar("42"), "42");
    }

    #[test]
    fn fractions_and_mixed_numbers() {
        assert_eq!(scalar("4/2"), "2");
        assert_eq!(scalar("-3/6"), "-1/2");
        assert_eq!(scalar("1.5/3"), "1/2");
        assert_eq!(scalar("2..3/4"), "11/4");
        assert_eq!(scalar("-2..3/4"), "-11/4");
        assert_eq!(parse_decimal_scalar("1/0").unwrap_err().kind(),
                   ErrorKind::DivisionByZero);
        assert_eq!(parse_decimal_scalar("1/2/3").unwrap_err().kind(), ErrorKind::Format);
        assert_eq!(parse_decimal_scalar("1..2").unwrap_err().kind(), ErrorKind::Format);
    }

    #[test]
    fn scientific_notation_scales_by_ten() {
        assert_eq!(scalar("1.5E2"), "150");
        assert_eq!(scalar("15E-3"), "3/200");
        assert_eq!(scalar("1/2E1"), "5");
        assert_eq!(parse_decimal_scalar("1E").unwrap_err().kind(), ErrorKind::Format);
    }

    #[test]
    fn letters_are_invalid_digits() {
        let err = parse_decimal_scalar("12a").unwrap_err();
        assert_eq!(err,
                   Error::from(ParseError::InvalidDigit { digit: 'a', base: 10 }));
    }

    #[test]
    fn repeating_and_continued_forms_dispatch() {
        assert_eq!(scalar("0.#3"), "1/3");
        assert_eq!(scalar("3.~7~16"), "355/113");
        assert_eq!(parse_decimal_scalar("3.~7~").unwrap_err().kind(), ErrorKind::Format);
    }

    #[test]
    fn intervals_order_endpoints_and_reject_nesting() {
        let tagged = parse_decimal_numeral("3:1").unwrap();
        assert_eq!(tagged.value.to_string(), "1:3");
        assert_eq!(tagged.provenance, Provenance::ExplicitInterval);
        assert_eq!(parse_decimal_numeral("-1:-2").unwrap().value.to_string(), "-2:-1");
        assert_eq!(parse_decimal_numeral("1:2:3").unwrap_err().kind(),
                   ErrorKind::UndefinedOperation);
        assert_eq!(parse_decimal_numeral("0.#3:1/2").unwrap().value.to_string(), "1/3:1/2");
    }
}
