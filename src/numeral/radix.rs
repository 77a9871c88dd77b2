use num_bigint::BigInt;
use num_traits::Zero;

use crate::{
    error::{ArithmeticError, Error, ParseError},
    number::{
        base::BaseSystem,
        integer::Integer,
        interval::RationalInterval,
        rational::{Rational, split_sign},
        value::{Provenance, Tagged, Value},
    },
    numeral::first_success,
    util::num::{abs_i64_to_u32_checked, bigint_to_i64_checked, radix_pow},
};

/// Parses a literal whose digits all belong to `base`.
///
/// Supported shapes, each with an optional leading `-`:
/// - integer `FF`
/// - fraction `n/d` and mixed number `w..n/d`, tagged as explicit fractions
/// - point `i.f`, worth `i + f / base^len(f)`
/// - interval `a:b`, endpoints ordered and tagged as an explicit interval
/// - scientific `mE x` (or `m_^x` when `E` is a digit of `base`), worth
///   `m * base^x` with `x` also read in `base`
///
/// # Errors
/// - `ParseError::InvalidDigit` for a character outside the alphabet.
/// - `ParseError::Format` for empty digit groups or misplaced separators.
/// - `ArithmeticError::DivisionByZero` for a zero denominator.
/// - `ArithmeticError::UndefinedOperation` for a nested interval.
///
/// # Example
/// ```
/// use exacta::{number::base::BaseSystem, numeral::parse_base_literal};
///
/// let hex = BaseSystem::hexadecimal();
/// assert_eq!(parse_base_literal("1.8", &hex).unwrap().value.to_string(), "3/2");
/// assert_eq!(parse_base_literal("10_^2", &hex).unwrap().value.to_string(), "4096");
/// ```
pub fn parse_base_literal(text: &str, base: &BaseSystem) -> Result<Tagged, Error> {
    let Some((low, high)) = text.split_once(':') else {
        return parse_base_scalar(text, base);
    };

    if high.contains(':') {
        return Err(ArithmeticError::undefined(format!("nested interval in '{text}'")).into());
    }

    let low = endpoint(low, text, base)?;
    let high = endpoint(high, text, base)?;

    Ok(Tagged::new(Value::Interval(RationalInterval::new(low, high)), Provenance::ExplicitInterval))
}

fn endpoint(text: &str, literal: &str, base: &BaseSystem) -> Result<Rational, Error> {
    let tagged = parse_base_scalar(text, base)?;

    tagged.value
          .to_rational()
          .ok_or_else(|| ArithmeticError::undefined(format!("nested interval in '{literal}'")).into())
}

fn parse_base_scalar(text: &str, base: &BaseSystem) -> Result<Tagged, Error> {
    if let Some((mantissa, exponent)) = text.split_once(base.exponent_marker()) {
        let mantissa = parse_base_scalar(mantissa, base)?.value
                                                         .to_rational()
                                                         .ok_or_else(|| ParseError::format(format!("'{text}' has no mantissa")))?;
        let exponent = parse_base_exponent(exponent, base)?;
        return Ok(Tagged::plain(Value::Rational(mantissa.scale_by_power_of(base.base(), exponent)?)));
    }

    let (negative, unsigned) = split_sign(text);
    let tagged = first_success::<Tagged>(unsigned,
                                         &[&|t: &str| mixed(t, base),
                                           &|t: &str| fraction(t, base),
                                           &|t: &str| point(t, base),
                                           &|t: &str| Some(integer(t, base))])?;

    Ok(if negative {
        Tagged::new(tagged.value.negate(), tagged.provenance)
    } else {
        tagged
    })
}

fn parse_base_exponent(text: &str, base: &BaseSystem) -> Result<i64, Error> {
    let (negative, digits) = split_sign(text);
    let magnitude = base.to_decimal(digits)?;
    let magnitude = bigint_to_i64_checked(&magnitude, ParseError::Range { message: format!("exponent '{text}' is too large") })?;

    Ok(if negative { -magnitude } else { magnitude })
}

fn mixed(text: &str, base: &BaseSystem) -> Option<Result<Tagged, Error>> {
    let (whole, fraction) = text.split_once("..")?;

    Some(mixed_number(whole, fraction, text, base))
}

fn mixed_number(whole: &str, fraction: &str, text: &str, base: &BaseSystem) -> Result<Tagged, Error> {
    if !fraction.contains('/') {
        return Err(ParseError::format(format!("mixed number '{text}' needs a fraction after '..'")).into());
    }

    let value = Rational::from_integer(digits(whole, text, base)?).add(&ratio(fraction, text, base)?);
    Ok(Tagged::new(Value::Rational(value), Provenance::ExplicitFraction))
}

fn fraction(text: &str, base: &BaseSystem) -> Option<Result<Tagged, Error>> {
    text.contains('/')
        .then(|| ratio(text, text, base).map(|r| Tagged::new(Value::Rational(r), Provenance::ExplicitFraction)))
}

fn ratio(text: &str, literal: &str, base: &BaseSystem) -> Result<Rational, Error> {
    let Some((numerator, denominator)) = text.split_once('/') else {
        return Err(ParseError::format(format!("'{literal}' is missing a '/'")).into());
    };

    if denominator.contains('/') {
        return Err(ParseError::format(format!("'{literal}' has more than one '/'")).into());
    }

    let denominator = digits(denominator, literal, base)?;
    if denominator.is_zero() {
        return Err(ArithmeticError::division_by_zero(format!("'{literal}' has a zero denominator")).into());
    }

    Rational::new(digits(numerator, literal, base)?, denominator)
}

fn point(text: &str, base: &BaseSystem) -> Option<Result<Tagged, Error>> {
    let (whole, fraction) = text.split_once('.')?;

    Some(point_value(whole, fraction, text, base))
}

fn point_value(whole: &str, fraction: &str, text: &str, base: &BaseSystem) -> Result<Tagged, Error> {
    if whole.is_empty() && fraction.is_empty() {
        return Err(ParseError::format(format!("'{text}' has no digits")).into());
    }

    let whole = if whole.is_empty() { BigInt::zero() } else { digits(whole, text, base)? };
    if fraction.is_empty() {
        return Ok(Tagged::plain(Value::Rational(Rational::from_integer(whole))));
    }

    let places = i64::try_from(fraction.len()).map_err(|_| ParseError::format(format!("'{text}' is too long")))?;
    let scale = radix_pow(base.base(),
                          abs_i64_to_u32_checked(places, ParseError::format(format!("'{text}' is too long")))?);
    let value = Rational::new(whole * &scale + digits(fraction, text, base)?, scale)?;

    Ok(Tagged::plain(Value::Rational(value)))
}

fn integer(text: &str, base: &BaseSystem) -> Result<Tagged, Error> {
    Ok(Tagged::plain(Value::Integer(Integer::new(digits(text, text, base)?))))
}

/// An unsigned digit group.
fn digits(group: &str, literal: &str, base: &BaseSystem) -> Result<BigInt, Error> {
    if group.is_empty() || group.starts_with(['+', '-']) {
        return Err(ParseError::format(format!("'{literal}' has an empty or signed digit group")).into());
    }

    base.to_decimal(group)
}
