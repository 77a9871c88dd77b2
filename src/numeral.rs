use tracing::trace;

use crate::{
    error::{Error, ParseError},
    number::{
        base::BaseSystem,
        value::{Provenance, Tagged, Value},
    },
    util::num::is_decimal_digits,
};

/// Continued fractions: `I.~t1~t2~...~tk`.
pub mod continued;
/// Plain decimal numerals and the structures built from them: intervals
/// (`a:b`), mixed numbers (`w..n/d`), fractions (`n/d`) and decimal
/// scientific notation (`1.5E-3`).
pub mod decimal;
/// Literals in an arbitrary radix, written `digits[base]` or bare when a
/// non-decimal input base is active.
pub mod radix;
/// Repeating decimals: `I.F#R`.
pub mod repeating;
/// Decimal uncertainty notation: `base[lo,hi]`, `base[+-d]`, `base[+p,-n]`.
pub mod uncertainty;

pub use continued::parse_continued_fraction;
pub use radix::parse_base_literal;
pub use repeating::parse_repeating_decimal;
pub use uncertainty::parse_decimal_uncertainty;

/// A sub-grammar attempt. `None` means the text does not use this notation
/// at all; `Some(Err(_))` means it does but is malformed.
pub type SubParser<'p, T> = &'p dyn Fn(&str) -> Option<Result<T, Error>>;

/// Runs `parsers` in order and returns the first success.
///
/// When no parser succeeds, the first failure is reported, since it comes
/// from the most specific notation the text matched. If no parser applied at
/// all the text is not a numeral.
pub(crate) fn first_success<T>(text: &str, parsers: &[SubParser<'_, T>]) -> Result<T, Error> {
    let mut first_error = None;

    for parser in parsers {
        match parser(text) {
            Some(Ok(value)) => return Ok(value),
            Some(Err(error)) => {
                trace!(numeral = text, %error, "sub-grammar failed, trying the next one");
                first_error.get_or_insert(error);
            },
            None => {},
        }
    }

    Err(first_error.unwrap_or_else(|| ParseError::format(format!("'{text}' is not a recognized numeral")).into()))
}

/// Interprets one complete numeral as written in an expression.
///
/// A trailing `[...]` selects the notation: all-digit content is a radix
/// (`FF[16]`), anything else is decimal uncertainty (`1.3[+-1]`). Without
/// brackets the numeral is read in `input_base`.
///
/// # Errors
/// - `ParseError::Range` for a radix outside `2..=62`.
/// - `ParseError::Format` / `ParseError::InvalidDigit` for malformed digits.
/// - `ArithmeticError` for zero denominators or nested intervals.
///
/// # Example
/// ```
/// use exacta::{number::base::BaseSystem, numeral::parse_numeral};
///
/// let decimal = BaseSystem::decimal();
/// assert_eq!(parse_numeral("FF[16]", &decimal).unwrap().value.to_string(), "255");
/// assert_eq!(parse_numeral("1.3[+-1]", &decimal).unwrap().value.to_string(),
///            "129/100:131/100");
/// ```
pub fn parse_numeral(text: &str, input_base: &BaseSystem) -> Result<Tagged, Error> {
    if let Some(body) = text.strip_suffix(']') {
        let Some((literal, spec)) = body.rsplit_once('[') else {
            return Err(ParseError::format(format!("unmatched ']' in '{text}'")).into());
        };

        if is_decimal_digits(spec) {
            trace!(literal, radix = spec, "base-prefixed literal");
            let radix = spec.parse::<u32>()
                            .map_err(|_| ParseError::Range { message: format!("base {spec} is outside 2..=62") })?;
            return parse_base_literal(literal, &BaseSystem::from_base(radix)?);
        }

        trace!(literal, spec, "uncertainty literal");
        let interval = parse_decimal_uncertainty(literal, spec)?;
        return Ok(Tagged::new(Value::Interval(interval), Provenance::ExplicitInterval));
    }

    if input_base.is_decimal() {
        decimal::parse_decimal_numeral(text)
    } else {
        trace!(numeral = text, base = input_base.base(), "bare literal in input base");
        parse_base_literal(text, input_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn parse(text: &str) -> Result<Tagged, Error> {
        parse_numeral(text, &BaseSystem::decimal())
    }

    #[test]
    fn brackets_choose_between_radix_and_uncertainty() {
        assert_eq!(parse("11[2]").unwrap().value.to_string(), "3");
        assert_eq!(parse("1.23[56,67]").unwrap().value.to_string(),
                   "3089/2500:12367/10000");
        assert_eq!(parse("1.23[56,67]").unwrap().provenance,
                   Provenance::ExplicitInterval);
    }

    #[test]
    fn radix_outside_range_is_a_range_error() {
        assert_eq!(parse("1[1]").unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(parse("1[63]").unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(parse("1[99999999999]").unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn bare_numerals_follow_the_input_base() {
        let hex = BaseSystem::hexadecimal();
        assert_eq!(parse_numeral("ff", &hex).unwrap().value.to_string(), "255");
        assert_eq!(parse("ff").unwrap_err().kind(), ErrorKind::InvalidDigit);
    }

    #[test]
    fn first_success_reports_the_first_failure() {
        let fails: SubParser<'_, i32> = &|_: &str| Some(Err(ParseError::format("first").into()));
        let skips: SubParser<'_, i32> = &|_: &str| None;
        let wins: SubParser<'_, i32> = &|_: &str| Some(Ok(7));

        assert_eq!(first_success("x", &[skips, fails, wins]).unwrap(), 7);
        assert_eq!(first_success("x", &[fails, skips]).unwrap_err(),
                   Error::from(ParseError::format("first")));
        assert_eq!(first_success("x", &[skips]).unwrap_err().kind(), ErrorKind::Format);
    }
}
