use num_traits::Zero;

use crate::{
    error::{Error, ParseError},
    number::{
        interval::RationalInterval,
        rational::{Rational, split_sign},
        value::Value,
    },
    util::num::{is_decimal_digits, parse_decimal_digits, pow10},
};

/// Parses a standalone decimal string.
///
/// With a `#` marking the repeating cycle (`I.F#R`) the result is the exact
/// fraction: `0.#3` is `1/3`, `733.#3` is `2200/3`. Without one, the decimal
/// is read as a measurement rounded to its last written digit and the result
/// is the interval of half a unit either side: `1.23` is `[1.225, 1.235]`.
///
/// # Errors
/// - `ParseError::Format` for anything other than an optionally signed
///   decimal with at most one `#`.
///
/// # Example
/// ```
/// use exacta::numeral::parse_repeating_decimal;
///
/// assert_eq!(parse_repeating_decimal("733.#3").unwrap().to_string(), "2200/3");
/// assert_eq!(parse_repeating_decimal("1.23").unwrap().to_string(), "49/40:247/200");
/// ```
pub fn parse_repeating_decimal(text: &str) -> Result<Value, Error> {
    if text.contains('#') {
        return repeating_to_rational(text).map(Value::Rational);
    }

    let value = Rational::from_decimal_str(text)?;
    let fraction_digits = text.split_once('.').map_or(0, |(_, fraction)| fraction.len());
    let scale = u32::try_from(fraction_digits + 1).map_err(|_| ParseError::format("too many fractional digits"))?;
    let half_unit = Rational::new(5, pow10(scale))?;

    Ok(Value::Interval(RationalInterval::new(value.subtract(&half_unit), value.add(&half_unit))))
}

/// Repeating-decimal sub-grammar for decimal scalars.
pub(crate) fn repeating_scalar(text: &str) -> Option<Result<Rational, Error>> {
    text.contains('#').then(|| repeating_to_rational(text))
}

/// Converts `I.F#R` to `(IFR - IF) / (10^len(F) * (10^len(R) - 1))`.
/// An all-zero cycle terminates, so `I.F#0` is just `I.F`.
fn repeating_to_rational(text: &str) -> Result<Rational, Error> {
    let malformed = || ParseError::format(format!("'{text}' is not a repeating decimal (expected I.F#R)"));

    let (negative, unsigned) = split_sign(text);
    let (whole, rest) = unsigned.split_once('.').ok_or_else(malformed)?;
    let (fixed, cycle) = rest.split_once('#').ok_or_else(malformed)?;

    let digits_ok = |s: &str| s.is_empty() || is_decimal_digits(s);
    if !digits_ok(whole) || !digits_ok(fixed) || !is_decimal_digits(cycle) {
        return Err(malformed().into());
    }

    let cycle_value = parse_decimal_digits(cycle).ok_or_else(malformed)?;
    let fixed_len = u32::try_from(fixed.len()).map_err(|_| malformed())?;

    let value = if cycle_value.is_zero() {
        Rational::from_decimal_str(&format!("{whole}.{fixed}"))?
    } else {
        let cycle_len = u32::try_from(cycle.len()).map_err(|_| malformed())?;
        let with_cycle = parse_decimal_digits(&format!("0{whole}{fixed}{cycle}")).ok_or_else(malformed)?;
        let without_cycle = parse_decimal_digits(&format!("0{whole}{fixed}")).ok_or_else(malformed)?;

        Rational::new(with_cycle - without_cycle, pow10(fixed_len) * (pow10(cycle_len) - 1u32))?
    };

    Ok(if negative { value.negate() } else { value })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::error::ErrorKind;

    fn exact(text: &str) -> Rational {
        repeating_to_rational(text).unwrap()
    }

    #[test]
    fn known_cycles() {
        assert_eq!(exact("0.#3"), Rational::new(1, 3).unwrap());
        assert_eq!(exact("733.#3"), Rational::new(2200, 3).unwrap());
        assert_eq!(exact("0.1#6"), Rational::new(1, 6).unwrap());
        assert_eq!(exact("0.#142857"), Rational::new(1, 7).unwrap());
        assert_eq!(exact("-1.#9"), Rational::from_integer(-2));
        assert_eq!(exact(".#3"), Rational::new(1, 3).unwrap());
    }

    #[test]
    fn zero_cycle_terminates() {
        assert_eq!(exact("1.25#0"), Rational::new(5, 4).unwrap());
        assert_eq!(exact("2.#00"), Rational::from_integer(2));
    }

    #[test]
    fn malformed_cycles_are_format_errors() {
        for text in ["1#3", "1.#", "1.2#3#4", "1.a#3", "1.2#3.4"] {
            assert_eq!(repeating_to_rational(text).unwrap_err().kind(),
                       ErrorKind::Format,
                       "{text}");
        }
    }

    #[test]
    fn unmarked_decimals_are_half_unit_intervals() {
        assert_eq!(parse_repeating_decimal("1.23").unwrap().to_string(),
                   "49/40:247/200");
        assert_eq!(parse_repeating_decimal("5").unwrap().to_string(), "9/2:11/2");
        assert_eq!(parse_repeating_decimal("-0.5").unwrap().to_string(),
                   "-11/20:-9/20");
    }

    proptest! {
        /// Property: rendering a fraction as a repeating decimal and parsing it
        /// back gives the same fraction.
        #[test]
        fn repeating_round_trip(n in -100_000i64..100_000, d in 1i64..2_000) {
            let value = Rational::new(n, d).unwrap();
            let rendered = value.to_repeating_decimal();
            prop_assume!(rendered.contains('#'));
            prop_assert_eq!(repeating_to_rational(&rendered).unwrap(), value);
        }
    }
}
