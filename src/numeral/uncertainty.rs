use crate::{
    error::{Error, ParseError},
    number::{interval::RationalInterval, rational::Rational},
    numeral::decimal::parse_decimal_scalar,
};

/// Parses decimal uncertainty notation `base[spec]` into an ascending
/// interval.
///
/// Three forms of `spec` are accepted:
/// - Range `lo,hi` (no signs): both digit strings are appended to `base`,
///   so `1.23[56,67]` is `[1.2356, 1.2367]`. When `base` ends in `.` the
///   appended endpoints may use repeating syntax (`0.[1#6,2]`).
/// - Symmetric `+-d` or `-+d`: `d` is an offset one decimal place past the
///   last written digit of `base`, so `1.3[+-1]` is `[1.29, 1.31]`. A bare
///   integer `base` takes the offset unscaled.
/// - Relative `+p,-n` in either order: independent offsets with the same
///   scaling.
///
/// # Errors
/// - `ParseError::Format` for a spec matching none of the forms, range
///   endpoints with unequal integer digit counts after an integer `base`,
///   or a relative spec without exactly one `+` and one `-` offset.
///
/// # Example
/// ```
/// use exacta::numeral::parse_decimal_uncertainty;
///
/// let interval = parse_decimal_uncertainty("1.3", "+-1").unwrap();
/// assert_eq!(interval.to_string(), "129/100:131/100");
/// ```
pub fn parse_decimal_uncertainty(base: &str, spec: &str) -> Result<RationalInterval, Error> {
    let spec: String = spec.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some(offset) = spec.strip_prefix("+-").or_else(|| spec.strip_prefix("-+")) {
        let center = parse_decimal_scalar(base)?;
        let offset = scaled_offset(base, offset)?;
        return Ok(RationalInterval::new(center.subtract(&offset), center.add(&offset)));
    }

    let Some((first, second)) = spec.split_once(',') else {
        return Err(ParseError::format(format!("unrecognized uncertainty '[{spec}]' after '{base}'")).into());
    };

    if spec.contains(['+', '-']) {
        relative(base, first, second)
    } else {
        range(base, first, second)
    }
}

fn range(base: &str, low: &str, high: &str) -> Result<RationalInterval, Error> {
    if low.is_empty() || high.is_empty() {
        return Err(ParseError::format(format!("range uncertainty after '{base}' needs two endpoints")).into());
    }

    if !base.contains('.') {
        let low_digits = integer_digits(low);
        let high_digits = integer_digits(high);
        if low_digits != high_digits {
            return Err(ParseError::format(format!("range endpoints '{low}' ({low_digits} digits) and '{high}' \
                                                   ({high_digits} digits) must have the same number of integer digits"))
                       .into());
        }
    }

    let low = parse_decimal_scalar(&format!("{base}{low}"))?;
    let high = parse_decimal_scalar(&format!("{base}{high}"))?;

    Ok(RationalInterval::new(low, high))
}

fn relative(base: &str, first: &str, second: &str) -> Result<RationalInterval, Error> {
    let (plus, minus) = match (first.strip_prefix('+'), second.strip_prefix('-')) {
        (Some(plus), Some(minus)) => (plus, minus),
        _ => match (second.strip_prefix('+'), first.strip_prefix('-')) {
            (Some(plus), Some(minus)) => (plus, minus),
            _ => {
                return Err(ParseError::format(format!("relative uncertainty '[{first},{second}]' needs exactly one \
                                                       '+' offset and one '-' offset"))
                       .into());
            },
        },
    };

    let center = parse_decimal_scalar(base)?;
    let above = scaled_offset(base, plus)?;
    let below = scaled_offset(base, minus)?;

    Ok(RationalInterval::new(center.subtract(&below), center.add(&above)))
}

/// Parses an unsigned offset and scales it one place past the last
/// fractional digit of `base`.
fn scaled_offset(base: &str, offset: &str) -> Result<Rational, Error> {
    if offset.is_empty() || offset.starts_with(['+', '-']) {
        return Err(ParseError::format(format!("uncertainty offset '{offset}' after '{base}' must be one unsigned number")).into());
    }

    let value = parse_decimal_scalar(offset)?;

    let Some((_, fraction)) = base.split_once('.') else {
        return Ok(value);
    };

    let places = fraction.chars().take_while(char::is_ascii_digit).count() + 1;
    let places = i64::try_from(places).map_err(|_| ParseError::format("too many fractional digits"))?;

    value.e(-places)
}

fn integer_digits(endpoint: &str) -> usize {
    endpoint.split(['.', '#']).next().map_or(0, str::len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn interval(base: &str, spec: &str) -> String {
        parse_decimal_uncertainty(base, spec).unwrap().to_string()
    }

    fn q(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn range_appends_endpoints() {
        let value = parse_decimal_uncertainty("1.23", "56,67").unwrap();
        assert_eq!(value.low(), &q(12356, 10000));
        assert_eq!(value.high(), &q(12367, 10000));
        assert_eq!(interval("1.23", "67,56"), interval("1.23", "56,67"));
        assert_eq!(interval("-1.2", "3,4"), "-31/25:-123/100");
    }

    #[test]
    fn range_after_integer_base_checks_digit_counts() {
        assert_eq!(interval("12", "3,4"), "123:124");
        assert_eq!(parse_decimal_uncertainty("12", "3,45").unwrap_err().kind(),
                   ErrorKind::Format);
    }

    #[test]
    fn anchored_range_accepts_repeating_endpoints() {
        assert_eq!(interval("0.", "#3,5"), "1/3:1/2");
        assert_eq!(interval("0.", "1#6,2"), "1/6:1/5");
    }

    #[test]
    fn symmetric_offsets_scale_past_last_digit() {
        assert_eq!(interval("1.3", "+-1"), "129/100:131/100");
        assert_eq!(interval("1.3", "-+1"), "129/100:131/100");
        assert_eq!(interval("10", "+-2"), "8:12");
        assert_eq!(interval("1.", "+-5"), "1/2:3/2");
    }

    #[test]
    fn relative_offsets_are_order_independent() {
        assert_eq!(interval("1.5", "+2,-1"), "149/100:38/25");
        assert_eq!(interval("1.5", "-1,+2"), "149/100:38/25");
        assert_eq!(interval("7", "+1,-2"), "5:8");
    }

    #[test]
    fn relative_needs_one_of_each_sign() {
        for spec in ["+1,+2", "-1,-2", "+1,2", "1,-2"] {
            assert_eq!(parse_decimal_uncertainty("1.5", spec).unwrap_err().kind(),
                       ErrorKind::Format,
                       "{spec}");
        }
    }

    #[test]
    fn unrecognized_specs_fail() {
        assert_eq!(parse_decimal_uncertainty("1.5", "1").unwrap_err().kind(),
                   ErrorKind::Format);
        assert_eq!(parse_decimal_uncertainty("1.5", "+1").unwrap_err().kind(),
                   ErrorKind::Format);
    }
}
