use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

/// Safely converts an `i64` magnitude to `u32` if it fits.
///
/// Used for exponents: `10^e`, `b^e` and `x^n` all need a `u32` power.
///
/// ## Errors
/// Returns `Err(error)` if `|value|` exceeds `u32::MAX`.
///
/// ## Example
/// ```
/// use exacta::util::num::abs_i64_to_u32_checked;
///
/// assert_eq!(abs_i64_to_u32_checked(-12, "too big"), Ok(12));
/// assert!(abs_i64_to_u32_checked(i64::MAX, "too big").is_err());
/// ```
pub fn abs_i64_to_u32_checked<E>(value: i64, error: E) -> Result<u32, E> {
    u32::try_from(value.unsigned_abs()).map_err(|_| error)
}

/// Safely converts a non-negative `BigInt` to `u64`.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or exceeds `u64::MAX`.
///
/// ## Example
/// ```
/// use exacta::util::num::bigint_to_u64_checked;
/// use num_bigint::BigInt;
///
/// assert_eq!(bigint_to_u64_checked(&BigInt::from(42), ()), Ok(42));
/// assert!(bigint_to_u64_checked(&BigInt::from(-1), ()).is_err());
/// ```
pub fn bigint_to_u64_checked<E>(value: &BigInt, error: E) -> Result<u64, E> {
    value.to_u64().ok_or(error)
}

/// Safely converts a `BigInt` to `i64`.
///
/// ## Errors
/// Returns `Err(error)` if the value is outside the `i64` range.
pub fn bigint_to_i64_checked<E>(value: &BigInt, error: E) -> Result<i64, E> {
    value.to_i64().ok_or(error)
}

/// Returns `radix^exponent` as an arbitrary-precision integer.
///
/// ## Example
/// ```
/// use exacta::util::num::radix_pow;
/// use num_bigint::BigInt;
///
/// assert_eq!(radix_pow(10, 3), BigInt::from(1000));
/// assert_eq!(radix_pow(16, 0), BigInt::from(1));
/// ```
#[must_use]
pub fn radix_pow(radix: u32, exponent: u32) -> BigInt {
    num_traits::pow(BigInt::from(radix), exponent as usize)
}

/// Returns `10^exponent`.
#[must_use]
pub fn pow10(exponent: u32) -> BigInt {
    radix_pow(10, exponent)
}

/// Returns the product `start * (start - step) * (start - 2*step) * ...`,
/// stopping before the factor drops below 1.
///
/// `step = 1` is the ordinary factorial and `step = 2` the double factorial;
/// `0!` and `0!!` are both 1.
///
/// ## Example
/// ```
/// use exacta::util::num::multi_factorial;
/// use num_bigint::BigInt;
///
/// assert_eq!(multi_factorial(5, 1), BigInt::from(120));
/// assert_eq!(multi_factorial(7, 2), BigInt::from(105));
/// assert_eq!(multi_factorial(0, 2), BigInt::from(1));
/// ```
#[must_use]
pub fn multi_factorial(start: u64, step: u64) -> BigInt {
    let mut result = BigInt::one();
    let mut current = start;

    while current > 1 {
        result *= current;

        if current <= step {
            break;
        }

        current -= step;
    }

    result
}

/// Returns `true` if every character of `text` is an ASCII decimal digit and
/// the text is non-empty.
#[must_use]
pub fn is_decimal_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a non-empty run of ASCII decimal digits into a `BigInt`.
///
/// Returns `None` for empty input or any non-digit character, including the
/// sign and `_` separators that `BigInt::parse_bytes` would otherwise accept.
#[must_use]
pub fn parse_decimal_digits(text: &str) -> Option<BigInt> {
    if !is_decimal_digits(text) {
        return None;
    }

    BigInt::parse_bytes(text.as_bytes(), 10)
}
