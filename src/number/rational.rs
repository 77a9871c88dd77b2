use std::{collections::HashMap, fmt, str::FromStr};

use num_bigint::BigInt;
use num_integer::Integer as _;
use num_rational::BigRational;
use num_traits::{One, Pow, Signed, Zero};

use crate::{
    error::{ArithmeticError, Error, ParseError},
    util::num::{abs_i64_to_u32_checked, parse_decimal_digits, pow10, radix_pow},
};

/// An exact fraction of two arbitrary-precision integers.
///
/// Wraps a [`BigRational`], which keeps the fraction in lowest terms with a
/// strictly positive denominator; zero is `0/1`. Because the representation
/// is canonical, structural equality is numeric equality. The wrapper turns
/// the panicking corners of `BigRational` (zero denominators, `0^0`) into
/// [`Error`] values.
///
/// Every operation returns a new value.
///
/// # Example
/// ```
/// use exacta::number::rational::Rational;
///
/// let r = Rational::new(6, -8).unwrap();
/// assert_eq!(r.to_string(), "-3/4");
/// assert_eq!(r.add(&Rational::from_integer(1)).to_string(), "1/4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

impl Rational {
    /// Builds a reduced fraction `numerator / denominator`.
    ///
    /// # Errors
    /// - `ArithmeticError::DivisionByZero` if `denominator` is zero.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self, Error> {
        let denominator = denominator.into();

        if denominator.is_zero() {
            return Err(ArithmeticError::division_by_zero("zero denominator").into());
        }

        Ok(Self(BigRational::new(numerator.into(), denominator)))
    }

    /// The whole number `value / 1`.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// `0/1`.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// `1/1`.
    #[must_use]
    pub fn one() -> Self {
        Self(BigRational::one())
    }

    /// Parses a plain decimal string such as `"1.25"`, `"-3"`, `".5"` or
    /// `"7."` exactly.
    ///
    /// # Errors
    /// - `ParseError::Format` if the text is not an optionally signed run of
    ///   decimal digits with at most one decimal point.
    ///
    /// # Example
    /// ```
    /// use exacta::number::rational::Rational;
    ///
    /// assert_eq!(Rational::from_decimal_str("1.25").unwrap(),
    ///            Rational::new(5, 4).unwrap());
    /// ```
    pub fn from_decimal_str(text: &str) -> Result<Self, Error> {
        let (negative, unsigned) = split_sign(text);
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseError::format(format!("'{text}' is not a decimal number")).into());
        }

        let digits = format!("{whole}{fraction}");
        let numerator = parse_decimal_digits(&digits).ok_or_else(|| {
                                                         ParseError::format(format!("'{text}' is not a decimal number"))
                                                     })?;
        let scale = u32::try_from(fraction.len()).map_err(|_| ParseError::format("too many fractional digits"))?;
        let value = Self(BigRational::new(numerator, pow10(scale)));

        Ok(if negative { value.negate() } else { value })
    }

    /// The numerator (carries the sign).
    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    /// The denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    /// Returns `true` if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Returns `true` for `0/1`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the value is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self(&self.0 + &other.0)
    }

    /// `self - other`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        Self(&self.0 - &other.0)
    }

    /// `self * other`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self(&self.0 * &other.0)
    }

    /// `self / other`.
    ///
    /// # Errors
    /// - `ArithmeticError::DivisionByZero` if `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Self, Error> {
        if other.is_zero() {
            return Err(ArithmeticError::division_by_zero(format!("{self} / 0")).into());
        }

        Ok(Self(&self.0 / &other.0))
    }

    /// `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self(-&self.0)
    }

    /// `|self|`.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// `1 / self`.
    ///
    /// # Errors
    /// - `ArithmeticError::DivisionByZero` if `self` is zero.
    pub fn reciprocal(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(ArithmeticError::division_by_zero("1 / 0").into());
        }

        Ok(Self(self.0.recip()))
    }

    /// The largest integer not greater than `self`.
    #[must_use]
    pub fn floor(&self) -> BigInt {
        self.0.floor().to_integer()
    }

    /// Raises `self` to an integer power. Negative exponents invert first.
    ///
    /// # Errors
    /// - `ArithmeticError::UndefinedOperation` for `0^0`.
    /// - `ArithmeticError::DivisionByZero` for `0^n` with `n < 0`.
    /// - `ParseError::Range` if `|exponent|` does not fit in `u32`.
    ///
    /// # Example
    /// ```
    /// use exacta::number::rational::Rational;
    ///
    /// let half = Rational::new(1, 2).unwrap();
    /// assert_eq!(half.pow(-3).unwrap(), Rational::from_integer(8));
    /// ```
    pub fn pow(&self, exponent: i64) -> Result<Self, Error> {
        if exponent == 0 {
            if self.is_zero() {
                return Err(ArithmeticError::undefined("0^0").into());
            }
            return Ok(Self::one());
        }

        let magnitude = abs_i64_to_u32_checked(exponent, exponent_too_large(exponent))?;
        let raised = Self(Pow::pow(&self.0, magnitude));

        if exponent < 0 { raised.reciprocal() } else { Ok(raised) }
    }

    /// Decimal scientific notation: `self × 10^exponent`.
    ///
    /// # Errors
    /// - `ParseError::Range` if `|exponent|` does not fit in `u32`.
    pub fn e(&self, exponent: i64) -> Result<Self, Error> {
        self.scale_by_power_of(10, exponent)
    }

    /// Radix scientific notation: `self × radix^exponent`.
    ///
    /// # Errors
    /// - `ParseError::Range` if `|exponent|` does not fit in `u32`.
    pub fn scale_by_power_of(&self, radix: u32, exponent: i64) -> Result<Self, Error> {
        let magnitude = abs_i64_to_u32_checked(exponent, exponent_too_large(exponent))?;
        let factor = BigRational::from_integer(radix_pow(radix, magnitude));

        Ok(Self(if exponent < 0 { &self.0 / &factor } else { &self.0 * &factor }))
    }

    /// Folds a simple continued fraction `[a0; a1, a2, ...]` into a fraction.
    ///
    /// `a0` may be any integer; every later term must be positive. Folding
    /// runs from the last term backward: `value = a_k`, then
    /// `value = a_i + 1/value`.
    ///
    /// # Errors
    /// - `ParseError::Format` for an empty sequence or a non-positive term
    ///   after the first.
    ///
    /// # Example
    /// ```
    /// use exacta::number::rational::Rational;
    /// use num_bigint::BigInt;
    ///
    /// let terms: Vec<BigInt> = [3, 7, 16].into_iter().map(BigInt::from).collect();
    /// assert_eq!(Rational::from_continued_fraction(&terms).unwrap(),
    ///            Rational::new(355, 113).unwrap());
    /// ```
    pub fn from_continued_fraction(terms: &[BigInt]) -> Result<Self, Error> {
        let Some((last, rest)) = terms.split_last() else {
            return Err(ParseError::format("continued fraction has no terms").into());
        };

        if let Some((index, term)) = terms.iter().enumerate().skip(1).find(|(_, t)| !t.is_positive()) {
            return Err(ParseError::format(format!("continued fraction term {index} must be a positive integer, found {term}")).into());
        }

        let mut value = Self::from_integer(last.clone());
        for term in rest.iter().rev() {
            value = Self::from_integer(term.clone()).add(&value.reciprocal()?);
        }

        Ok(value)
    }

    /// Expands `self` into its simple continued fraction `[a0; a1, ...]`,
    /// the inverse of [`Rational::from_continued_fraction`]. The last term
    /// of a multi-term expansion is never 1.
    #[must_use]
    pub fn to_continued_fraction(&self) -> Vec<BigInt> {
        let mut terms = Vec::new();
        let (mut numerator, mut denominator) = (self.numerator().clone(), self.denominator().clone());

        while !denominator.is_zero() {
            let (quotient, remainder) = numerator.div_mod_floor(&denominator);
            terms.push(quotient);
            numerator = denominator;
            denominator = remainder;
        }

        terms
    }

    /// Renders the exact decimal expansion, marking a repeating cycle with
    /// `#`: `1/3` is `0.#3`, `1/6` is `0.1#6`, `5/4` is `1.25`.
    ///
    /// # Example
    /// ```
    /// use exacta::number::rational::Rational;
    ///
    /// assert_eq!(Rational::new(2200, 3).unwrap().to_repeating_decimal(), "733.#3");
    /// ```
    #[must_use]
    pub fn to_repeating_decimal(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let denominator = self.denominator();
        let (whole, mut remainder) = self.numerator().abs().div_rem(denominator);

        if remainder.is_zero() {
            return format!("{sign}{whole}");
        }

        let mut digits = String::new();
        let mut seen: HashMap<BigInt, usize> = HashMap::new();

        while !remainder.is_zero() {
            if let Some(&start) = seen.get(&remainder) {
                let (fixed, cycle) = digits.split_at(start);
                return format!("{sign}{whole}.{fixed}#{cycle}");
            }

            seen.insert(remainder.clone(), digits.len());
            remainder *= 10u32;
            let (digit, rest) = remainder.div_rem(denominator);
            digits.push_str(&digit.to_string());
            remainder = rest;
        }

        format!("{sign}{whole}.{digits}")
    }
}

/// Splits an optional leading `+`/`-` from a numeral.
pub(crate) fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn exponent_too_large(exponent: i64) -> ParseError {
    ParseError::Range { message: format!("exponent {exponent} is too large") }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl FromStr for Rational {
    type Err = Error;

    /// Accepts `n/d` or a plain decimal.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.split_once('/') {
            Some((n, d)) => Self::from_decimal_str(n)?.divide(&Self::from_decimal_str(d)?),
            None => Self::from_decimal_str(text),
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
