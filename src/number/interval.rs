use std::fmt;

use num_bigint::BigInt;

use crate::{
    error::{ArithmeticError, Error},
    number::{integer::Integer, rational::Rational},
};

/// A closed interval `[low, high]` of exact rationals.
///
/// The constructor orders its endpoints, so `low <= high` always holds.
///
/// # Example
/// ```
/// use exacta::number::{interval::RationalInterval, rational::Rational};
///
/// let x = RationalInterval::new(Rational::from_integer(-1), Rational::from_integer(2));
/// assert_eq!(x.pow(2).unwrap().to_string(), "0:4");
/// assert_eq!(x.mpow(2).unwrap().to_string(), "-2:4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RationalInterval {
    low:  Rational,
    high: Rational,
}

impl RationalInterval {
    /// Builds the interval spanning `a` and `b`, whichever order they come
    /// in.
    #[must_use]
    pub fn new(a: Rational, b: Rational) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The degenerate interval `[value, value]`.
    #[must_use]
    pub fn point(value: Rational) -> Self {
        Self { low:  value.clone(),
               high: value, }
    }

    /// The lower bound.
    #[must_use]
    pub const fn low(&self) -> &Rational {
        &self.low
    }

    /// The upper bound.
    #[must_use]
    pub const fn high(&self) -> &Rational {
        &self.high
    }

    /// Returns `true` if `low == high`.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.low == self.high
    }

    /// Returns `true` if the interval is exactly `[0, 0]`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.is_point() && self.low.is_zero()
    }

    /// Returns `true` if `low <= value <= high`.
    #[must_use]
    pub fn contains(&self, value: &Rational) -> bool {
        &self.low <= value && value <= &self.high
    }

    /// Returns `true` if zero lies within the interval.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.contains(&Rational::zero())
    }

    /// `high - low`.
    #[must_use]
    pub fn width(&self) -> Rational {
        self.high.subtract(&self.low)
    }

    /// `(low + high) / 2`.
    #[must_use]
    pub fn midpoint(&self) -> Rational {
        let sum = self.low.add(&self.high);
        Rational::new(sum.numerator().clone(), sum.denominator() * 2u32).unwrap_or(sum)
    }

    /// `[low + other.low, high + other.high]`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self { low:  self.low.add(&other.low),
               high: self.high.add(&other.high), }
    }

    /// `[low - other.high, high - other.low]`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        Self { low:  self.low.subtract(&other.high),
               high: self.high.subtract(&other.low), }
    }

    /// The hull of the four cross products of the bounds.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let products = [self.low.multiply(&other.low),
                        self.low.multiply(&other.high),
                        self.high.multiply(&other.low),
                        self.high.multiply(&other.high)];

        Self::hull(products)
    }

    /// The hull of the four cross quotients of the bounds.
    ///
    /// # Errors
    /// - `ArithmeticError::DivisionByZero` if the divisor contains zero.
    pub fn divide(&self, other: &Self) -> Result<Self, Error> {
        if other.contains_zero() {
            return Err(ArithmeticError::division_by_zero(format!("{self} / {other} (divisor contains 0)")).into());
        }

        let quotients = [self.low.divide(&other.low)?,
                         self.low.divide(&other.high)?,
                         self.high.divide(&other.low)?,
                         self.high.divide(&other.high)?];

        Ok(Self::hull(quotients))
    }

    /// `[-high, -low]`.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self { low:  self.high.negate(),
               high: self.low.negate(), }
    }

    /// `[1/high, 1/low]`.
    ///
    /// # Errors
    /// - `ArithmeticError::DivisionByZero` if the interval contains zero.
    pub fn reciprocal(&self) -> Result<Self, Error> {
        if self.contains_zero() {
            return Err(ArithmeticError::division_by_zero(format!("1 / {self} (interval contains 0)")).into());
        }

        Ok(Self { low:  self.high.reciprocal()?,
                  high: self.low.reciprocal()?, })
    }

    /// Multiplies both bounds by `radix^exponent`.
    ///
    /// # Errors
    /// - `ParseError::Range` if `|exponent|` does not fit in `u32`.
    pub fn scale_by_power_of(&self, radix: u32, exponent: i64) -> Result<Self, Error> {
        Ok(Self { low:  self.low.scale_by_power_of(radix, exponent)?,
                  high: self.high.scale_by_power_of(radix, exponent)?, })
    }

    /// Closed-form power with the tightest bounds.
    ///
    /// Even powers of an interval that straddles zero start at 0; odd powers
    /// are monotone. Negative exponents take the positive power and invert it.
    ///
    /// # Errors
    /// - `ArithmeticError::UndefinedOperation` for `[0,0]^0`.
    /// - `ArithmeticError::DivisionByZero` for a negative exponent when the
    ///   positive power contains zero.
    pub fn pow(&self, exponent: i64) -> Result<Self, Error> {
        if exponent == 0 {
            if self.is_zero() {
                return Err(ArithmeticError::undefined("0^0").into());
            }
            return Ok(Self::point(Rational::one()));
        }

        if exponent < 0 {
            let positive = self.pow(exponent.checked_neg().unwrap_or(i64::MAX))?;
            if positive.contains_zero() {
                return Err(ArithmeticError::division_by_zero(format!("{self}^{exponent} (power contains 0)")).into());
            }
            return positive.reciprocal();
        }

        let low = self.low.pow(exponent)?;
        let high = self.high.pow(exponent)?;

        if exponent % 2 != 0 {
            return Ok(Self { low, high });
        }

        if self.low.is_negative() && !self.high.is_negative() && !self.high.is_zero() {
            let magnitude = std::cmp::max(self.low.abs(), self.high.abs());
            return Ok(Self { low:  Rational::zero(),
                             high: magnitude.pow(exponent)?, });
        }

        Ok(Self::new(low, high))
    }

    /// Power by repeated self-multiplication: `x * x * ... * x` (`exponent`
    /// factors), with `x^0 = [1,1]`.
    ///
    /// Each multiplication re-derives its bounds independently, so for an
    /// interval that straddles zero the result is generally wider than
    /// [`RationalInterval::pow`].
    ///
    /// # Errors
    /// - `ArithmeticError::UndefinedOperation` for `[0,0]^0`.
    pub fn mpow(&self, exponent: u32) -> Result<Self, Error> {
        if exponent == 0 {
            if self.is_zero() {
                return Err(ArithmeticError::undefined("0^0").into());
            }
            return Ok(Self::point(Rational::one()));
        }

        let mut result = self.clone();
        for _ in 1..exponent {
            result = result.multiply(self);
        }

        Ok(result)
    }

    /// `n!` of a degenerate interval holding a non-negative integer.
    ///
    /// # Errors
    /// - `ArithmeticError::UndefinedOperation` for non-degenerate intervals,
    ///   negative or fractional points.
    pub fn factorial(&self) -> Result<Self, Error> {
        Ok(Self::point(self.point_integer("!")?.factorial()?.to_rational()))
    }

    /// `n!!` of a degenerate interval holding a non-negative integer.
    ///
    /// # Errors
    /// - `ArithmeticError::UndefinedOperation` for non-degenerate intervals,
    ///   negative or fractional points.
    pub fn double_factorial(&self) -> Result<Self, Error> {
        Ok(Self::point(self.point_integer("!!")?.double_factorial()?.to_rational()))
    }

    fn point_integer(&self, suffix: &str) -> Result<Integer, Error> {
        if !self.is_point() {
            return Err(ArithmeticError::undefined(format!("factorial of non-degenerate interval {self}{suffix}")).into());
        }

        if !self.low.is_integer() || self.low.is_negative() {
            return Err(ArithmeticError::undefined(format!("factorial of negative/non-integer {}{suffix}", self.low)).into());
        }

        Ok(Integer::new(BigInt::clone(self.low.numerator())))
    }

    fn hull(values: [Rational; 4]) -> Self {
        let [first, rest @ ..] = values;
        let (low, high) = rest.into_iter().fold((first.clone(), first), |(low, high), value| {
                                              (std::cmp::min(low, value.clone()), std::cmp::max(high, value))
                                          });

        Self { low, high }
    }
}

impl From<Rational> for RationalInterval {
    fn from(value: Rational) -> Self {
        Self::point(value)
    }
}

impl fmt::Display for RationalInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.low, self.high)
    }
}
