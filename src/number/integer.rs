use std::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::{
    error::{ArithmeticError, Error, ParseError},
    number::rational::Rational,
    util::num::{abs_i64_to_u32_checked, bigint_to_u64_checked, multi_factorial},
};

/// A whole number of arbitrary size.
///
/// `Integer` is the narrowest numeric shape a parse can produce. It converts
/// losslessly into a [`Rational`] with denominator 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Integer {
    value: BigInt,
}

impl Integer {
    /// Wraps an arbitrary-precision integer.
    pub fn new(value: impl Into<BigInt>) -> Self {
        Self { value: value.into() }
    }

    /// The wrapped value.
    #[must_use]
    pub const fn value(&self) -> &BigInt {
        &self.value
    }

    /// Returns `true` for zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// The same number as a fraction `value / 1`.
    #[must_use]
    pub fn to_rational(&self) -> Rational {
        Rational::from_integer(self.value.clone())
    }

    /// `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(&self.value + &other.value)
    }

    /// `self - other`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        Self::new(&self.value - &other.value)
    }

    /// `self * other`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self::new(&self.value * &other.value)
    }

    /// `self / other` as an exact fraction.
    ///
    /// # Errors
    /// - `ArithmeticError::DivisionByZero` if `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Rational, Error> {
        if other.is_zero() {
            return Err(ArithmeticError::division_by_zero(format!("{self} / 0")).into());
        }

        Rational::new(self.value.clone(), other.value.clone())
    }

    /// `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(-&self.value)
    }

    /// `|self|`.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.value.abs())
    }

    /// Raises `self` to a non-negative power.
    ///
    /// # Errors
    /// - `ArithmeticError::UndefinedOperation` for `0^0`, and for a negative
    ///   exponent, whose power leaves the integers; use [`Rational::pow`].
    /// - `ParseError::Range` if the exponent does not fit in `u32`.
    pub fn pow(&self, exponent: i64) -> Result<Self, Error> {
        if exponent < 0 {
            return Err(ArithmeticError::undefined(format!("{self}^{exponent} in the integers")).into());
        }

        if exponent == 0 && self.is_zero() {
            return Err(ArithmeticError::undefined("0^0").into());
        }

        let magnitude = abs_i64_to_u32_checked(exponent, ParseError::Range { message: format!("exponent {exponent} is too large") })?;

        Ok(Self::new(num_traits::pow(self.value.clone(), magnitude as usize)))
    }

    /// `n!`.
    ///
    /// # Errors
    /// - `ArithmeticError::UndefinedOperation` for negative values.
    /// - `ParseError::Range` if the argument does not fit in `u64`.
    ///
    /// # Example
    /// ```
    /// use exacta::number::integer::Integer;
    ///
    /// assert_eq!(Integer::new(5).factorial().unwrap(), Integer::new(120));
    /// ```
    pub fn factorial(&self) -> Result<Self, Error> {
        Ok(Self::new(multi_factorial(self.factorial_argument("!")?, 1)))
    }

    /// `n!!`, the product of every other integer down to 1 or 2.
    ///
    /// # Errors
    /// - `ArithmeticError::UndefinedOperation` for negative values.
    /// - `ParseError::Range` if the argument does not fit in `u64`.
    pub fn double_factorial(&self) -> Result<Self, Error> {
        Ok(Self::new(multi_factorial(self.factorial_argument("!!")?, 2)))
    }

    fn factorial_argument(&self, suffix: &str) -> Result<u64, Error> {
        if self.value.is_negative() {
            return Err(ArithmeticError::undefined(format!("factorial of negative number {self}{suffix}")).into());
        }

        Ok(bigint_to_u64_checked(&self.value,
                                 ParseError::Range { message: format!("factorial argument {self} is too large") })?)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Self {
        Self::new(value)
    }
}

impl From<Integer> for Rational {
    fn from(value: Integer) -> Self {
        Self::from_integer(value.value)
    }
}

impl TryFrom<&Rational> for Integer {
    type Error = Error;

    /// Succeeds only for fractions with denominator 1.
    fn try_from(value: &Rational) -> Result<Self, Self::Error> {
        if value.is_integer() {
            Ok(Self::new(value.numerator().clone()))
        } else {
            Err(ParseError::format(format!("{value} is not a whole number")).into())
        }
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn arithmetic_stays_whole_except_division() {
        let a = Integer::new(12);
        let b = Integer::new(-5);
        assert_eq!(a.add(&b), Integer::new(7));
        assert_eq!(a.subtract(&b), Integer::new(17));
        assert_eq!(a.multiply(&b), Integer::new(-60));
        assert_eq!(a.divide(&b).unwrap(), Rational::new(-12, 5).unwrap());
        assert_eq!(a.divide(&Integer::new(0)).unwrap_err().kind(),
                   ErrorKind::DivisionByZero);
        assert_eq!(b.abs(), Integer::new(5));
        assert_eq!(b.negate(), Integer::new(5));
    }

    #[test]
    fn factorials() {
        assert_eq!(Integer::new(0).factorial().unwrap(), Integer::new(1));
        assert_eq!(Integer::new(20).factorial().unwrap().to_string(),
                   "2432902008176640000");
        assert_eq!(Integer::new(25).factorial().unwrap().to_string(),
                   "15511210043330985984000000");
        assert_eq!(Integer::new(7).double_factorial().unwrap(), Integer::new(105));
        assert_eq!(Integer::new(-3).factorial().unwrap_err().kind(),
                   ErrorKind::UndefinedOperation);
    }

    #[test]
    fn pow_rejects_zero_to_zero() {
        assert_eq!(Integer::new(3).pow(4).unwrap(), Integer::new(81));
        assert_eq!(Integer::new(0).pow(0).unwrap_err().kind(),
                   ErrorKind::UndefinedOperation);
    }

    #[test]
    fn negative_exponent_is_undefined_in_the_integers() {
        assert_eq!(Integer::new(2).pow(-1).unwrap_err().kind(),
                   ErrorKind::UndefinedOperation);
        assert_eq!(Integer::new(2).pow(i64::MAX).unwrap_err().kind(),
                   ErrorKind::Range);
    }

    #[test]
    fn rational_conversion_requires_unit_denominator() {
        let whole = Rational::new(8, 4).unwrap();
        assert_eq!(Integer::try_from(&whole).unwrap(), Integer::new(2));
        assert!(Integer::try_from(&Rational::new(1, 2).unwrap()).is_err());
        assert_eq!(Rational::from(Integer::new(3)), Rational::from_integer(3));
    }
}
