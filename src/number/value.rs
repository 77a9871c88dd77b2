use std::fmt;

use crate::{
    error::Error,
    number::{integer::Integer, interval::RationalInterval, rational::Rational},
};

/// A parsed or computed value: exactly one of the three numeric shapes.
///
/// Mixed-shape arithmetic unifies operands to the wider shape first:
/// Integer, then Rational, then Interval.
///
/// # Example
/// ```
/// use exacta::number::{integer::Integer, value::Value};
///
/// let a = Value::from(Integer::new(7));
/// let b = Value::from(Integer::new(2));
/// assert_eq!(a.divide(&b).unwrap().to_string(), "7/2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A whole number.
    Integer(Integer),
    /// An exact fraction.
    Rational(Rational),
    /// A closed interval of fractions.
    Interval(RationalInterval),
}

/// How a value was written, as far as type promotion cares.
///
/// Promotion narrows a value to the simplest shape that still reflects what
/// the user wrote; the provenance records the notation that must not be
/// narrowed away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provenance {
    /// No notation to preserve.
    #[default]
    Plain,
    /// Written with an explicit fraction; stays Rational even when whole.
    ExplicitFraction,
    /// Written as a two-endpoint interval; stays an interval even when both
    /// endpoints are equal.
    ExplicitInterval,
    /// Produced by `**`; never promoted.
    SkipPromotion,
}

/// A value paired with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged {
    /// The value itself.
    pub value:      Value,
    /// How the value was written.
    pub provenance: Provenance,
}

impl Tagged {
    /// Pairs a value with a provenance.
    #[must_use]
    pub const fn new(value: Value, provenance: Provenance) -> Self {
        Self { value,
               provenance }
    }

    /// A value with nothing to preserve.
    #[must_use]
    pub const fn plain(value: Value) -> Self {
        Self::new(value, Provenance::Plain)
    }
}

impl From<Value> for Tagged {
    fn from(value: Value) -> Self {
        Self::plain(value)
    }
}

enum Unified {
    Integers(Integer, Integer),
    Rationals(Rational, Rational),
    Intervals(RationalInterval, RationalInterval),
}

impl Value {
    /// Short name of the shape, for messages and logs.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Rational(_) => "Rational",
            Self::Interval(_) => "RationalInterval",
        }
    }

    /// Widens any shape to an interval; scalars become degenerate intervals.
    #[must_use]
    pub fn to_interval(&self) -> RationalInterval {
        match self {
            Self::Integer(i) => RationalInterval::point(i.to_rational()),
            Self::Rational(r) => RationalInterval::point(r.clone()),
            Self::Interval(iv) => iv.clone(),
        }
    }

    /// The single rational this value denotes, if it denotes one.
    ///
    /// Degenerate intervals yield their bound; wider intervals yield `None`.
    #[must_use]
    pub fn to_rational(&self) -> Option<Rational> {
        match self {
            Self::Integer(i) => Some(i.to_rational()),
            Self::Rational(r) => Some(r.clone()),
            Self::Interval(iv) if iv.is_point() => Some(iv.low().clone()),
            Self::Interval(_) => None,
        }
    }

    /// Returns `true` for zero in any shape, including `[0, 0]`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(i) => i.is_zero(),
            Self::Rational(r) => r.is_zero(),
            Self::Interval(iv) => iv.is_zero(),
        }
    }

    /// `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        match self.unify(other) {
            Unified::Integers(a, b) => Self::Integer(a.add(&b)),
            Unified::Rationals(a, b) => Self::Rational(a.add(&b)),
            Unified::Intervals(a, b) => Self::Interval(a.add(&b)),
        }
    }

    /// `self - other`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        match self.unify(other) {
            Unified::Integers(a, b) => Self::Integer(a.subtract(&b)),
            Unified::Rationals(a, b) => Self::Rational(a.subtract(&b)),
            Unified::Intervals(a, b) => Self::Interval(a.subtract(&b)),
        }
    }

    /// `self * other`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        match self.unify(other) {
            Unified::Integers(a, b) => Self::Integer(a.multiply(&b)),
            Unified::Rationals(a, b) => Self::Rational(a.multiply(&b)),
            Unified::Intervals(a, b) => Self::Interval(a.multiply(&b)),
        }
    }

    /// `self / other`. Two integers divide to a Rational.
    ///
    /// # Errors
    /// - `ArithmeticError::DivisionByZero` for a zero divisor or an interval
    ///   divisor containing zero.
    pub fn divide(&self, other: &Self) -> Result<Self, Error> {
        Ok(match self.unify(other) {
            Unified::Integers(a, b) => Self::Rational(a.divide(&b)?),
            Unified::Rationals(a, b) => Self::Rational(a.divide(&b)?),
            Unified::Intervals(a, b) => Self::Interval(a.divide(&b)?),
        })
    }

    /// `-self`, keeping the shape.
    #[must_use]
    pub fn negate(&self) -> Self {
        match self {
            Self::Integer(i) => Self::Integer(i.negate()),
            Self::Rational(r) => Self::Rational(r.negate()),
            Self::Interval(iv) => Self::Interval(iv.negate()),
        }
    }

    fn unify(&self, other: &Self) -> Unified {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Unified::Integers(a.clone(), b.clone()),
            (Self::Interval(_), _) | (_, Self::Interval(_)) => {
                Unified::Intervals(self.to_interval(), other.to_interval())
            },
            _ => Unified::Rationals(self.scalar(), other.scalar()),
        }
    }

    fn scalar(&self) -> Rational {
        match self {
            Self::Integer(i) => i.to_rational(),
            Self::Rational(r) => r.clone(),
            Self::Interval(iv) => iv.low().clone(),
        }
    }
}

impl From<Integer> for Value {
    fn from(value: Integer) -> Self {
        Self::Integer(value)
    }
}

impl From<Rational> for Value {
    fn from(value: Rational) -> Self {
        Self::Rational(value)
    }
}

impl From<RationalInterval> for Value {
    fn from(value: RationalInterval) -> Self {
        Self::Interval(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Rational(r) => write!(f, "{r}"),
            Self::Interval(iv) => write!(f, "{iv}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn int(n: i64) -> Value {
        Value::Integer(Integer::new(n))
    }

    fn rat(n: i64, d: i64) -> Value {
        Value::Rational(Rational::new(n, d).unwrap())
    }

    fn iv(a: i64, b: i64) -> Value {
        Value::Interval(RationalInterval::new(Rational::from_integer(a), Rational::from_integer(b)))
    }

    #[test]
    fn integers_stay_integers_except_division() {
        assert_eq!(int(2).add(&int(3)), int(5));
        assert_eq!(int(2).multiply(&int(3)), int(6));
        assert_eq!(int(6).divide(&int(3)).unwrap(), rat(2, 1));
        assert_eq!(int(6).divide(&int(3)).unwrap().type_name(), "Rational");
    }

    #[test]
    fn mixed_shapes_widen() {
        assert_eq!(int(1).add(&rat(1, 2)), rat(3, 2));
        assert_eq!(rat(1, 2).multiply(&iv(2, 4)), iv(1, 2));
        assert_eq!(int(1).subtract(&iv(0, 1)), iv(0, 1));
    }

    #[test]
    fn division_by_interval_containing_zero_fails() {
        assert_eq!(int(1).divide(&iv(-1, 1)).unwrap_err().kind(),
                   ErrorKind::DivisionByZero);
        assert_eq!(rat(1, 2).divide(&int(0)).unwrap_err().kind(),
                   ErrorKind::DivisionByZero);
    }

    #[test]
    fn conversions() {
        assert_eq!(int(3).to_interval().to_string(), "3:3");
        assert_eq!(iv(2, 2).to_rational(), Some(Rational::from_integer(2)));
        assert_eq!(iv(1, 2).to_rational(), None);
        assert!(iv(0, 0).is_zero());
        assert_eq!(rat(-1, 2).negate().to_string(), "1/2");
    }
}
