use crate::{
    interpreter::evaluator::core::Context,
    number::{
        integer::Integer,
        value::{Provenance, Tagged, Value},
    },
};

impl Context {
    /// Narrows a value to the simplest shape its provenance allows.
    ///
    /// - A degenerate interval becomes its Rational bound, unless it was
    ///   written as an explicit interval.
    /// - A whole Rational becomes an Integer, unless it was written as an
    ///   explicit fraction.
    /// - Results of `**` are never touched.
    ///
    /// Both steps apply in turn, so `[2, 2]` from arithmetic becomes `2`.
    ///
    /// # Example
    /// ```
    /// use exacta::{
    ///     interpreter::evaluator::core::Context,
    ///     number::{integer::Integer, rational::Rational, value::{Provenance, Tagged, Value}},
    /// };
    ///
    /// let plain = Tagged::plain(Value::from(Rational::from_integer(2)));
    /// assert_eq!(Context::promote(plain).value, Value::from(Integer::new(2)));
    ///
    /// let fraction = Tagged::new(Value::from(Rational::from_integer(2)), Provenance::ExplicitFraction);
    /// assert_eq!(Context::promote(fraction).value, Value::from(Rational::from_integer(2)));
    /// ```
    #[must_use]
    pub fn promote(tagged: Tagged) -> Tagged {
        let Tagged { value, provenance } = tagged;

        if provenance == Provenance::SkipPromotion {
            return Tagged::new(value, provenance);
        }

        let value = match value {
            Value::Interval(iv) if iv.is_point() && provenance != Provenance::ExplicitInterval => {
                Value::Rational(iv.low().clone())
            },
            other => other,
        };

        let value = match value {
            Value::Rational(r) if r.is_integer() && provenance != Provenance::ExplicitFraction => {
                Value::Integer(Integer::new(r.numerator().clone()))
            },
            other => other,
        };

        Tagged::new(value, provenance)
    }
}
