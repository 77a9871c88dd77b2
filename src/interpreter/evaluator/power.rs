use tracing::trace;

use crate::{
    ast::PowerOperator,
    error::{ArithmeticError, ParseError},
    interpreter::evaluator::core::{Context, EvalResult},
    number::{
        interval::RationalInterval,
        rational::Rational,
        value::{Provenance, Tagged, Value},
    },
    util::num::abs_i64_to_u32_checked,
};

impl Context {
    /// Dispatches `^` and `**`.
    ///
    /// `^` returns a plain value that promotion may narrow; `**` always
    /// returns an interval that promotion leaves alone.
    pub fn eval_power(op: PowerOperator, base: &Value, exponent: i64) -> EvalResult<Tagged> {
        match op {
            PowerOperator::Pow => Ok(Tagged::plain(Self::eval_pow(base, exponent)?)),
            PowerOperator::MPow => {
                Ok(Tagged::new(Value::Interval(Self::eval_mpow(base, exponent)?), Provenance::SkipPromotion))
            },
        }
    }

    /// `base ^ exponent` in closed form.
    ///
    /// Integers stay integers for non-negative exponents; a negative
    /// exponent moves them to the rationals. Intervals use the tight
    /// even/odd rule of [`RationalInterval::pow`].
    ///
    /// # Errors
    /// - `ArithmeticError::UndefinedOperation` for `0^0` in any shape.
    /// - `ArithmeticError::DivisionByZero` for zero, or an interval whose
    ///   power contains zero, raised to a negative exponent.
    /// - `ParseError::Range` if `|exponent|` does not fit in `u32`.
    ///
    /// # Example
    /// ```
    /// use exacta::{
    ///     interpreter::evaluator::core::Context,
    ///     number::{integer::Integer, value::Value},
    /// };
    ///
    /// let two = Value::from(Integer::new(2));
    /// assert_eq!(Context::eval_pow(&two, 10).unwrap().to_string(), "1024");
    /// assert_eq!(Context::eval_pow(&two, -2).unwrap().to_string(), "1/4");
    /// ```
    pub fn eval_pow(base: &Value, exponent: i64) -> EvalResult<Value> {
        if exponent == 0 && base.is_zero() {
            return Err(ArithmeticError::undefined("0^0").into());
        }

        Ok(match base {
            Value::Integer(i) if exponent >= 0 => Value::Integer(i.pow(exponent)?),
            Value::Integer(i) => Value::Rational(i.to_rational().pow(exponent)?),
            Value::Rational(r) => Value::Rational(r.pow(exponent)?),
            Value::Interval(iv) => Value::Interval(iv.pow(exponent)?),
        })
    }

    /// `base ** exponent` by repeated multiplication, always over intervals.
    ///
    /// Scalars are coerced to degenerate intervals first. A negative
    /// exponent divides `[1,1]` by the positive power.
    ///
    /// # Errors
    /// - `ArithmeticError::UndefinedOperation` for `0**0`.
    /// - `ArithmeticError::DivisionByZero` for a negative exponent when the
    ///   positive power contains zero.
    /// - `ParseError::Range` if `|exponent|` does not fit in `u32`.
    pub fn eval_mpow(base: &Value, exponent: i64) -> EvalResult<RationalInterval> {
        let interval = base.to_interval();
        let magnitude = abs_i64_to_u32_checked(exponent,
                                               ParseError::Range { message: format!("exponent {exponent} is too large") })?;

        trace!(%interval, exponent, "repeated multiplication");
        let positive = interval.mpow(magnitude)?;

        if exponent < 0 {
            RationalInterval::point(Rational::one()).divide(&positive)
        } else {
            Ok(positive)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, number::integer::Integer};

    fn interval(low: i64, high: i64) -> Value {
        Value::from(RationalInterval::new(Rational::from_integer(low), Rational::from_integer(high)))
    }

    #[test]
    fn zero_to_the_zero_is_undefined_in_every_shape() {
        for base in [Value::from(Integer::new(0)), Value::from(Rational::zero()), interval(0, 0)] {
            let err = Context::eval_pow(&base, 0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UndefinedOperation);
        }

        let err = Context::eval_mpow(&interval(0, 0), 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UndefinedOperation);
    }

    #[test]
    fn pow_and_mpow_differ_across_zero() {
        assert_eq!(Context::eval_pow(&interval(-1, 2), 2).unwrap().to_string(), "0:4");
        assert_eq!(Context::eval_mpow(&interval(-1, 2), 2).unwrap().to_string(), "-2:4");
    }

    #[test]
    fn mpow_is_tagged_to_skip_promotion() {
        let tagged = Context::eval_power(PowerOperator::MPow, &Value::from(Integer::new(2)), 2).unwrap();
        assert_eq!(tagged.provenance, Provenance::SkipPromotion);
        assert_eq!(tagged.value.to_string(), "4:4");
    }

    #[test]
    fn negative_mpow_inverts() {
        assert_eq!(Context::eval_mpow(&Value::from(Integer::new(2)), -2).unwrap().to_string(), "1/4:1/4");

        let err = Context::eval_mpow(&interval(-1, 1), -1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn zero_to_a_negative_power_divides_by_zero() {
        let err = Context::eval_pow(&Value::from(Integer::new(0)), -1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }
}
