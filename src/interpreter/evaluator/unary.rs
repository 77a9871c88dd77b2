use crate::{
    ast::UnaryOperator,
    error::ArithmeticError,
    interpreter::evaluator::core::{Context, EvalResult},
    number::{
        integer::Integer,
        value::{Tagged, Value},
    },
};

impl Context {
    /// Evaluates a unary operation on a tagged value.
    ///
    /// Supported operators:
    /// - `Negate`: negation in every shape.
    /// - `Factorial`, `DoubleFactorial`: defined on non-negative whole values.
    ///   The result keeps the operand's shape, so `(4/2)!` with an explicit
    ///   fraction stays a Rational and a degenerate interval stays an
    ///   interval.
    ///
    /// Both keep the operand's provenance.
    ///
    /// # Errors
    /// - `ArithmeticError::UndefinedOperation` for the factorial of a negative,
    ///   fractional, or non-degenerate value.
    ///
    /// # Example
    /// ```
    /// use exacta::{
    ///     ast::UnaryOperator,
    ///     interpreter::evaluator::core::Context,
    ///     number::{integer::Integer, value::{Tagged, Value}},
    /// };
    ///
    /// let four = Tagged::plain(Value::from(Integer::new(4)));
    /// let v = Context::eval_unary(UnaryOperator::Factorial, &four).unwrap();
    /// assert_eq!(v.value.to_string(), "24");
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &four).unwrap();
    /// assert_eq!(v.value.to_string(), "-4");
    /// ```
    pub fn eval_unary(op: UnaryOperator, operand: &Tagged) -> EvalResult<Tagged> {
        let value = match op {
            UnaryOperator::Negate => operand.value.negate(),
            UnaryOperator::Factorial => factorial(&operand.value, false)?,
            UnaryOperator::DoubleFactorial => factorial(&operand.value, true)?,
        };

        Ok(Tagged::new(value, operand.provenance))
    }
}

fn factorial(value: &Value, double: bool) -> EvalResult<Value> {
    let apply = |n: &Integer| if double { n.double_factorial() } else { n.factorial() };

    match value {
        Value::Integer(n) => Ok(Value::Integer(apply(n)?)),
        Value::Rational(r) => {
            let n = Integer::try_from(r).map_err(|_| {
                                            let suffix = if double { "!!" } else { "!" };
                                            ArithmeticError::undefined(format!("factorial of negative/non-integer {r}{suffix}"))
                                        })?;
            Ok(Value::Rational(apply(&n)?.to_rational()))
        },
        Value::Interval(iv) => {
            Ok(Value::Interval(if double { iv.double_factorial()? } else { iv.factorial()? }))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        number::{
            interval::RationalInterval,
            rational::Rational,
            value::Provenance,
        },
    };

    #[test]
    fn factorial_keeps_the_shape() {
        let fraction = Tagged::new(Value::from(Rational::from_integer(4)), Provenance::ExplicitFraction);
        let v = Context::eval_unary(UnaryOperator::Factorial, &fraction).unwrap();
        assert_eq!(v.value, Value::from(Rational::from_integer(24)));
        assert_eq!(v.provenance, Provenance::ExplicitFraction);

        let point = Tagged::plain(Value::from(RationalInterval::point(Rational::from_integer(5))));
        let v = Context::eval_unary(UnaryOperator::DoubleFactorial, &point).unwrap();
        assert_eq!(v.value.to_string(), "15:15");
    }

    #[test]
    fn factorial_rejects_fractions_and_negatives() {
        let half = Tagged::plain(Value::from(Rational::new(1, 2).unwrap()));
        let err = Context::eval_unary(UnaryOperator::Factorial, &half).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UndefinedOperation);

        let negative = Tagged::plain(Value::from(Integer::new(-3)));
        let err = Context::eval_unary(UnaryOperator::Factorial, &negative).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UndefinedOperation);
    }

    #[test]
    fn negation_preserves_provenance() {
        let interval = Tagged::new(Value::from(RationalInterval::new(Rational::from_integer(1), Rational::from_integer(2))),
                                   Provenance::ExplicitInterval);
        let v = Context::eval_unary(UnaryOperator::Negate, &interval).unwrap();
        assert_eq!(v.value.to_string(), "-2:-1");
        assert_eq!(v.provenance, Provenance::ExplicitInterval);
    }
}
