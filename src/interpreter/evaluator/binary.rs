use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::{Context, EvalResult},
    number::value::Value,
};

impl Context {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Operands of different shapes are widened to the wider one first.
    /// Integer division always yields a Rational; promotion decides later
    /// whether it narrows back.
    ///
    /// # Errors
    /// - `ArithmeticError::DivisionByZero` for a zero divisor or an interval
    ///   divisor containing zero.
    ///
    /// # Example
    /// ```
    /// use exacta::{
    ///     ast::BinaryOperator,
    ///     interpreter::evaluator::core::Context,
    ///     number::{integer::Integer, value::Value},
    /// };
    ///
    /// let v = Context::eval_binary(BinaryOperator::Div,
    ///                              &Value::from(Integer::new(6)),
    ///                              &Value::from(Integer::new(4))).unwrap();
    /// assert_eq!(v.to_string(), "3/2");
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => Ok(left.add(right)),
            BinaryOperator::Sub => Ok(left.subtract(right)),
            BinaryOperator::Mul => Ok(left.multiply(right)),
            BinaryOperator::Div => left.divide(right),
        }
    }

    /// Scales a value by `radix^exponent`, keeping its shape except that an
    /// Integer scaled down becomes a Rational.
    ///
    /// # Errors
    /// - `ParseError::Range` if `|exponent|` does not fit in `u32`.
    pub fn eval_scientific(mantissa: &Value, radix: u32, exponent: i64) -> EvalResult<Value> {
        Ok(match mantissa {
            Value::Integer(i) => Value::Rational(i.to_rational().scale_by_power_of(radix, exponent)?),
            Value::Rational(r) => Value::Rational(r.scale_by_power_of(radix, exponent)?),
            Value::Interval(iv) => Value::Interval(iv.scale_by_power_of(radix, exponent)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        number::{integer::Integer, interval::RationalInterval, rational::Rational},
    };

    fn int(n: i64) -> Value {
        Value::from(Integer::new(n))
    }

    #[test]
    fn mixed_shapes_widen() {
        let half = Value::from(Rational::new(1, 2).unwrap());
        let v = Context::eval_binary(BinaryOperator::Add, &int(1), &half).unwrap();
        assert_eq!(v, Value::from(Rational::new(3, 2).unwrap()));

        let iv = Value::from(RationalInterval::new(Rational::from_integer(1), Rational::from_integer(2)));
        let v = Context::eval_binary(BinaryOperator::Mul, &int(3), &iv).unwrap();
        assert_eq!(v.to_string(), "3:6");
    }

    #[test]
    fn division_by_zero_is_reported() {
        let err = Context::eval_binary(BinaryOperator::Div, &int(1), &int(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn scientific_scales_by_radix() {
        assert_eq!(Context::eval_scientific(&int(3), 10, 2).unwrap().to_string(), "300");
        assert_eq!(Context::eval_scientific(&int(3), 16, -1).unwrap().to_string(), "3/16");
    }
}
