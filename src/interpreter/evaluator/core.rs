use tracing::trace;

use crate::{
    ast::Expr,
    error::Error,
    interpreter::options::ParseOptions,
    number::value::{Tagged, Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `Error` describing the failure.
pub type EvalResult<T> = Result<T, Error>;

/// Stores the evaluation settings.
///
/// ## Usage
///
/// `Context` is created from the caller's [`ParseOptions`] and walks one
/// parsed expression. Literals are already exact values, so evaluation only
/// combines them and applies type promotion.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Narrow every intermediate result to its simplest shape.
    pub type_aware: bool,
}

impl Context {
    /// Creates a context for the given options.
    #[must_use]
    pub const fn new(options: &ParseOptions) -> Self {
        Self { type_aware: options.type_aware }
    }

    /// Evaluates an expression to its final value.
    ///
    /// In type-aware mode the result keeps the shape promotion left it in.
    /// Otherwise every result is widened to a `RationalInterval`.
    ///
    /// # Example
    /// ```
    /// use exacta::{
    ///     ParseOptions,
    ///     interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::{ParseContext, parse_tokens}},
    /// };
    ///
    /// let options = ParseOptions::default();
    /// let tokens = tokenize("1/2 + 1/2").unwrap();
    /// let expr = parse_tokens(&tokens, &ParseContext::new("1/2 + 1/2", &options.input_base)).unwrap();
    /// assert_eq!(Context::new(&options).evaluate(&expr).unwrap().to_string(), "1");
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Value> {
        let Tagged { value, .. } = self.eval_expr(expr)?;

        if self.type_aware { Ok(value) } else { Ok(Value::Interval(value.to_interval())) }
    }

    /// Evaluates an expression node and promotes the result.
    ///
    /// The evaluator dispatches based on expression variant: literals,
    /// unary operators, binary operators, powers and scientific notation.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The node's value together with its provenance.
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult<Tagged> {
        let result = match expr {
            Expr::Literal { value, .. } => value.clone(),
            Expr::UnaryOp { op, expr, .. } => {
                let operand = self.eval_expr(expr)?;
                Self::eval_unary(*op, &operand)?
            },
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Tagged::plain(Self::eval_binary(*op, &left.value, &right.value)?)
            },
            Expr::Power { base, op, exponent, .. } => {
                let base = self.eval_expr(base)?;
                Self::eval_power(*op, &base.value, *exponent)?
            },
            Expr::Scientific { mantissa,
                               radix,
                               exponent,
                               .. } => {
                let mantissa = self.eval_expr(mantissa)?;
                Tagged::plain(Self::eval_scientific(&mantissa.value, *radix, *exponent)?)
            },
        };

        trace!(position = expr.position(),
               shape = result.value.type_name(),
               value = %result.value,
               provenance = ?result.provenance,
               "evaluated");

        Ok(if self.type_aware { Self::promote(result) } else { result })
    }
}
