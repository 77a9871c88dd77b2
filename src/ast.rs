use crate::number::value::Tagged;

/// An abstract syntax tree (AST) node representing an arithmetic
/// expression.
///
/// Numerals are interpreted while parsing, so a literal already holds its
/// exact value and the provenance of the notation it was written in. Every
/// node records the byte offset of its operator or first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeral, fully interpreted.
    Literal {
        /// The value and how it was written.
        value:    Tagged,
        /// Byte offset in the source expression.
        position: usize,
    },
    /// A prefix or postfix operator applied to one operand.
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        expr:     Box<Expr>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// An arithmetic operator applied to two operands.
    BinaryOp {
        /// Left-hand operand.
        left:     Box<Expr>,
        /// The operator.
        op:       BinaryOperator,
        /// Right-hand operand.
        right:    Box<Expr>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// `base ^ n` or `base ** n` with a literal integer exponent.
    Power {
        /// The base expression.
        base:     Box<Expr>,
        /// Which exponentiation semantics to use.
        op:       PowerOperator,
        /// The exponent, always written in base 10.
        exponent: i64,
        /// Byte offset of the operator.
        position: usize,
    },
    /// Scientific notation: `mantissa × radix^exponent`.
    Scientific {
        /// The scaled expression.
        mantissa: Box<Expr>,
        /// 10 in decimal input, otherwise the active input radix.
        radix:    u32,
        /// The power of `radix`.
        exponent: i64,
        /// Byte offset of the marker.
        position: usize,
    },
}

impl Expr {
    /// Byte offset of the node in the source expression.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Power { position, .. }
            | Self::Scientific { position, .. } => *position,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Factorial (`x!`).
    Factorial,
    /// Double factorial (`x!!`).
    DoubleFactorial,
}

/// The two exponentiation operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PowerOperator {
    /// `^`: closed-form power with the tightest interval bounds.
    Pow,
    /// `**`: repeated multiplication, always on an interval.
    MPow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Factorial => "!",
            Self::DoubleFactorial => "!!",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for PowerOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Pow => "^",
            Self::MPow => "**",
        };
        write!(f, "{operator}")
    }
}
