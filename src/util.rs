/// Checked numeric conversion helpers.
///
/// This module provides safe functions for narrowing arbitrary-precision and
/// wide integers into the machine-sized integers that exponents, factorial
/// arguments and radix values must fit in. Nothing here rounds or truncates:
/// a value that does not fit produces the caller-supplied error.
pub mod num;
