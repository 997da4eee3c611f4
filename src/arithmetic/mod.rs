//! The four arithmetic operations.
//!
//! All functions are pure. Integer pairs stay exact for addition,
//! subtraction and multiplication, falling back to floating point only if
//! the exact result overflows. Division is always true division and is the
//! only operation that can fail.

use std::fmt;

use thiserror::Error;

use crate::models::{Number, Operation};

/// Failure of an arithmetic operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Error: Division by zero")]
    DivisionByZero,
}

/// Return the sum of `a` and `b`.
pub fn add(a: Number, b: Number) -> Number {
    exact_or_real(a, b, i128::checked_add, |x, y| x + y)
}

/// Return the difference of `a` and `b`.
pub fn subtract(a: Number, b: Number) -> Number {
    exact_or_real(a, b, i128::checked_sub, |x, y| x - y)
}

/// Return the product of `a` and `b`.
pub fn multiply(a: Number, b: Number) -> Number {
    exact_or_real(a, b, i128::checked_mul, |x, y| x * y)
}

/// Divide `a` by `b`.
///
/// The quotient is always real, even for two integers that divide evenly.
/// Operands are converted to `f64` first, so integers beyond 2^53 lose
/// precision before the division.
pub fn divide(a: Number, b: Number) -> Result<Number, ArithmeticError> {
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(Number::Real(a.as_f64() / b.as_f64()))
}

/// Dispatch `op` on the two operands.
pub fn apply(op: Operation, a: Number, b: Number) -> Result<Number, ArithmeticError> {
    match op {
        Operation::Add => Ok(add(a, b)),
        Operation::Subtract => Ok(subtract(a, b)),
        Operation::Multiply => Ok(multiply(a, b)),
        Operation::Divide => divide(a, b),
    }
}

/// One evaluated menu operation: both operands and the outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub operation: Operation,
    pub lhs: Number,
    pub rhs: Number,
    pub outcome: Result<Number, ArithmeticError>,
}

impl Calculation {
    pub fn evaluate(operation: Operation, lhs: Number, rhs: Number) -> Self {
        Self {
            operation,
            lhs,
            rhs,
            outcome: apply(operation, lhs, rhs),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// `a + b = r` on success, `a / b -> message` on failure.
impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.operation.symbol();
        match &self.outcome {
            Ok(result) => write!(f, "{} {symbol} {} = {result}", self.lhs, self.rhs),
            Err(e) => write!(f, "{} {symbol} {} -> {e}", self.lhs, self.rhs),
        }
    }
}

fn exact_or_real(
    a: Number,
    b: Number,
    exact: fn(i128, i128) -> Option<i128>,
    real: fn(f64, f64) -> f64,
) -> Number {
    if let (Number::Integer(x), Number::Integer(y)) = (a, b) {
        if let Some(n) = exact(x, y) {
            return Number::Integer(n);
        }
        tracing::debug!(%x, %y, "integer overflow, promoting to real");
    }
    Number::Real(real(a.as_f64(), b.as_f64()))
}
