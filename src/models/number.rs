//! Numeric values entered by the user.

use std::fmt;
use std::str::FromStr;

use crate::input::{InputError, parse_number};

/// A user-supplied or computed number.
///
/// Whether a value is an exact integer or an approximate real is decided
/// when the user's text is parsed; arithmetic promotes to `Real` as soon as
/// either side is real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Exact integer.
    Integer(i128),
    /// Floating-point value.
    Real(f64),
}

impl Number {
    /// The value as a float, promoting integers.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Real(x) => x,
        }
    }

    /// Returns `true` for integer zero and for both signed real zeros.
    pub fn is_zero(self) -> bool {
        match self {
            Number::Integer(n) => n == 0,
            Number::Real(x) => x == 0.0,
        }
    }

    /// Returns `true` if this is the exact-integer variant.
    pub fn is_integer(self) -> bool {
        matches!(self, Number::Integer(_))
    }
}

impl From<i128> for Number {
    fn from(n: i128) -> Self {
        Number::Integer(n)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n.into())
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Real(x)
    }
}

impl FromStr for Number {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_number(s)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Integer(n) => write!(f, "{n}"),
            Number::Real(x) => fmt_real(x, f),
        }
    }
}

/// Reals always show a fractional part or an exponent so they can't be
/// mistaken for integers: `300.0`, `2.5`, `1e+16`, `1.5e-05`.
fn fmt_real(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("nan");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
    }

    let abs = x.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let sci = format!("{x:e}");
        return match sci.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            None => f.write_str(&sci),
        };
    }

    if x.fract() == 0.0 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}
