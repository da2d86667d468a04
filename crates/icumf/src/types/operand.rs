//! CLDR plural operands.
//!
//! Plural rules never look at a number directly. They look at its operands:
//! the integer digits and several views of the visible fraction digits. This
//! module decomposes runtime values into those operands.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::types::Value;

/// The CLDR operand decomposition of a number.
///
/// Sign is discarded. Fraction digits are taken exactly as written, so
/// `"1.50"` and `"1.5"` produce different operands.
///
/// # Example
///
/// ```
/// use icumf::PluralOperand;
///
/// let operand: PluralOperand = "1200.50".parse().unwrap();
/// assert_eq!((operand.i, operand.v, operand.w, operand.f, operand.t), (1200, 2, 1, 50, 5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PluralOperand {
    /// Integer digits of the absolute value.
    pub i: u64,
    /// Number of visible fraction digits, with trailing zeros.
    pub v: usize,
    /// Number of visible fraction digits, without trailing zeros.
    pub w: usize,
    /// Visible fraction digits as an integer, with trailing zeros.
    pub f: u64,
    /// Visible fraction digits as an integer, without trailing zeros.
    pub t: u64,
}

/// A value that cannot be decomposed into plural operands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    #[error("'{0}' is not a valid number")]
    Invalid(String),

    #[error("non-finite number")]
    NotFinite,

    #[error("{0} has no numeric value")]
    UnsupportedType(&'static str),
}

impl PluralOperand {
    /// Operands of an integer.
    pub fn from_integer(n: i64) -> Self {
        Self {
            i: n.unsigned_abs(),
            ..Self::default()
        }
    }

    /// Operands of a float, using its shortest round-trip decimal form.
    pub fn from_float(n: f64) -> Result<Self, OperandError> {
        if !n.is_finite() {
            return Err(OperandError::NotFinite);
        }
        n.to_string().parse()
    }

    /// Operands of a runtime value. Numeric strings are parsed; timestamps and
    /// opaque values are rejected.
    pub fn from_value(value: &Value) -> Result<Self, OperandError> {
        match value {
            Value::Integer(n) => Ok(Self::from_integer(*n)),
            Value::Float(n) => Self::from_float(*n),
            Value::String(s) => s.parse(),
            Value::Timestamp(_) | Value::Opaque(_) => {
                Err(OperandError::UnsupportedType(value.type_name()))
            }
        }
    }

    /// Whether the value has a significant fractional remainder.
    pub fn has_fraction(&self) -> bool {
        self.t != 0
    }

    /// Subtract `offset` from the integer digits, clamping at zero.
    pub fn with_offset(self, offset: u64) -> Self {
        Self {
            i: self.i.saturating_sub(offset),
            ..self
        }
    }
}

impl FromStr for PluralOperand {
    type Err = OperandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || OperandError::Invalid(input.to_string());
        let unsigned = input.strip_prefix('-').unwrap_or(input);
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        let i = parse_digits(integer).ok_or_else(invalid)?;
        let Some(fraction) = fraction else {
            return Ok(Self {
                i,
                ..Self::default()
            });
        };

        let f = parse_digits(fraction).ok_or_else(invalid)?;
        let trimmed = fraction.trim_end_matches('0');
        let t = if trimmed.is_empty() {
            0
        } else {
            parse_digits(trimmed).ok_or_else(invalid)?
        };

        Ok(Self {
            i,
            v: fraction.len(),
            w: trimmed.len(),
            f,
            t,
        })
    }
}

/// Parse a non-empty run of ASCII digits that fits in a `u64`.
fn parse_digits(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Renders the operand back into the decimal form it was read from, without
/// sign. This is the form CLDR rule engines accept.
impl fmt::Display for PluralOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.i)?;
        if self.v > 0 {
            write!(f, ".{:0>width$}", self.f, width = self.v)?;
        }
        Ok(())
    }
}
