//! Runtime arguments for one evaluation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::interpreter::ArgumentError;
use crate::types::Value;

/// Named arguments for evaluating a message.
///
/// Each accessor performs one explicit coercion and reports an
/// [`ArgumentError`] when it is not possible. Nothing is silently dropped.
///
/// Plural evaluation rebinds the reserved `#` name while a case is
/// evaluated, so a `Context` must not be shared between concurrent
/// evaluations. Build one per call.
///
/// # Example
///
/// ```
/// use icumf::Context;
///
/// let ctx = Context::new().with("count", 3).with("name", "Ada");
/// assert_eq!(ctx.integer("count").unwrap(), 3);
/// assert_eq!(ctx.string("name").unwrap(), "Ada");
/// assert!(ctx.integer("missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: HashMap<String, Value>,
}

/// A number read from a [`Context`], keeping integers exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Bind an argument, returning the value it replaced.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    /// Put back a binding saved by [`Context::set`]. `None` removes the name.
    pub fn restore(&mut self, name: &str, previous: Option<Value>) {
        match previous {
            Some(value) => {
                self.values.insert(name.to_string(), value);
            }
            None => {
                self.values.remove(name);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value as stored.
    pub fn raw(&self, name: &str) -> Result<&Value, ArgumentError> {
        self.values.get(name).ok_or_else(|| ArgumentError::Missing {
            name: name.to_string(),
        })
    }

    /// The value as text. Every value has a text form.
    pub fn string(&self, name: &str) -> Result<String, ArgumentError> {
        Ok(self.raw(name)?.to_string())
    }

    /// The value as an integer. Floats and numeric strings are truncated
    /// toward zero.
    pub fn integer(&self, name: &str) -> Result<i64, ArgumentError> {
        match self.number(name)? {
            Numeric::Integer(n) => Ok(n),
            Numeric::Float(f) => truncate(name, f),
        }
    }

    /// The value as a float. Integers widen; numeric strings are parsed.
    pub fn float(&self, name: &str) -> Result<f64, ArgumentError> {
        match self.number(name)? {
            Numeric::Integer(n) => Ok(n as f64),
            Numeric::Float(f) => Ok(f),
        }
    }

    /// The value as a number, without losing integer precision.
    pub fn number(&self, name: &str) -> Result<Numeric, ArgumentError> {
        let value = self.raw(name)?;
        let numeric = match value {
            Value::Integer(n) => Numeric::Integer(*n),
            Value::Float(f) => Numeric::Float(*f),
            Value::String(s) => parse_numeric(name, s)?,
            Value::Timestamp(_) | Value::Opaque(_) => {
                return Err(ArgumentError::WrongType {
                    name: name.to_string(),
                    expected: "a number",
                    found: value.type_name(),
                });
            }
        };
        match numeric {
            Numeric::Float(f) if !f.is_finite() => Err(ArgumentError::NotFinite {
                name: name.to_string(),
            }),
            Numeric::Integer(_) | Numeric::Float(_) => Ok(numeric),
        }
    }

    /// The value as a timestamp. Strings are not parsed.
    pub fn timestamp(&self, name: &str) -> Result<DateTime<Utc>, ArgumentError> {
        let value = self.raw(name)?;
        value
            .as_timestamp()
            .copied()
            .ok_or_else(|| ArgumentError::WrongType {
                name: name.to_string(),
                expected: "a timestamp",
                found: value.type_name(),
            })
    }
}

fn parse_numeric(name: &str, text: &str) -> Result<Numeric, ArgumentError> {
    if let Ok(n) = text.parse::<i64>() {
        return Ok(Numeric::Integer(n));
    }
    text.parse::<f64>()
        .map(Numeric::Float)
        .map_err(|_| ArgumentError::InvalidNumber {
            name: name.to_string(),
            value: text.to_string(),
        })
}

/// Lower and upper bounds of `i64` as floats. The upper bound is exclusive.
const I64_FLOAT_MIN: f64 = -9_223_372_036_854_775_808.0;
const I64_FLOAT_MAX: f64 = 9_223_372_036_854_775_808.0;

fn truncate(name: &str, value: f64) -> Result<i64, ArgumentError> {
    let truncated = value.trunc();
    if !(I64_FLOAT_MIN..I64_FLOAT_MAX).contains(&truncated) {
        return Err(ArgumentError::OutOfRange {
            name: name.to_string(),
        });
    }
    Ok(truncated as i64)
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
