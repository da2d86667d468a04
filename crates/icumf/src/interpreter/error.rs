//! Error types for message evaluation.

use thiserror::Error;

use crate::types::OperandError;

/// An argument that is missing or cannot be coerced as required.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    #[error("missing argument '{name}'")]
    Missing { name: String },

    #[error("argument '{name}' must be {expected}, found {found}")]
    WrongType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("argument '{name}' is not a number: '{value}'")]
    InvalidNumber { name: String, value: String },

    #[error("argument '{name}' cannot select a plural case: {source}")]
    InvalidOperand {
        name: String,
        #[source]
        source: OperandError,
    },

    #[error("argument '{name}' is not a finite number")]
    NotFinite { name: String },

    #[error("argument '{name}' does not fit in a 64-bit integer")]
    OutOfRange { name: String },
}

impl ArgumentError {
    /// The argument the error is about.
    pub fn name(&self) -> &str {
        match self {
            ArgumentError::Missing { name }
            | ArgumentError::WrongType { name, .. }
            | ArgumentError::InvalidNumber { name, .. }
            | ArgumentError::InvalidOperand { name, .. }
            | ArgumentError::NotFinite { name }
            | ArgumentError::OutOfRange { name } => name,
        }
    }
}

/// A failure inside the formatting machinery. Compile-time validation is
/// meant to rule these out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("no case matched '{arg}' and there is no 'other' case")]
    MissingDefaultCase { arg: String },

    #[error("cannot render date/time pattern '{pattern}'")]
    Pattern { pattern: String },

    #[error("plural rules unavailable for '{language}': {message}")]
    PluralRules { language: String, message: String },
}

/// Any error raised while evaluating a compiled message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Format(#[from] FormatError),
}
