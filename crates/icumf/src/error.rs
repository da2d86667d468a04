//! Top-level error type.

use thiserror::Error;

use crate::compiler::CompileError;
use crate::interpreter::EvalError;
use crate::parser::ParseError;

/// Any failure of [`compile`](crate::compile) or [`evaluate`](crate::evaluate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The template is malformed.
    #[error(transparent)]
    Syntax(#[from] ParseError),

    /// The template parsed but cannot be compiled.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Evaluation failed. Carries the template so the failure can be traced
    /// back to its source.
    #[error("evaluating '{template}': {source}")]
    Evaluation {
        template: String,
        #[source]
        source: EvalError,
    },
}
