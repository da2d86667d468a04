//! Evaluation engine for compiled messages.
//!
//! This module holds the evaluation tree produced by the compiler, the
//! runtime [`Context`] it reads arguments from, and the per-node evaluation
//! logic: select dispatch, CLDR plural selection, and number and date/time
//! formatting.

mod context;
mod datetime;
mod error;
mod evaluator;
mod node;
mod number;
mod plural;

pub use context::{Context, Numeric};
pub use error::{ArgumentError, EvalError, FormatError};
pub use node::{Datetime, Evalable, Number, POUND, Plural, Select};

pub(crate) use datetime::is_valid_pattern;
