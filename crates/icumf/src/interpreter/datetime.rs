//! `date`, `time` and `datetime` evaluation.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};

use crate::interpreter::node::Datetime;
use crate::interpreter::{Context, EvalError, FormatError};

pub(crate) fn write_datetime(
    node: &Datetime,
    out: &mut String,
    ctx: &mut Context,
) -> Result<(), EvalError> {
    let timestamp = ctx.timestamp(&node.arg_name)?;
    if node.pattern.is_empty() {
        return Ok(());
    }
    write!(out, "{}", timestamp.format(&node.pattern)).map_err(|_| FormatError::Pattern {
        pattern: node.pattern.clone(),
    })?;
    Ok(())
}

/// Whether every specifier in a strftime pattern is understood.
pub(crate) fn is_valid_pattern(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}
