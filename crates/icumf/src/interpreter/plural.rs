//! `plural` and `selectordinal` evaluation.
//!
//! Case choice runs in three steps: exact `=N` matches (only for values with
//! no significant fraction), then the offset, then the CLDR category from the
//! locale rules, falling back to `other`.
//!
//! While a case body is evaluated, `#` is bound to this expression's operand.
//! The previous binding is put back afterwards, so an outer case body that
//! uses `#` after a nested plural still sees its own value.

use crate::interpreter::node::{Evalable, POUND, Plural};
use crate::interpreter::{ArgumentError, Context, EvalError, FormatError};
use crate::types::{PluralCategory, PluralOperand, Value};

pub(crate) fn write_plural(
    node: &Plural,
    out: &mut String,
    ctx: &mut Context,
) -> Result<(), EvalError> {
    let raw = ctx.raw(&node.arg_name)?.clone();
    let operand =
        PluralOperand::from_value(&raw).map_err(|source| ArgumentError::InvalidOperand {
            name: node.arg_name.clone(),
            source,
        })?;

    let previous = ctx.set(POUND, raw);
    let result = select_case(node, operand, ctx).and_then(|case| case.write_to(out, ctx));
    ctx.restore(POUND, previous);
    result
}

/// Pick the case for `operand`, rebinding `#` when an offset applies.
fn select_case<'a>(
    node: &'a Plural,
    operand: PluralOperand,
    ctx: &mut Context,
) -> Result<&'a Evalable, EvalError> {
    if let Some(case) = node
        .exact_cases
        .get(&operand.i)
        .filter(|_| !operand.has_fraction())
    {
        return Ok(case);
    }

    let operand = if node.offset > 0 {
        let adjusted = operand.with_offset(node.offset);
        ctx.set(POUND, Value::from_unsigned(adjusted.i));
        adjusted
    } else {
        operand
    };

    let category = node.rules.plural_category(&operand, node.kind)?;
    node.category_cases
        .get(&category)
        .or_else(|| node.category_cases.get(&PluralCategory::Other))
        .ok_or_else(|| {
            FormatError::MissingDefaultCase {
                arg: node.arg_name.clone(),
            }
            .into()
        })
}
