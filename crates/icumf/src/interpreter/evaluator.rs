//! Evaluation of compiled messages.
//!
//! Every node writes into one output buffer. The first error aborts the walk
//! and the buffer is dropped, so callers only ever see a complete string.

use crate::interpreter::node::{Evalable, Select};
use crate::interpreter::{Context, EvalError, FormatError, datetime, number, plural};

impl Evalable {
    /// Evaluate this node against `ctx`.
    ///
    /// The context is borrowed mutably because plural expressions bind `#`
    /// while their case is evaluated. Bindings are restored before this
    /// returns, on success and on error alike.
    pub fn eval(&self, ctx: &mut Context) -> Result<String, EvalError> {
        let mut out = String::new();
        self.write_to(&mut out, ctx)?;
        Ok(out)
    }

    pub(crate) fn write_to(&self, out: &mut String, ctx: &mut Context) -> Result<(), EvalError> {
        match self {
            Evalable::Content(text) => out.push_str(text),
            Evalable::PlainArg(name) => out.push_str(&ctx.string(name)?),
            Evalable::Message(children) => {
                for child in children {
                    child.write_to(out, ctx)?;
                }
            }
            Evalable::Select(select) => write_select(select, out, ctx)?,
            Evalable::Plural(node) => plural::write_plural(node, out, ctx)?,
            Evalable::Number(node) => number::write_number(node, out, ctx)?,
            Evalable::Datetime(node) => datetime::write_datetime(node, out, ctx)?,
        }
        Ok(())
    }
}

fn write_select(select: &Select, out: &mut String, ctx: &mut Context) -> Result<(), EvalError> {
    let key = ctx.string(&select.arg_name)?;
    let case = select
        .cases
        .get(&key)
        .or_else(|| select.cases.get("other"))
        .ok_or_else(|| FormatError::MissingDefaultCase {
            arg: select.arg_name.clone(),
        })?;
    case.write_to(out, ctx)
}
