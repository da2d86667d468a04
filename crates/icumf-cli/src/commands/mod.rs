//! CLI command implementations.

mod check;
mod eval;
mod parse;

pub use check::{run_check, CheckArgs};
pub use eval::{run_eval, EvalArgs};
pub use parse::{run_parse, ParseArgs};
