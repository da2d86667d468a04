//! The compiled evaluation tree.

use std::collections::HashMap;
use std::sync::Arc;

use crate::compiler::{DatetimeCategory, DatetimeLength, NumberFormat};
use crate::locale::{LocaleRules, NumberSymbols};
use crate::types::{PluralCategory, PluralKind};

/// Context key bound to the operand of the innermost plural expression.
pub const POUND: &str = "#";

/// A node of a compiled message.
///
/// Trees are immutable once built and can be evaluated from many threads at
/// once, each with its own [`Context`](crate::Context).
#[derive(Debug, Clone)]
pub enum Evalable {
    /// Literal text.
    Content(String),
    /// `{name}`, or `#` bound to [`POUND`].
    PlainArg(String),
    /// A sequence of nodes, concatenated.
    Message(Vec<Evalable>),
    Select(Select),
    /// `plural` and `selectordinal`.
    Plural(Plural),
    Number(Number),
    /// `date`, `time` and `datetime`.
    Datetime(Datetime),
}

#[derive(Debug, Clone)]
pub struct Select {
    pub arg_name: String,
    /// Always contains `other`.
    pub cases: HashMap<String, Evalable>,
}

#[derive(Debug, Clone)]
pub struct Plural {
    pub arg_name: String,
    pub kind: PluralKind,
    pub offset: u64,
    /// `=N` cases, keyed by `N`.
    pub exact_cases: HashMap<u64, Evalable>,
    /// Category cases. Always contains [`PluralCategory::Other`].
    pub category_cases: HashMap<PluralCategory, Evalable>,
    pub rules: Arc<dyn LocaleRules>,
}

#[derive(Debug, Clone)]
pub struct Number {
    pub arg_name: String,
    pub format: NumberFormat,
    pub symbols: NumberSymbols,
}

#[derive(Debug, Clone)]
pub struct Datetime {
    pub arg_name: String,
    pub category: DatetimeCategory,
    pub length: DatetimeLength,
    /// strftime pattern resolved from the locale at compile time.
    pub pattern: String,
}
