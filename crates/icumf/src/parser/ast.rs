//! Public parse tree types for message templates.
//!
//! These types are public to enable external tooling (linters, extractors,
//! editors). They are produced by [`parse_template`](super::parse_template)
//! and consumed by the compiler.

use serde::Serialize;

/// A parsed message: an ordered sequence of fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    pub fragments: Vec<Fragment>,
}

/// A single piece of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
    /// An apostrophe escape, kept raw (e.g. `'{`, `''`).
    Escaped(String),
    /// Literal text, including a lone apostrophe.
    Text(String),
    /// `#` inside a plural case body.
    Octothorpe,
    /// `{name}`
    PlainArg(PlainArg),
    /// `{name, function}` or `{name, function, param}`
    Func(Func),
    /// `{name, select|plural|selectordinal, ...cases}`
    Expr(Expr),
}

/// A bare argument reference: `{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlainArg {
    pub name: String,
}

/// A formatting function call: `{price, number, percent}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Func {
    pub arg_name: String,
    pub func_name: String,
    pub param: Option<String>,
}

/// A case-selecting expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expr {
    pub arg_name: String,
    /// `select`, `plural` or `selectordinal`; empty when the template omits it.
    pub func_name: String,
    /// Value of `offset:N`, zero when absent.
    pub offset: i64,
    pub cases: Vec<Case>,
}

/// One branch of an expression: `one {# item}` or `=0 {nothing}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Case {
    /// A keyword (`one`, `other`, `male`, ...) or an exact match (`=3`).
    pub name: String,
    pub body: Message,
}
