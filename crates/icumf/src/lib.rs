//! Compiler and evaluator for ICU MessageFormat templates.
//!
//! A template is compiled once per language into an immutable evaluation
//! tree, then evaluated against named runtime arguments:
//!
//! ```
//! use icumf::{CldrLocaleTable, args, compile};
//!
//! let table = CldrLocaleTable::new();
//! let message = compile(
//!     "{host} invited {guests, plural, offset:1 =0 {nobody} =1 {{guest}} one {{guest} and one other} other {{guest} and # others}}",
//!     "en",
//!     &table,
//! )
//! .unwrap();
//!
//! let mut ctx = args! { "host" => "Ada", "guest" => "Bob", "guests" => 3 };
//! assert_eq!(message.format(&mut ctx).unwrap(), "Ada invited Bob and 2 others");
//! ```

pub mod cache;
pub mod compiler;
pub mod error;
pub mod interpreter;
pub mod locale;
pub mod message;
pub mod parser;
pub mod types;

pub use cache::MessageCache;
pub use compiler::{CompileError, DatetimeCategory, DatetimeLength, NumberFormat};
pub use error::Error;
pub use interpreter::{ArgumentError, Context, EvalError, Evalable, FormatError, Numeric};
pub use locale::{
    CldrLocaleTable, DatetimePatterns, LengthPatterns, LocaleData, LocaleRules, LocaleTable,
    NumberSymbols,
};
pub use message::{MessageFormat, compile, evaluate};
pub use parser::{ParseError, parse_template, tokenize};
pub use types::{OpaqueValue, OperandError, PluralCategory, PluralKind, PluralOperand, Value};

/// Creates a [`Context`] from name/value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, strings and
/// timestamps can be passed directly.
///
/// # Example
///
/// ```
/// use icumf::args;
///
/// let ctx = args! { "count" => 3, "name" => "Alice" };
/// assert_eq!(ctx.len(), 2);
/// assert_eq!(ctx.integer("count").unwrap(), 3);
/// assert_eq!(ctx.string("name").unwrap(), "Alice");
/// ```
#[macro_export]
macro_rules! args {
    {} => {
        $crate::Context::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut ctx = $crate::Context::new();
            $(
                ctx.set($key, ::std::convert::Into::<$crate::Value>::into($value));
            )+
            ctx
        }
    };
}
