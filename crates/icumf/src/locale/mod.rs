//! Locale rule tables.
//!
//! Compilation resolves a language tag to a [`LocaleRules`] once, through a
//! caller-supplied [`LocaleTable`]. The compiled tree holds on to the rules it
//! needs, so nothing here is global state: tests can inject a fake table, and
//! two tables can coexist in one process.

mod cldr;
mod data;

use std::fmt::Debug;
use std::sync::Arc;

pub use cldr::CldrLocaleTable;
pub use data::{DatetimePatterns, LengthPatterns, LocaleData, NumberSymbols, builtin};

use crate::compiler::CompileError;
use crate::interpreter::FormatError;
use crate::types::{PluralCategory, PluralKind, PluralOperand};

/// Plural rules and format data for one language.
///
/// Implementations must be immutable once built; compiled messages share them
/// across threads.
pub trait LocaleRules: Debug + Send + Sync {
    /// The language tag these rules serve.
    fn language(&self) -> &str;

    /// The CLDR category of an operand.
    fn plural_category(
        &self,
        operand: &PluralOperand,
        kind: PluralKind,
    ) -> Result<PluralCategory, FormatError>;

    /// Separators and percent pattern used by `{x, number}`.
    fn number_symbols(&self) -> &NumberSymbols;

    /// Strftime patterns used by `{x, date}`, `{x, time}` and `{x, datetime}`.
    fn datetime_patterns(&self) -> &DatetimePatterns;
}

/// Resolves language tags to rules.
pub trait LocaleTable {
    fn rules(&self, language: &str) -> Result<Arc<dyn LocaleRules>, CompileError>;
}

impl<T: LocaleTable + ?Sized> LocaleTable for Arc<T> {
    fn rules(&self, language: &str) -> Result<Arc<dyn LocaleRules>, CompileError> {
        (**self).rules(language)
    }
}
