//! CLDR-backed locale table.
//!
//! Plural rules come from `icu_plurals` compiled data. `PluralRules` are
//! cached per thread, keyed by language identifier and rule type, so repeated
//! evaluation never rebuilds them. Format data comes from [`LocaleData`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use fixed_decimal::Decimal;
use icu_locale_core::Locale;
use icu_plurals::{PluralOperands, PluralRuleType, PluralRules};

use super::data::{self, DatetimePatterns, LocaleData, NumberSymbols};
use super::{LocaleRules, LocaleTable};
use crate::compiler::CompileError;
use crate::interpreter::FormatError;
use crate::types::{PluralCategory, PluralKind, PluralOperand};

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by [`rules_key`] and kind.
    static PLURAL_RULES_CACHE: RefCell<Vec<(String, PluralKind, PluralRules)>> =
        const { RefCell::new(Vec::new()) };
}

/// Cache key for a locale's plural rules: the language identifier without
/// Unicode extensions.
///
/// The region stays in the key because some regions carry their own rules
/// (`pt-PT` differs from `pt`). Extensions never affect plural rules, so tags
/// that only differ in `-u-` keywords share one entry.
fn rules_key(locale: &Locale) -> String {
    locale.id.to_string()
}

/// Run `f` with the cached rules for `(locale, kind)`, building them on first use.
fn with_plural_rules<R>(
    locale: &Locale,
    kind: PluralKind,
    f: impl FnOnce(&PluralRules) -> R,
) -> Result<R, String> {
    let key = rules_key(locale);
    PLURAL_RULES_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if let Some((_, _, rules)) = cache
            .iter()
            .find(|(cached, cached_kind, _)| *cached == key && *cached_kind == kind)
        {
            return Ok(f(rules));
        }

        let rule_type = match kind {
            PluralKind::Cardinal => PluralRuleType::Cardinal,
            PluralKind::Ordinal => PluralRuleType::Ordinal,
        };
        let rules = PluralRules::try_new(locale.clone().into(), rule_type.into())
            .map_err(|e| e.to_string())?;
        let result = f(&rules);
        cache.push((key, kind, rules));
        Ok(result)
    })
}

/// Rules for one language: CLDR plurals plus [`LocaleData`] formats.
#[derive(Debug)]
pub struct CldrRules {
    locale: Locale,
    tag: String,
    data: LocaleData,
}

impl LocaleRules for CldrRules {
    fn language(&self) -> &str {
        &self.tag
    }

    fn plural_category(
        &self,
        operand: &PluralOperand,
        kind: PluralKind,
    ) -> Result<PluralCategory, FormatError> {
        let failure = |message: String| FormatError::PluralRules {
            language: self.tag.clone(),
            message,
        };
        let decimal = Decimal::try_from_str(&operand.to_string())
            .map_err(|_| failure(format!("cannot read operand {operand}")))?;
        let operands = PluralOperands::from(&decimal);
        let category = with_plural_rules(&self.locale, kind, |rules| rules.category_for(operands))
            .map_err(failure)?;
        Ok(category.into())
    }

    fn number_symbols(&self) -> &NumberSymbols {
        &self.data.number
    }

    fn datetime_patterns(&self) -> &DatetimePatterns {
        &self.data.datetime
    }
}

/// The default [`LocaleTable`].
///
/// Format data is looked up by full tag, then by bare language, then taken
/// from the built-in table (English for languages it does not know).
///
/// # Example
///
/// ```
/// use icumf::{CldrLocaleTable, LocaleData, NumberSymbols, LocaleTable};
///
/// let table = CldrLocaleTable::new().with_data(
///     LocaleData::builder()
///         .language("en-CH")
///         .number(NumberSymbols::builder().group("'").build())
///         .build(),
/// );
/// let rules = table.rules("en-CH").unwrap();
/// assert_eq!(rules.number_symbols().group, "'");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CldrLocaleTable {
    custom: HashMap<String, LocaleData>,
}

impl CldrLocaleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register custom format data, replacing any data for the same tag.
    pub fn with_data(mut self, data: LocaleData) -> Self {
        self.insert(data);
        self
    }

    /// Register custom format data under its canonical tag (`en-ch` is
    /// stored as `en-CH`). Tags that do not parse are stored as given.
    pub fn insert(&mut self, data: LocaleData) {
        let tag = Locale::try_from_str(&data.language)
            .map_or_else(|_| data.language.clone(), |locale| locale.to_string());
        self.custom.insert(tag, data);
    }
}

impl LocaleTable for CldrLocaleTable {
    fn rules(&self, language: &str) -> Result<Arc<dyn LocaleRules>, CompileError> {
        let locale = Locale::try_from_str(language).map_err(|_| CompileError::InvalidLanguage {
            tag: language.to_string(),
        })?;
        let tag = locale.to_string();
        let bare = locale.id.language.as_str();

        let data = self
            .custom
            .get(&tag)
            .or_else(|| self.custom.get(bare))
            .cloned()
            .unwrap_or_else(|| data::builtin(bare));

        for kind in [PluralKind::Cardinal, PluralKind::Ordinal] {
            with_plural_rules(&locale, kind, |_| ()).map_err(|message| {
                CompileError::Locale {
                    tag: tag.clone(),
                    message,
                }
            })?;
        }

        Ok(Arc::new(CldrRules { locale, tag, data }))
    }
}
