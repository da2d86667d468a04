//! Error types for the compiler.

use strsim::levenshtein;
use thiserror::Error;

/// A template that parsed but cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Unknown function name in `{arg, function}`.
    #[error("unsupported function '{name}'{}", did_you_mean(suggestions))]
    UnsupportedFunction {
        name: String,
        suggestions: Vec<String>,
    },

    /// Unknown expression type in `{arg, type, ...cases}`.
    #[error("unsupported expression '{name}'{}", did_you_mean(suggestions))]
    UnsupportedExpression {
        name: String,
        suggestions: Vec<String>,
    },

    /// An expression with cases but no type name.
    #[error("expression on '{arg}' has no type, expected select, plural or selectordinal")]
    MissingExpressionType { arg: String },

    /// Unknown `number` parameter.
    #[error("number format '{param}' is not supported")]
    UnsupportedNumberFormat { param: String },

    /// Unknown `date`/`time`/`datetime` parameter.
    #[error("date/time length '{param}' is not supported")]
    UnsupportedDatetimeLength { param: String },

    /// An expression with no cases.
    #[error("'{expression}' on '{arg}' has no cases")]
    MissingCases { arg: String, expression: String },

    /// An expression without an `other` case.
    #[error("'{expression}' on '{arg}' has no 'other' case")]
    MissingDefaultCase { arg: String, expression: String },

    /// `offset:N` with a negative value.
    #[error("offset {offset} on '{arg}' must not be negative")]
    NegativeOffset { arg: String, offset: i64 },

    /// `offset:N` on an expression that is not a plural.
    #[error("offset is not supported by 'select' on '{arg}'")]
    OffsetNotSupported { arg: String },

    /// A plural case that is neither a category nor `=N`.
    #[error("invalid plural case '{case}' on '{arg}'{}", did_you_mean(suggestions))]
    InvalidPluralCase {
        arg: String,
        case: String,
        suggestions: Vec<String>,
    },

    /// The same case key appears twice in one expression.
    #[error("duplicate case '{case}' on '{arg}'")]
    DuplicateCase { arg: String, case: String },

    /// A locale date/time pattern that cannot be rendered.
    #[error("invalid date/time pattern '{pattern}'")]
    InvalidPattern { pattern: String },

    /// A language tag that does not parse.
    #[error("invalid language tag '{tag}'")]
    InvalidLanguage { tag: String },

    /// The locale table has no usable data for the language.
    #[error("locale data unavailable for '{tag}': {message}")]
    Locale { tag: String, message: String },
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean '{}'?", suggestions.join("' or '"))
    }
}

/// Compute "did you mean" suggestions for an unknown name.
///
/// Returns up to 3 candidates within Levenshtein distance 1 (names of up to
/// three characters) or 2 (longer names), closest first.
pub fn compute_suggestions(target: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if target.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = available
        .iter()
        .map(|&candidate| (levenshtein(target, candidate), candidate))
        .filter(|&(distance, _)| distance <= max_distance)
        .collect();
    scored.sort_unstable();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
