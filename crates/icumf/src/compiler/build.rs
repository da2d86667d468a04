//! Parse tree to evaluation tree.
//!
//! Everything that can be checked without runtime arguments is checked here:
//! function and expression names, number formats, date/time lengths and
//! patterns, case names, offsets and the mandatory `other` case.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use crate::compiler::error::compute_suggestions;
use crate::compiler::{CompileError, DatetimeCategory, DatetimeLength, NumberFormat};
use crate::interpreter::{self, Datetime, Evalable, Number, POUND, Plural, Select};
use crate::locale::LocaleRules;
use crate::parser::{Case, Expr, Fragment, Func, Message};
use crate::types::{PluralCategory, PluralKind};

const FUNCTIONS: &[&str] = &["number", "date", "time", "datetime"];
const EXPRESSIONS: &[&str] = &["select", "plural", "selectordinal"];
const PLURAL_KEYWORDS: &[&str] = &["zero", "one", "two", "few", "many", "other"];

/// Compile a parsed message against one language's rules.
///
/// A message with a single fragment compiles to that fragment's node.
pub fn build(message: &Message, rules: &Arc<dyn LocaleRules>) -> Result<Evalable, CompileError> {
    let nodes = message
        .fragments
        .iter()
        .map(|fragment| build_fragment(fragment, rules))
        .collect::<Result<Vec<_>, _>>()?;
    match <[Evalable; 1]>::try_from(nodes) {
        Ok([node]) => Ok(node),
        Err(nodes) => Ok(Evalable::Message(nodes)),
    }
}

fn build_fragment(
    fragment: &Fragment,
    rules: &Arc<dyn LocaleRules>,
) -> Result<Evalable, CompileError> {
    match fragment {
        Fragment::Text(text) => Ok(Evalable::Content(text.clone())),
        Fragment::Escaped(escape) => Ok(Evalable::Content(
            escape.strip_prefix('\'').unwrap_or(escape).to_string(),
        )),
        Fragment::Octothorpe => Ok(Evalable::PlainArg(POUND.to_string())),
        Fragment::PlainArg(arg) => Ok(Evalable::PlainArg(arg.name.clone())),
        Fragment::Func(func) => build_func(func, rules),
        Fragment::Expr(expr) => build_expr(expr, rules),
    }
}

fn build_func(func: &Func, rules: &Arc<dyn LocaleRules>) -> Result<Evalable, CompileError> {
    let name = func.func_name.as_str();
    let param = func.param.as_deref();

    if name == "number" {
        let format =
            NumberFormat::from_param(param).ok_or_else(|| CompileError::UnsupportedNumberFormat {
                param: param.unwrap_or_default().to_string(),
            })?;
        return Ok(Evalable::Number(Number {
            arg_name: func.arg_name.clone(),
            format,
            symbols: rules.number_symbols().clone(),
        }));
    }

    if let Some(category) = DatetimeCategory::from_function(name) {
        let length = DatetimeLength::from_param(param).ok_or_else(|| {
            CompileError::UnsupportedDatetimeLength {
                param: param.unwrap_or_default().to_string(),
            }
        })?;
        let pattern = rules.datetime_patterns().resolve(category, length);
        if !interpreter::is_valid_pattern(&pattern) {
            return Err(CompileError::InvalidPattern { pattern });
        }
        return Ok(Evalable::Datetime(Datetime {
            arg_name: func.arg_name.clone(),
            category,
            length,
            pattern,
        }));
    }

    // `{x, select}` parses as a function call.
    if EXPRESSIONS.contains(&name) {
        return Err(CompileError::MissingCases {
            arg: func.arg_name.clone(),
            expression: name.to_string(),
        });
    }

    let mut candidates = FUNCTIONS.to_vec();
    candidates.extend_from_slice(EXPRESSIONS);
    Err(CompileError::UnsupportedFunction {
        name: name.to_string(),
        suggestions: compute_suggestions(name, &candidates),
    })
}

fn build_expr(expr: &Expr, rules: &Arc<dyn LocaleRules>) -> Result<Evalable, CompileError> {
    let kind = match expr.func_name.as_str() {
        "" => {
            return Err(CompileError::MissingExpressionType {
                arg: expr.arg_name.clone(),
            });
        }
        "select" => return build_select(expr, rules),
        "plural" => PluralKind::Cardinal,
        "selectordinal" => PluralKind::Ordinal,
        other => {
            return Err(CompileError::UnsupportedExpression {
                name: other.to_string(),
                suggestions: compute_suggestions(other, EXPRESSIONS),
            });
        }
    };
    build_plural(expr, kind, rules)
}

fn build_select(expr: &Expr, rules: &Arc<dyn LocaleRules>) -> Result<Evalable, CompileError> {
    require_cases(expr)?;
    if expr.offset != 0 {
        return Err(CompileError::OffsetNotSupported {
            arg: expr.arg_name.clone(),
        });
    }

    let mut cases = HashMap::with_capacity(expr.cases.len());
    for case in &expr.cases {
        match cases.entry(case.name.clone()) {
            Entry::Occupied(_) => return Err(duplicate(expr, case)),
            Entry::Vacant(slot) => {
                slot.insert(build(&case.body, rules)?);
            }
        }
    }

    if !cases.contains_key("other") {
        return Err(CompileError::MissingDefaultCase {
            arg: expr.arg_name.clone(),
            expression: expr.func_name.clone(),
        });
    }

    Ok(Evalable::Select(Select {
        arg_name: expr.arg_name.clone(),
        cases,
    }))
}

fn build_plural(
    expr: &Expr,
    kind: PluralKind,
    rules: &Arc<dyn LocaleRules>,
) -> Result<Evalable, CompileError> {
    require_cases(expr)?;
    let offset = u64::try_from(expr.offset).map_err(|_| CompileError::NegativeOffset {
        arg: expr.arg_name.clone(),
        offset: expr.offset,
    })?;

    let mut exact_cases = HashMap::new();
    let mut category_cases = HashMap::new();
    for case in &expr.cases {
        let body = build(&case.body, rules)?;
        let is_new = match plural_key(expr, case)? {
            PluralKey::Exact(n) => exact_cases.insert(n, body).is_none(),
            PluralKey::Category(category) => category_cases.insert(category, body).is_none(),
        };
        if !is_new {
            return Err(duplicate(expr, case));
        }
    }

    if !category_cases.contains_key(&PluralCategory::Other) {
        return Err(CompileError::MissingDefaultCase {
            arg: expr.arg_name.clone(),
            expression: expr.func_name.clone(),
        });
    }

    Ok(Evalable::Plural(Plural {
        arg_name: expr.arg_name.clone(),
        kind,
        offset,
        exact_cases,
        category_cases,
        rules: Arc::clone(rules),
    }))
}

enum PluralKey {
    Exact(u64),
    Category(PluralCategory),
}

fn plural_key(expr: &Expr, case: &Case) -> Result<PluralKey, CompileError> {
    if let Some(digits) = case.name.strip_prefix('=') {
        if let Ok(n) = digits.parse() {
            return Ok(PluralKey::Exact(n));
        }
    } else if let Some(category) = PluralCategory::from_keyword(&case.name) {
        return Ok(PluralKey::Category(category));
    }
    Err(CompileError::InvalidPluralCase {
        arg: expr.arg_name.clone(),
        case: case.name.clone(),
        suggestions: compute_suggestions(&case.name, PLURAL_KEYWORDS),
    })
}

fn require_cases(expr: &Expr) -> Result<(), CompileError> {
    if expr.cases.is_empty() {
        return Err(CompileError::MissingCases {
            arg: expr.arg_name.clone(),
            expression: expr.func_name.clone(),
        });
    }
    Ok(())
}

fn duplicate(expr: &Expr, case: &Case) -> CompileError {
    CompileError::DuplicateCase {
        arg: expr.arg_name.clone(),
        case: case.name.clone(),
    }
}
