//! `number` evaluation: decimal, integer and percent output.

use crate::compiler::NumberFormat;
use crate::interpreter::node::Number;
use crate::interpreter::{Context, EvalError, Numeric};
use crate::locale::NumberSymbols;

const GROUP_SIZE: usize = 3;

pub(crate) fn write_number(
    node: &Number,
    out: &mut String,
    ctx: &mut Context,
) -> Result<(), EvalError> {
    let text = match node.format {
        NumberFormat::Decimal => match ctx.number(&node.arg_name)? {
            Numeric::Integer(n) => format_integer(n, &node.symbols),
            Numeric::Float(f) => format_decimal(f, &node.symbols),
        },
        NumberFormat::Integer => format_integer(ctx.integer(&node.arg_name)?, &node.symbols),
        NumberFormat::Percent => format_percent(ctx.float(&node.arg_name)?, &node.symbols),
    };
    out.push_str(&text);
    Ok(())
}

pub(crate) fn format_integer(n: i64, symbols: &NumberSymbols) -> String {
    let grouped = group_digits(&n.unsigned_abs().to_string(), symbols);
    if n < 0 { format!("-{grouped}") } else { grouped }
}

/// Natural fraction digits: the shortest form that reads back as `x`.
pub(crate) fn format_decimal(x: f64, symbols: &NumberSymbols) -> String {
    let digits = x.abs().to_string();
    signed(x, join_fraction(&digits, symbols))
}

/// Scaled by 100, at most two fraction digits, trailing zeros trimmed.
pub(crate) fn format_percent(x: f64, symbols: &NumberSymbols) -> String {
    let rounded = format!("{:.2}", (x * 100.0).abs());
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    let number = signed(x, join_fraction(trimmed, symbols));
    symbols.percent_pattern.replacen('#', &number, 1)
}

fn join_fraction(digits: &str, symbols: &NumberSymbols) -> String {
    match digits.split_once('.') {
        Some((integer, fraction)) => format!(
            "{}{}{fraction}",
            group_digits(integer, symbols),
            symbols.decimal
        ),
        None => group_digits(digits, symbols),
    }
}

/// Prefix `-` for negative values, unless the rendered digits are all zero.
fn signed(x: f64, digits: String) -> String {
    let is_zero = digits.chars().all(|c| !c.is_ascii_digit() || c == '0');
    if x < 0.0 && !is_zero {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Insert group separators into a run of integer digits.
pub(crate) fn group_digits(digits: &str, symbols: &NumberSymbols) -> String {
    let len = digits.len();
    if len < GROUP_SIZE + symbols.minimum_grouping_digits {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(len + len);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % GROUP_SIZE == 0 {
            grouped.push_str(&symbols.group);
        }
        grouped.push(digit);
    }
    grouped
}
