//! Formats accepted by the `number`, `date`, `time` and `datetime` functions.

use serde::Serialize;

/// Output style of `{arg, number, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// `{n, number}`: grouped, natural fraction digits.
    Decimal,
    /// `{n, number, integer}`: truncated, grouped.
    Integer,
    /// `{n, number, percent}`: scaled by 100, up to two fraction digits.
    Percent,
}

impl NumberFormat {
    /// Resolve the optional function parameter.
    pub fn from_param(param: Option<&str>) -> Option<Self> {
        match param.unwrap_or_default() {
            "" => Some(NumberFormat::Decimal),
            "integer" => Some(NumberFormat::Integer),
            "percent" => Some(NumberFormat::Percent),
            _ => None,
        }
    }
}

/// Length of a date/time rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatetimeLength {
    /// Renders nothing.
    None,
    Short,
    Medium,
    Long,
    Full,
}

impl DatetimeLength {
    /// Resolve the optional function parameter. A missing parameter means
    /// `medium`.
    pub fn from_param(param: Option<&str>) -> Option<Self> {
        match param.unwrap_or("medium") {
            "none" => Some(DatetimeLength::None),
            "short" => Some(DatetimeLength::Short),
            "medium" => Some(DatetimeLength::Medium),
            "long" => Some(DatetimeLength::Long),
            "full" => Some(DatetimeLength::Full),
            _ => None,
        }
    }
}

/// Which parts of a timestamp a function renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatetimeCategory {
    Date,
    Time,
    DateTime,
}

impl DatetimeCategory {
    /// Resolve a function name (`date`, `time`, `datetime`).
    pub fn from_function(name: &str) -> Option<Self> {
        match name {
            "date" => Some(DatetimeCategory::Date),
            "time" => Some(DatetimeCategory::Time),
            "datetime" => Some(DatetimeCategory::DateTime),
            _ => None,
        }
    }
}
