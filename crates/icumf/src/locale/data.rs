//! Number and date/time format data for a language.

use bon::Builder;

use crate::compiler::{DatetimeCategory, DatetimeLength};

/// Symbols used when rendering numbers.
///
/// # Example
///
/// ```
/// use icumf::NumberSymbols;
///
/// let symbols = NumberSymbols::builder()
///     .decimal(",")
///     .group(".")
///     .build();
/// assert_eq!(symbols.percent_pattern, "#%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct NumberSymbols {
    #[builder(default = ".".to_string())]
    pub decimal: String,

    #[builder(default = ",".to_string())]
    pub group: String,

    /// Grouping only applies when the integer part has at least
    /// `3 + minimum_grouping_digits` digits.
    #[builder(default = 1)]
    pub minimum_grouping_digits: usize,

    /// Percent layout. `#` marks where the number goes.
    #[builder(default = "#%".to_string())]
    pub percent_pattern: String,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        NumberSymbols::builder().build()
    }
}

/// One strftime pattern per length. `none` always renders nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthPatterns {
    pub short: String,
    pub medium: String,
    pub long: String,
    pub full: String,
}

impl LengthPatterns {
    pub fn new(short: &str, medium: &str, long: &str, full: &str) -> Self {
        Self {
            short: short.to_string(),
            medium: medium.to_string(),
            long: long.to_string(),
            full: full.to_string(),
        }
    }

    pub fn get(&self, length: DatetimeLength) -> &str {
        match length {
            DatetimeLength::None => "",
            DatetimeLength::Short => &self.short,
            DatetimeLength::Medium => &self.medium,
            DatetimeLength::Long => &self.long,
            DatetimeLength::Full => &self.full,
        }
    }
}

/// Date, time and combined patterns for a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatetimePatterns {
    pub date: LengthPatterns,
    pub time: LengthPatterns,
    /// Text between the date and the time in `datetime` output.
    pub separator: LengthPatterns,
}

impl DatetimePatterns {
    /// The strftime pattern for a category and length.
    pub fn resolve(&self, category: DatetimeCategory, length: DatetimeLength) -> String {
        if length == DatetimeLength::None {
            return String::new();
        }
        match category {
            DatetimeCategory::Date => self.date.get(length).to_string(),
            DatetimeCategory::Time => self.time.get(length).to_string(),
            DatetimeCategory::DateTime => format!(
                "{}{}{}",
                self.date.get(length),
                self.separator.get(length),
                self.time.get(length)
            ),
        }
    }
}

impl Default for DatetimePatterns {
    fn default() -> Self {
        english_datetime()
    }
}

/// Format data for one language.
///
/// Plural rules are not part of this data; they come from CLDR.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct LocaleData {
    /// Language tag the data is registered under (e.g. "en", "pt-BR").
    pub language: String,

    #[builder(default)]
    pub number: NumberSymbols,

    #[builder(default)]
    pub datetime: DatetimePatterns,
}

fn english_datetime() -> DatetimePatterns {
    DatetimePatterns {
        date: LengthPatterns::new("%-m/%-d/%y", "%b %-d, %Y", "%B %-d, %Y", "%A, %B %-d, %Y"),
        time: LengthPatterns::new(
            "%-I:%M %p",
            "%-I:%M:%S %p",
            "%-I:%M:%S %p %Z",
            "%-I:%M:%S %p %Z",
        ),
        separator: LengthPatterns::new(", ", ", ", " at ", " at "),
    }
}

/// 24-hour clock shared by most European languages.
fn clock_24h() -> LengthPatterns {
    LengthPatterns::new("%H:%M", "%H:%M:%S", "%H:%M:%S %Z", "%H:%M:%S %Z")
}

fn symbols(decimal: &str, group: &str, percent_pattern: &str) -> NumberSymbols {
    NumberSymbols::builder()
        .decimal(decimal)
        .group(group)
        .percent_pattern(percent_pattern)
        .build()
}

/// Built-in data for a bare language subtag. Unknown languages get English
/// data under their own tag.
pub fn builtin(language: &str) -> LocaleData {
    let (number, datetime) = match language {
        "de" => (
            symbols(",", ".", "#\u{a0}%"),
            DatetimePatterns {
                date: LengthPatterns::new("%d.%m.%y", "%d.%m.%Y", "%-d. %B %Y", "%A, %-d. %B %Y"),
                time: clock_24h(),
                separator: LengthPatterns::new(", ", ", ", " um ", " um "),
            },
        ),
        "fr" => (
            symbols(",", "\u{202f}", "#\u{a0}%"),
            DatetimePatterns {
                date: LengthPatterns::new("%d/%m/%Y", "%-d %b %Y", "%-d %B %Y", "%A %-d %B %Y"),
                time: clock_24h(),
                separator: LengthPatterns::new(" ", ", ", " à ", " à "),
            },
        ),
        "es" => (
            NumberSymbols::builder()
                .decimal(",")
                .group(".")
                .minimum_grouping_digits(2)
                .percent_pattern("#\u{a0}%")
                .build(),
            DatetimePatterns {
                date: LengthPatterns::new("%-d/%-m/%y", "%-d %b %Y", "%-d de %B de %Y", "%A, %-d de %B de %Y"),
                time: LengthPatterns::new("%-H:%M", "%-H:%M:%S", "%-H:%M:%S %Z", "%-H:%M:%S %Z"),
                separator: LengthPatterns::new(", ", ", ", ", ", ", "),
            },
        ),
        "it" => (
            symbols(",", ".", "#%"),
            DatetimePatterns {
                date: LengthPatterns::new("%d/%m/%y", "%-d %b %Y", "%-d %B %Y", "%A %-d %B %Y"),
                time: clock_24h(),
                separator: LengthPatterns::new(", ", ", ", " alle ore ", " alle ore "),
            },
        ),
        "pt" => (
            symbols(",", ".", "#%"),
            DatetimePatterns {
                date: LengthPatterns::new("%d/%m/%Y", "%-d de %b de %Y", "%-d de %B de %Y", "%A, %-d de %B de %Y"),
                time: clock_24h(),
                separator: LengthPatterns::new(" ", " ", " às ", " às "),
            },
        ),
        "nl" => (
            symbols(",", ".", "#%"),
            DatetimePatterns {
                date: LengthPatterns::new("%d-%m-%Y", "%-d %b %Y", "%-d %B %Y", "%A %-d %B %Y"),
                time: clock_24h(),
                separator: LengthPatterns::new(" ", ", ", " om ", " om "),
            },
        ),
        "pl" => (
            NumberSymbols::builder()
                .decimal(",")
                .group("\u{a0}")
                .minimum_grouping_digits(2)
                .percent_pattern("#%")
                .build(),
            DatetimePatterns {
                date: LengthPatterns::new("%d.%m.%Y", "%-d %b %Y", "%-d %B %Y", "%A, %-d %B %Y"),
                time: clock_24h(),
                separator: LengthPatterns::new(", ", ", ", " ", " "),
            },
        ),
        "ru" | "uk" => (
            symbols(",", "\u{a0}", "#\u{a0}%"),
            DatetimePatterns {
                date: LengthPatterns::new("%d.%m.%Y", "%d %b %Y", "%-d %B %Y", "%A, %-d %B %Y"),
                time: clock_24h(),
                separator: LengthPatterns::new(", ", ", ", ", ", ", "),
            },
        ),
        "ja" | "zh" => (
            symbols(".", ",", "#%"),
            DatetimePatterns {
                date: LengthPatterns::new("%Y/%m/%d", "%Y/%m/%d", "%Y年%-m月%-d日", "%Y年%-m月%-d日 %A"),
                time: LengthPatterns::new("%H:%M", "%H:%M:%S", "%H:%M:%S %Z", "%H:%M:%S %Z"),
                separator: LengthPatterns::new(" ", " ", " ", " "),
            },
        ),
        _ => (NumberSymbols::default(), english_datetime()),
    };
    LocaleData {
        language: language.to_string(),
        number,
        datetime,
    }
}
