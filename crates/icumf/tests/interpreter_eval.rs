//! Integration tests for message evaluation.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use icumf::{
    ArgumentError, CldrLocaleTable, CompileError, Context, DatetimePatterns, Error, EvalError,
    FormatError, LocaleRules, LocaleTable, NumberSymbols, PluralCategory, PluralKind,
    PluralOperand, Value, args, compile,
};

fn eval_in(language: &str, template: &str, mut ctx: Context) -> Result<String, Error> {
    compile(template, language, &CldrLocaleTable::new())
        .unwrap()
        .format(&mut ctx)
}

fn eval(template: &str, ctx: Context) -> String {
    eval_in("en", template, ctx).unwrap()
}

fn eval_err(template: &str, ctx: Context) -> EvalError {
    match eval_in("en", template, ctx) {
        Err(Error::Evaluation { source, .. }) => source,
        other => panic!("expected an evaluation error, got {other:?}"),
    }
}

fn gagarin() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1961, 4, 12, 6, 7, 3).unwrap()
}

// =============================================================================
// Text and plain arguments
// =============================================================================

#[test]
fn test_literal_passthrough() {
    assert_eq!(eval("Hello, world!", args! {}), "Hello, world!");
}

#[test]
fn test_escapes_render_literally() {
    assert_eq!(eval("foo '{ '' ' foo", args! {}), "foo { ' ' foo");
}

#[test]
fn test_plain_arguments() {
    let ctx = args! { "name" => "Ada", "n" => 42, "x" => 1.5 };
    assert_eq!(eval("{name}: {n} / {x}", ctx), "Ada: 42 / 1.5");
}

#[test]
fn test_plain_argument_numbers_are_not_grouped() {
    assert_eq!(eval("{n}", args! { "n" => 1234567 }), "1234567");
}

#[test]
fn test_plain_timestamp_is_rfc3339() {
    assert_eq!(eval("{d}", args! { "d" => gagarin() }), "1961-04-12T06:07:03Z");
}

#[test]
fn test_opaque_argument() {
    let ctx = Context::new().with("v", Value::opaque('x'));
    assert_eq!(eval("<{v}>", ctx), "<x>");
}

#[test]
fn test_missing_argument_names_template() {
    let template = "Hi {name}";
    let err = eval_in("en", template, args! {}).unwrap_err();
    match err {
        Error::Evaluation { template: t, source } => {
            assert_eq!(t, template);
            assert_eq!(
                source,
                EvalError::Argument(ArgumentError::Missing {
                    name: "name".into()
                })
            );
        }
        other => panic!("unexpected error {other:?}"),
    }
}

// =============================================================================
// Select
// =============================================================================

#[test]
fn test_select_matches_case() {
    let template = "{x, select, a {A} other {B}}";
    assert_eq!(eval(template, args! { "x" => "a" }), "A");
    assert_eq!(eval(template, args! { "x" => "z" }), "B");
}

#[test]
fn test_select_coerces_numbers_to_text() {
    let template = "{x, select, a {A} other {B}}";
    assert_eq!(eval(template, args! { "x" => 7 }), "B");
}

#[test]
fn test_select_missing_argument() {
    assert!(matches!(
        eval_err("{x, select, a {A} other {B}}", args! {}),
        EvalError::Argument(ArgumentError::Missing { .. })
    ));
}

#[test]
fn test_nested_select_inside_plural() {
    let template = "{n, plural, one {{name} has one {g, select, female {her} male {his} other {their}} item} other {{name} has # {g, select, female {her} male {his} other {their}} items}}";
    assert_eq!(
        eval(template, args! { "n" => 1, "name" => "Ada", "g" => "female" }),
        "Ada has one her item"
    );
    assert_eq!(
        eval(template, args! { "n" => 3, "name" => "Bob", "g" => "x" }),
        "Bob has 3 their items"
    );
}

#[test]
fn test_nested_missing_argument_is_error() {
    let template = "{n, plural, other {{g, select, other {{who}}}}}";
    let err = eval_err(template, args! { "n" => 2, "g" => "x" });
    assert_eq!(err.to_string(), "missing argument 'who'");
}

// =============================================================================
// Plural
// =============================================================================

#[test]
fn test_english_cardinal() {
    let template = "{n, plural, one {# file} other {# files}}";
    assert_eq!(eval(template, args! { "n" => 0 }), "0 files");
    assert_eq!(eval(template, args! { "n" => 1 }), "1 file");
    assert_eq!(eval(template, args! { "n" => 2 }), "2 files");
    assert_eq!(eval(template, args! { "n" => -1 }), "-1 file");
    assert_eq!(eval(template, args! { "n" => 1.5 }), "1.5 files");
}

#[test]
fn test_visible_fraction_digits_change_category() {
    let template = "{n, plural, one {# file} other {# files}}";
    assert_eq!(eval(template, args! { "n" => "1" }), "1 file");
    assert_eq!(eval(template, args! { "n" => "1.0" }), "1.0 files");
    assert_eq!(eval(template, args! { "n" => "3.14159" }), "3.14159 files");
}

#[test]
fn test_exact_match_precedes_category() {
    let template = "{n, plural, =1 {exact} one {cat} other {O}}";
    assert_eq!(eval(template, args! { "n" => 1 }), "exact");
}

#[test]
fn test_exact_match_ignores_trailing_zeros_only() {
    let template = "{n, plural, =1 {exact} other {O}}";
    assert_eq!(eval(template, args! { "n" => "1.0" }), "exact");
    assert_eq!(eval(template, args! { "n" => 1.5 }), "O");
}

#[test]
fn test_offset_semantics() {
    let template = "{n, plural, offset:1 =1 {zero-before} one {one-after} other {# other}}";
    assert_eq!(eval(template, args! { "n" => 1 }), "zero-before");
    assert_eq!(eval(template, args! { "n" => 2 }), "one-after");
    assert_eq!(eval(template, args! { "n" => 3 }), "2 other");
}

#[test]
fn test_offset_two() {
    let template = "{n, plural, offset:2 other {#}}";
    assert_eq!(eval(template, args! { "n" => 4 }), "2");
}

#[test]
fn test_offset_clamps_at_zero() {
    let template = "{n, plural, offset:5 other {#}}";
    assert_eq!(eval(template, args! { "n" => 2 }), "0");
}

#[test]
fn test_pound_keeps_raw_value_without_offset() {
    let template = "{n, plural, other {# items}}";
    assert_eq!(eval(template, args! { "n" => "1.50" }), "1.50 items");
}

#[test]
fn test_russian_cardinal() {
    let template = "{n, plural, one {one} few {few} many {many} other {other}}";
    let cases = [(1, "one"), (2, "few"), (5, "many"), (11, "many"), (21, "one"), (22, "few")];
    for (n, expected) in cases {
        assert_eq!(eval_in("ru", template, args! { "n" => n }).unwrap(), expected, "n={n}");
    }
    assert_eq!(eval_in("ru", template, args! { "n" => 1.5 }).unwrap(), "other");
}

#[test]
fn test_arabic_cardinal() {
    let template =
        "{n, plural, zero {zero} one {one} two {two} few {few} many {many} other {other}}";
    let cases = [
        (0, "zero"),
        (1, "one"),
        (2, "two"),
        (3, "few"),
        (11, "many"),
        (100, "other"),
    ];
    for (n, expected) in cases {
        assert_eq!(eval_in("ar", template, args! { "n" => n }).unwrap(), expected, "n={n}");
    }
}

#[test]
fn test_afrikaans_one_with_fraction_digits() {
    let template = "{n, plural, one {one} other {other}}";
    assert_eq!(eval_in("af", template, args! { "n" => "1.0" }).unwrap(), "one");
}

#[test]
fn test_english_ordinal() {
    let template = "{n, selectordinal, one {#st} two {#nd} few {#rd} other {#th}}";
    let cases = [
        (1, "1st"),
        (2, "2nd"),
        (3, "3rd"),
        (4, "4th"),
        (11, "11th"),
        (12, "12th"),
        (21, "21st"),
        (112, "112th"),
    ];
    for (n, expected) in cases {
        assert_eq!(eval(template, args! { "n" => n }), expected);
    }
}

#[test]
fn test_missing_category_falls_back_to_other() {
    let template = "{n, plural, other {fallback}}";
    assert_eq!(eval_in("ru", template, args! { "n" => 1 }).unwrap(), "fallback");
}

#[test]
fn test_plural_invalid_string() {
    let err = eval_err("{n, plural, other {#}}", args! { "n" => "abc" });
    assert!(matches!(err, EvalError::Argument(ArgumentError::InvalidOperand { .. })));
}

#[test]
fn test_plural_rejects_timestamp() {
    let err = eval_err("{n, plural, other {#}}", args! { "n" => gagarin() });
    assert!(matches!(err, EvalError::Argument(ArgumentError::InvalidOperand { .. })));
}

// =============================================================================
// Octothorpe scoping
// =============================================================================

#[test]
fn test_outer_pound_after_nested_plural() {
    let template = "{a, plural, other {{b, plural, other {# inner}} # outer}}";
    assert_eq!(eval(template, args! { "a" => 5, "b" => 2 }), "2 inner 5 outer");
}

#[test]
fn test_outer_pound_after_nested_offset_plural() {
    let template = "{a, plural, offset:1 other {{b, plural, offset:1 other {#}}/#}}";
    assert_eq!(eval(template, args! { "a" => 10, "b" => 3 }), "2/9");
}

#[test]
fn test_pound_binding_removed_after_evaluation() {
    let message = compile("{n, plural, other {#}}", "en", &CldrLocaleTable::new()).unwrap();
    let mut ctx = args! { "n" => 3 };
    assert_eq!(message.format(&mut ctx).unwrap(), "3");
    assert!(!ctx.contains("#"));
}

#[test]
fn test_pound_binding_restored_on_error() {
    let message =
        compile("{n, plural, other {# {missing}}}", "en", &CldrLocaleTable::new()).unwrap();
    let mut ctx = args! { "n" => 3, "#" => "caller" };
    assert!(message.format(&mut ctx).is_err());
    assert_eq!(ctx.string("#").unwrap(), "caller");
}

#[test]
fn test_pound_outside_plural_is_missing() {
    let err = eval_err("{x, select, other {#}}", args! { "x" => "a" });
    assert_eq!(
        err,
        EvalError::Argument(ArgumentError::Missing { name: "#".into() })
    );
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn test_number_decimal() {
    assert_eq!(eval("{n, number}", args! { "n" => "3.14" }), "3.14");
    assert_eq!(eval("{n, number}", args! { "n" => 1234.5 }), "1,234.5");
    assert_eq!(eval("{n, number}", args! { "n" => 1000 }), "1,000");
}

#[test]
fn test_number_integer() {
    let template = "{n, number, integer}";
    assert_eq!(eval(template, args! { "n" => "3.14" }), "3");
    assert_eq!(eval(template, args! { "n" => 2.99 }), "2");
    assert_eq!(eval(template, args! { "n" => 123456789 }), "123,456,789");
    assert_eq!(eval(template, args! { "n" => -42 }), "-42");
}

#[test]
fn test_number_percent() {
    let template = "{n, number, percent}";
    assert_eq!(eval(template, args! { "n" => 0.0314 }), "3.14%");
    assert_eq!(eval(template, args! { "n" => 0.5 }), "50%");
    assert_eq!(eval(template, args! { "n" => "1.314" }), "131.4%");
    assert_eq!(eval(template, args! { "n" => 1 }), "100%");
}

#[test]
fn test_number_rejects_non_numeric_text() {
    for template in ["{n, number}", "{n, number, integer}", "{n, number, percent}"] {
        let err = eval_err(template, args! { "n" => "foo" });
        assert_eq!(
            err,
            EvalError::Argument(ArgumentError::InvalidNumber {
                name: "n".into(),
                value: "foo".into(),
            }),
            "{template}"
        );
    }
}

#[test]
fn test_number_rejects_non_finite() {
    let err = eval_err("{n, number}", args! { "n" => f64::NAN });
    assert!(matches!(err, EvalError::Argument(ArgumentError::NotFinite { .. })));
}

#[test]
fn test_number_german_symbols() {
    let ctx = args! { "n" => 1234.5, "p" => 0.25 };
    assert_eq!(
        eval_in("de", "{n, number} {p, number, percent}", ctx).unwrap(),
        "1.234,5 25\u{a0}%"
    );
}

// =============================================================================
// Dates and times
// =============================================================================

#[test]
fn test_datetime_lengths() {
    let cases = [
        ("{d, datetime, short}", "4/12/61, 6:07 AM"),
        ("{d, datetime, medium}", "Apr 12, 1961, 6:07:03 AM"),
        ("{d, datetime}", "Apr 12, 1961, 6:07:03 AM"),
        ("{d, datetime, long}", "April 12, 1961 at 6:07:03 AM UTC"),
        (
            "{d, datetime, full}",
            "Wednesday, April 12, 1961 at 6:07:03 AM UTC",
        ),
    ];
    for (template, expected) in cases {
        assert_eq!(eval(template, args! { "d" => gagarin() }), expected);
    }
}

#[test]
fn test_date_and_time_only() {
    assert_eq!(eval("{d, date, short}", args! { "d" => gagarin() }), "4/12/61");
    assert_eq!(eval("{d, time, short}", args! { "d" => gagarin() }), "6:07 AM");
    assert_eq!(eval("{d, date, long}", args! { "d" => gagarin() }), "April 12, 1961");
}

#[test]
fn test_length_none_renders_nothing() {
    assert_eq!(eval("[{d, date, none}]", args! { "d" => gagarin() }), "[]");
}

#[test]
fn test_datetime_is_type_strict() {
    let err = eval_err("{d, date}", args! { "d" => "1961-04-12" });
    assert_eq!(
        err,
        EvalError::Argument(ArgumentError::WrongType {
            name: "d".into(),
            expected: "a timestamp",
            found: "a string",
        })
    );
}

#[test]
fn test_german_date() {
    assert_eq!(
        eval_in("de", "{d, date, medium}", args! { "d" => gagarin() }).unwrap(),
        "12.04.1961"
    );
}

// =============================================================================
// Injected locale rules
// =============================================================================

/// Rules that put every number in the `few` category.
#[derive(Debug, Default)]
struct AlwaysFew {
    symbols: NumberSymbols,
    patterns: DatetimePatterns,
}

impl LocaleRules for AlwaysFew {
    fn language(&self) -> &str {
        "x-test"
    }

    fn plural_category(
        &self,
        _operand: &PluralOperand,
        _kind: PluralKind,
    ) -> Result<PluralCategory, FormatError> {
        Ok(PluralCategory::Few)
    }

    fn number_symbols(&self) -> &NumberSymbols {
        &self.symbols
    }

    fn datetime_patterns(&self) -> &DatetimePatterns {
        &self.patterns
    }
}

struct FakeTable;

impl LocaleTable for FakeTable {
    fn rules(&self, _language: &str) -> Result<Arc<dyn LocaleRules>, CompileError> {
        Ok(Arc::new(AlwaysFew::default()))
    }
}

#[test]
fn test_injected_plural_rules() {
    let message = compile("{n, plural, few {F} other {O}}", "anything", &FakeTable).unwrap();
    assert_eq!(message.language(), "x-test");
    for n in [0, 1, 2, 1000] {
        assert_eq!(message.format(&mut args! { "n" => n }).unwrap(), "F");
    }
}

#[test]
fn test_injected_rules_keep_exact_matches() {
    let message = compile("{n, plural, =0 {none} few {F} other {O}}", "x", &FakeTable).unwrap();
    assert_eq!(message.format(&mut args! { "n" => 0 }).unwrap(), "none");
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_compiling_twice_gives_same_output() {
    let template = "{n, plural, offset:1 =0 {nobody} one {{who} and one other} other {{who} and # others}}";
    let table = CldrLocaleTable::new();
    let first = compile(template, "en", &table).unwrap();
    let second = compile(template, "en", &table).unwrap();
    for n in 0..5 {
        let a = first.format(&mut args! { "n" => n, "who" => "Ada" }).unwrap();
        let b = second.format(&mut args! { "n" => n, "who" => "Ada" }).unwrap();
        assert_eq!(a, b);
    }
}
