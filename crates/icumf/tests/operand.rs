//! Tests for CLDR plural operand decomposition.

use icumf::{OperandError, PluralOperand, Value};

fn parts(input: &str) -> (u64, usize, usize, u64, u64) {
    let op: PluralOperand = input.parse().unwrap();
    (op.i, op.v, op.w, op.f, op.t)
}

#[test]
fn test_decomposition_table() {
    let cases = [
        ("0", (0, 0, 0, 0, 0)),
        ("1", (1, 0, 0, 0, 0)),
        ("1.0", (1, 1, 0, 0, 0)),
        ("1.000", (1, 3, 0, 0, 0)),
        ("1.230", (1, 3, 2, 230, 23)),
        ("1200.50", (1200, 2, 1, 50, 5)),
        ("-1.23", (1, 2, 2, 23, 23)),
        ("42.4200", (42, 4, 2, 4200, 42)),
        ("-12345.67890", (12345, 5, 4, 67890, 6789)),
        ("0.05", (0, 2, 2, 5, 5)),
    ];
    for (input, expected) in cases {
        assert_eq!(parts(input), expected, "{input}");
    }
}

#[test]
fn test_invalid_strings() {
    for input in ["", "abc", "1.abc", "1.2abc", "1.230abc", "1.", ".5", "--1", "1e3", " 1"] {
        assert!(
            matches!(input.parse::<PluralOperand>(), Err(OperandError::Invalid(_))),
            "{input:?}"
        );
    }
}

#[test]
fn test_integer_digits_must_fit() {
    assert!("18446744073709551615".parse::<PluralOperand>().is_ok());
    assert!("18446744073709551616".parse::<PluralOperand>().is_err());
}

#[test]
fn test_from_integer_drops_sign() {
    assert_eq!(PluralOperand::from_integer(-5).i, 5);
    assert_eq!(PluralOperand::from_integer(i64::MIN).i, 9_223_372_036_854_775_808);
}

#[test]
fn test_from_float_uses_shortest_form() {
    let op = PluralOperand::from_float(1.5).unwrap();
    assert_eq!((op.i, op.v, op.f), (1, 1, 5));
    let op = PluralOperand::from_float(2.0).unwrap();
    assert_eq!((op.i, op.v), (2, 0));
    assert_eq!(
        PluralOperand::from_float(f64::INFINITY),
        Err(OperandError::NotFinite)
    );
}

#[test]
fn test_from_value() {
    assert_eq!(PluralOperand::from_value(&Value::from(3)).unwrap().i, 3);
    assert_eq!(PluralOperand::from_value(&Value::from("2.50")).unwrap().v, 2);
    assert_eq!(
        PluralOperand::from_value(&Value::opaque(1)),
        Err(OperandError::UnsupportedType("an opaque value"))
    );
}

#[test]
fn test_offset_clamps() {
    let op: PluralOperand = "3.5".parse().unwrap();
    let shifted = op.with_offset(1);
    assert_eq!((shifted.i, shifted.f), (2, 5));
    assert_eq!(op.with_offset(10).i, 0);
}

#[test]
fn test_has_fraction() {
    assert!(!parts_op("1.00").has_fraction());
    assert!(parts_op("1.01").has_fraction());
}

#[test]
fn test_display_round_trips_visible_digits() {
    assert_eq!(parts_op("-1.050").to_string(), "1.050");
    assert_eq!(parts_op("7").to_string(), "7");
}

fn parts_op(input: &str) -> PluralOperand {
    input.parse().unwrap()
}
