//! Value coercion rules per declared column type

use dbcsv_core::schema::ColumnType;
use dbcsv_core::types::Value;

#[test]
fn test_signed_integer() {
    assert_eq!(Value::parse("42", &ColumnType::Int).unwrap(), Value::Int(42));
    assert_eq!(Value::parse("-2147483648", &ColumnType::Int).unwrap(), Value::Int(i32::MIN));
    assert_eq!(Value::parse("+7", &ColumnType::Int).unwrap(), Value::Int(7));
    assert!(Value::parse("2147483648", &ColumnType::Int).is_err());
    assert!(Value::parse("1.0", &ColumnType::Int).is_err());
    assert!(Value::parse("", &ColumnType::Int).is_err());
    assert!(Value::parse("0x10", &ColumnType::Int).is_err());
}

#[test]
fn test_unsigned_integer() {
    assert_eq!(Value::parse("4294967295", &ColumnType::UInt).unwrap(), Value::UInt(u32::MAX));
    assert_eq!(Value::parse("0", &ColumnType::UInt).unwrap(), Value::UInt(0));
    assert!(Value::parse("-1", &ColumnType::UInt).is_err());
    assert!(Value::parse("4294967296", &ColumnType::UInt).is_err());
    assert!(Value::parse("1_000", &ColumnType::UInt).is_err());
}

#[test]
fn test_unsigned_rejects_plus_sign() {
    let err = Value::parse("+5", &ColumnType::UInt).unwrap_err();
    assert_eq!(err.reason, "unexpected sign");
    assert_eq!(err.value, "+5");
    // Signed columns still take an explicit plus.
    assert_eq!(Value::parse("+5", &ColumnType::Int).unwrap(), Value::Int(5));
}

#[test]
fn test_float() {
    assert_eq!(Value::parse("1.5", &ColumnType::Float).unwrap(), Value::Float(1.5));
    assert_eq!(Value::parse("-2e3", &ColumnType::Float).unwrap(), Value::Float(-2000.0));
    assert_eq!(Value::parse("7", &ColumnType::Float).unwrap(), Value::Float(7.0));
    assert!(Value::parse("1,5", &ColumnType::Float).is_err());
    assert!(Value::parse("abc", &ColumnType::Float).is_err());
}

#[test]
fn test_float_stored_at_single_precision() {
    let v = Value::parse("0.1", &ColumnType::Float).unwrap();
    assert_eq!(v, Value::Float(0.1f32));
    assert_eq!(v.to_string(), "0.1");
}

#[test]
fn test_float_overflow_is_an_error() {
    let err = Value::parse("1e39", &ColumnType::Float).unwrap_err();
    assert_eq!(err.reason, "value out of range");
    assert!(Value::parse("-1e39", &ColumnType::Float).is_err());
}

#[test]
fn test_float_infinity_literal_accepted() {
    assert_eq!(
        Value::parse("inf", &ColumnType::Float).unwrap(),
        Value::Float(f32::INFINITY)
    );
    assert_eq!(
        Value::parse("-infinity", &ColumnType::Float).unwrap(),
        Value::Float(f32::NEG_INFINITY)
    );
}

#[test]
fn test_strings_verbatim() {
    for t in [
        ColumnType::String,
        ColumnType::LocString,
        ColumnType::Other("bitfield".into()),
    ] {
        assert_eq!(Value::parse("12abc", &t).unwrap(), Value::Str("12abc".into()));
        assert_eq!(Value::parse("", &t).unwrap(), Value::Str(String::new()));
    }
}

#[test]
fn test_coerce_error_reports_type_and_text() {
    let err = Value::parse("abc", &ColumnType::UInt).unwrap_err();
    assert_eq!(err.expected, ColumnType::UInt);
    assert_eq!(err.value, "abc");
    let msg = err.to_string();
    assert!(msg.contains("uint"));
    assert!(msg.contains("'abc'"));
}

#[test]
fn test_value_json_is_untagged() {
    assert_eq!(serde_json::to_string(&Value::UInt(3)).unwrap(), "3");
    assert_eq!(serde_json::to_string(&Value::Int(-3)).unwrap(), "-3");
    assert_eq!(serde_json::to_string(&Value::Float(0.5)).unwrap(), "0.5");
    assert_eq!(serde_json::to_string(&Value::from("x")).unwrap(), "\"x\"");
}
