use chrono::NaiveDate;
use rust_decimal::Decimal;
use tablekit_model::Value;

#[test]
fn test_display_renders_cell_text() {
    assert_eq!(Value::Null.to_string(), "");
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::from(42i64).to_string(), "42");
    assert_eq!(Value::from("Contoso").to_string(), "Contoso");
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert_eq!(Value::from(date).to_string(), "2024-03-01");
}

#[test]
fn test_from_option_maps_none_to_null() {
    let missing: Option<i64> = None;
    assert_eq!(Value::from(missing), Value::Null);
    assert_eq!(Value::from(Some(7i64)), Value::from(7i64));
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::from(1.5f64).type_name(), "float");
    assert_eq!(Value::Decimal(Decimal::new(125, 1)).type_name(), "decimal");
}

#[test]
fn test_equality_distinguishes_types() {
    // The edit no-op guard relies on typed equality: the string "100"
    // is not the integer 100.
    assert_ne!(Value::from("100"), Value::from(100i64));
    assert_eq!(Value::from(100i64), Value::from(100i64));
}

#[test]
fn test_serde_round_trip_scalars() {
    for value in [
        Value::Null,
        Value::Bool(true),
        Value::Int(-3),
        Value::String("hello".into()),
    ] {
        let json = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn test_serde_date_round_trip() {
    let date = Value::Date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, "\"2025-12-31\"");
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, date);
}
