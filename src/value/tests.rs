#[cfg(test)]
use super::*;
#[cfg(test)]
use chrono::NaiveDate;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .expect("valid test date")
}

#[test]
fn test_constructors_fix_the_tag() {
    assert_eq!(Value::from("abc").kind(), ValueKind::String);
    assert_eq!(Value::from(42i64).kind(), ValueKind::Integer);
    assert_eq!(Value::from(7i32).kind(), ValueKind::Integer);
    assert_eq!(Value::from(2.5).kind(), ValueKind::Double);
    assert_eq!(Value::from(true).kind(), ValueKind::Boolean);
    assert_eq!(Value::from(at(2024, 1, 2, 3, 4, 5)).kind(), ValueKind::Date);
    assert_eq!(Value::from(vec![Value::from("a")]).kind(), ValueKind::Array);
}

#[test]
fn test_get_integer_on_string_is_type_mismatch() {
    let value = Value::from("abc");
    assert!(matches!(
        value.get_integer(),
        Err(SconfError::TypeMismatch { .. })
    ));
}

#[test]
fn test_string_retagged_as_integer() {
    let mut value = Value::from("42");
    assert!(value.get_integer().is_err());

    value.set_integer(42);
    assert_eq!(value.get_integer().unwrap(), 42);
    assert!(value.get_string().is_err());
}

#[test]
fn test_integer_conversion_error_is_lazy() {
    let value = Value::Integer("twelve".into());
    assert_eq!(value.kind(), ValueKind::Integer);
    assert!(matches!(
        value.get_integer(),
        Err(SconfError::ConversionError { code: Some(402), .. })
    ));
}

#[test]
fn test_double_accessors() {
    let value = Value::from(3.25);
    assert_eq!(value.get_double().unwrap(), 3.25);
    assert!(value.get_integer().is_err());

    let broken = Value::Double("1.2.3".into());
    assert!(matches!(
        broken.get_double(),
        Err(SconfError::ConversionError { .. })
    ));
}

#[test]
fn test_boolean_and_string_accessors() {
    assert!(Value::from(true).get_boolean().unwrap());
    assert!(!Value::from(false).get_boolean().unwrap());
    assert_eq!(Value::from("hello").get_string().unwrap(), "hello");
    assert!(Value::from("true").get_boolean().is_err());
}

#[test]
fn test_set_replaces_array_payload() {
    let mut value = Value::from(vec![Value::from("a"), Value::from("b")]);
    assert_eq!(value.get_array().unwrap().len(), 2);

    value.set_integer(5);
    assert_eq!(value, Value::Integer("5".into()));
    assert!(matches!(
        value.get_array(),
        Err(SconfError::TypeMismatch { .. })
    ));

    value.set_array(vec![Value::from(1i64)]);
    assert!(value.is_array());
    assert!(!value.is_scalar());
}

#[test]
fn test_date_formats_with_second_precision() {
    let value = Value::from(at(2024, 3, 9, 7, 5, 0));
    assert_eq!(value, Value::Date("2024-03-09 07:05:00".into()));
    assert_eq!(value.get_date().unwrap(), at(2024, 3, 9, 7, 5, 0));
}

#[test]
fn test_date_only_defaults_to_midnight() {
    let value = Value::Date("2023-12-31".into());
    assert_eq!(value.get_date().unwrap(), at(2023, 12, 31, 0, 0, 0));

    let from_date = Value::from(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    assert_eq!(from_date.get_date().unwrap(), at(2023, 12, 31, 0, 0, 0));
}

#[test]
fn test_invalid_date() {
    for text in ["yesterday", "2024-13-01", "2024-01-01T10:00:00", ""] {
        let value = Value::Date(text.into());
        assert!(
            matches!(value.get_date(), Err(SconfError::InvalidDate { .. })),
            "expected InvalidDate for {:?}",
            text
        );
    }
}

#[test]
fn test_set_date_and_set_string() {
    let mut value = Value::from(1i64);
    value.set_date(at(2000, 1, 1, 12, 0, 0));
    assert_eq!(value.get_date().unwrap(), at(2000, 1, 1, 12, 0, 0));

    value.set_string("plain");
    assert_eq!(value.get_string().unwrap(), "plain");
    value.set_boolean(true);
    assert!(value.get_boolean().unwrap());
    value.set_double(-0.5);
    assert_eq!(value.get_double().unwrap(), -0.5);
}

#[test]
fn test_format_double_keeps_fraction() {
    assert_eq!(format_double(3.0), "3.0");
    assert_eq!(format_double(-0.5), "-0.5");
    assert_eq!(format_double(2.25), "2.25");
    assert_eq!(Value::from(10.0), Value::Double("10.0".into()));
    assert!(!Value::is_integral(&format_double(1e3)));
}

#[test]
fn test_number_predicates() {
    assert!(Value::is_number("42"));
    assert!(Value::is_number("-3.14"));
    assert!(!Value::is_number("3."));
    assert!(!Value::is_number("abc"));
    assert!(!Value::is_number(""));

    assert!(Value::is_integral("-17"));
    assert!(!Value::is_integral("1.5"));
    assert!(!Value::is_integral("+1"));
}

#[test]
fn test_date_predicate() {
    assert!(Value::is_date_text("2024-01-01"));
    assert!(Value::is_date_text("2024-01-01 10:20:30"));
    assert!(!Value::is_date_text("2024-1-1"));
    assert!(!Value::is_date_text("2024-01-01 10:20"));
}

#[test]
fn test_value_serde_roundtrip() {
    let value = Value::from(vec![
        Value::from("x"),
        Value::from(3i64),
        Value::from(vec![Value::from(false)]),
    ]);
    let json = serde_json::to_string(&value).unwrap();
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}
