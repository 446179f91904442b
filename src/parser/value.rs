use super::ParseOptions;
use crate::lexer::{self, is_array, parse_array_with, trim_quotes};
use crate::value::Value;

pub(super) fn decode(text: &str, options: &ParseOptions) -> Value {
    if !options.infer_types {
        return lexer::decode_value(text);
    }

    if is_array(text) {
        Value::Array(parse_array_with(text, &infer_scalar))
    } else {
        infer_scalar(text)
    }
}

/// Quoted text is always a string; bare text is typed by its shape, but only
/// when it also converts. Anything that would fail on access stays a string.
fn infer_scalar(text: &str) -> Value {
    let unquoted = trim_quotes(text);
    if unquoted.len() != text.len() {
        return Value::String(unquoted.to_string());
    }

    if Value::is_integral(text) {
        typed_or_string(Value::Integer(text.to_string()), |v| v.get_integer().is_ok())
    } else if Value::is_number(text) {
        typed_or_string(Value::Double(text.to_string()), |v| v.get_double().is_ok())
    } else if text == "true" || text == "false" {
        Value::Boolean(text == "true")
    } else if Value::is_date_text(text) {
        typed_or_string(Value::Date(text.to_string()), |v| v.get_date().is_ok())
    } else {
        Value::String(text.to_string())
    }
}

fn typed_or_string(candidate: Value, converts: impl Fn(&Value) -> bool) -> Value {
    if converts(&candidate) {
        return candidate;
    }
    match candidate {
        Value::Integer(text) | Value::Double(text) | Value::Date(text) => Value::String(text),
        other => other,
    }
}
