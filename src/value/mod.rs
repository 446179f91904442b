// Author: Dustin Pilgrim
// License: MIT

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SconfError};

mod date;

pub use date::{DATE_FORMAT, DATE_ONLY_FORMAT};

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("number pattern is valid"));
static INTEGRAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+$").expect("integral pattern is valid"));
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}( \d{2}:\d{2}:\d{2})?$").expect("date pattern is valid")
});

/// A single configuration datum.
///
/// `Integer`, `Double` and `Date` keep their canonical text; the typed
/// accessors parse it when called, so a malformed payload surfaces as a
/// [`SconfError::ConversionError`] (or [`SconfError::InvalidDate`]) on access
/// rather than on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    String(String),
    Integer(String),
    Double(String),
    Boolean(bool),
    Date(String),
    Array(Vec<Value>),
}

/// The tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    String,
    Integer,
    Double,
    Boolean,
    Date,
    Array,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Double => "double",
            ValueKind::Boolean => "boolean",
            ValueKind::Date => "date",
            ValueKind::Array => "array",
        }
    }
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    pub fn integer(n: i64) -> Self {
        Value::Integer(n.to_string())
    }

    pub fn double(n: f64) -> Self {
        Value::Double(format_double(n))
    }

    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    pub fn date(dt: NaiveDateTime) -> Self {
        Value::Date(date::format_date(&dt))
    }

    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
            Value::Double(_) => ValueKind::Double,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Date(_) => ValueKind::Date,
            Value::Array(_) => ValueKind::Array,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_scalar(&self) -> bool {
        !self.is_array()
    }

    fn mismatch(&self, expected: ValueKind) -> SconfError {
        SconfError::type_mismatch(expected.name(), self.kind().name())
    }

    pub fn get_integer(&self) -> Result<i64> {
        match self {
            Value::Integer(text) => text.trim().parse::<i64>().map_err(|e| {
                SconfError::ConversionError {
                    message: format!("'{}' is not a valid integer: {}", text, e),
                    hint: Some("Integers are whole numbers like 42 or -7".into()),
                    code: Some(402),
                }
            }),
            other => Err(other.mismatch(ValueKind::Integer)),
        }
    }

    pub fn get_double(&self) -> Result<f64> {
        match self {
            Value::Double(text) => text.trim().parse::<f64>().map_err(|e| {
                SconfError::ConversionError {
                    message: format!("'{}' is not a valid double: {}", text, e),
                    hint: Some("Doubles look like 3.14 or -0.5".into()),
                    code: Some(403),
                }
            }),
            other => Err(other.mismatch(ValueKind::Double)),
        }
    }

    pub fn get_boolean(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Boolean)),
        }
    }

    pub fn get_string(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    pub fn get_date(&self) -> Result<NaiveDateTime> {
        match self {
            Value::Date(text) => date::parse_date(text),
            other => Err(other.mismatch(ValueKind::Date)),
        }
    }

    pub fn get_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    pub fn set_integer(&mut self, n: i64) {
        *self = Value::integer(n);
    }

    pub fn set_double(&mut self, n: f64) {
        *self = Value::double(n);
    }

    pub fn set_boolean(&mut self, b: bool) {
        *self = Value::Boolean(b);
    }

    pub fn set_string(&mut self, s: impl Into<String>) {
        *self = Value::String(s.into());
    }

    pub fn set_date(&mut self, dt: NaiveDateTime) {
        *self = Value::date(dt);
    }

    pub fn set_array(&mut self, items: Vec<Value>) {
        *self = Value::Array(items);
    }

    /// `-?\d+(\.\d+)?`
    pub fn is_number(text: &str) -> bool {
        NUMBER_RE.is_match(text)
    }

    /// `-?\d+`
    pub fn is_integral(text: &str) -> bool {
        INTEGRAL_RE.is_match(text)
    }

    /// `YYYY-MM-DD` with an optional ` HH:MM:SS` tail.
    pub fn is_date_text(text: &str) -> bool {
        DATE_RE.is_match(text)
    }
}

/// Canonical text of a double. Whole numbers keep a `.0` so they still read
/// as doubles rather than integers.
pub fn format_double(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::integer(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::double(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::date(dt)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d.format(DATE_ONLY_FORMAT).to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

#[cfg(test)]
mod tests;
