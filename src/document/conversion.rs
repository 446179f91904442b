// Author: Dustin Pilgrim
// License: MIT

use chrono::NaiveDateTime;

use super::*;

impl Document {
    /// Get a typed value.
    ///
    /// # Examples
    /// ```
    /// # use sconf::Document;
    /// # fn main() -> Result<(), sconf::SconfError> {
    /// let mut doc = Document::new();
    /// doc.add_section("server");
    /// doc.set_key("server", "port", 8080i64)?;
    /// let port: u16 = doc.get("server", "port")?;
    /// assert_eq!(port, 8080);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Lookup errors as in [`Document::get_value`], or a type/conversion error
    /// if the stored value cannot become a `T`.
    pub fn get<T>(&self, section: &str, key: &str) -> Result<T>
    where
        T: TryFrom<Value, Error = SconfError>,
    {
        T::try_from(self.get_value(section, key)?.clone())
    }

    /// Get a typed value, or `default` on any error.
    pub fn get_or<T>(&self, section: &str, key: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = SconfError>,
    {
        self.get(section, key).unwrap_or(default)
    }
}

impl TryFrom<Value> for String {
    type Error = SconfError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(SconfError::type_mismatch("string", other.kind().name())),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = SconfError;

    fn try_from(value: Value) -> Result<Self> {
        value.get_integer()
    }
}

impl TryFrom<Value> for f64 {
    type Error = SconfError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            // Integers widen without loss for any config-sized value.
            Value::Integer(_) => value.get_integer().map(|n| n as f64),
            _ => value.get_double(),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = SconfError;

    fn try_from(value: Value) -> Result<Self> {
        value.get_boolean()
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = SconfError;

    fn try_from(value: Value) -> Result<Self> {
        value.get_date()
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = SconfError>,
{
    type Error = SconfError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => items.into_iter().map(T::try_from).collect(),
            other => Err(SconfError::type_mismatch("array", other.kind().name())),
        }
    }
}

macro_rules! narrow_integer {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = SconfError;

                fn try_from(value: Value) -> Result<Self> {
                    let n = value.get_integer()?;
                    <$ty>::try_from(n).map_err(|_| SconfError::ConversionError {
                        message: format!("{} is out of range for {}", n, stringify!($ty)),
                        hint: Some(format!(
                            "Use a value between {} and {}",
                            <$ty>::MIN,
                            <$ty>::MAX
                        )),
                        code: Some(405),
                    })
                }
            }
        )*
    };
}

narrow_integer!(i32, u16, u32, u64);
