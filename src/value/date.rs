use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{Result, SconfError};

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

pub(super) fn format_date(dt: &NaiveDateTime) -> String {
    dt.format(DATE_FORMAT).to_string()
}

/// Accepts `YYYY-MM-DD HH:MM:SS`, or `YYYY-MM-DD` read as midnight.
/// Anything longer than a bare date is held to the full form.
pub(super) fn parse_date(text: &str) -> Result<NaiveDateTime> {
    let invalid = || SconfError::InvalidDate {
        value: text.to_string(),
        hint: Some("Expected YYYY-MM-DD [HH:MM:SS]".into()),
        code: Some(404),
    };

    if text.len() > 10 {
        NaiveDateTime::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
    } else {
        NaiveDate::parse_from_str(text, DATE_ONLY_FORMAT)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(invalid)
    }
}
