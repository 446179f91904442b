// Author: Dustin Pilgrim
// License: MIT

//! Line-level grammar.
//!
//! Every function here is stateless and works on a single line (or a single
//! value fragment). The [`crate::parser`] drives them line by line.

use crate::error::Result;
use crate::value::Value;

mod scanner;
mod tokenizer;

pub use scanner::{is_array, parse_array, split_array_items, trim, trim_quotes};
pub(crate) use scanner::parse_array_with;

/// What a single input line turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    Blank,
    /// Comment text with the leading `;` and surrounding whitespace removed.
    Comment(&'a str),
    /// Normalized section name.
    Section(&'a str),
    /// `key = value`; `value` has had any inline comment cut off but has not
    /// been decoded into a [`Value`] yet.
    Entry { key: &'a str, value: &'a str },
}

/// Classify one line. `line_no` is 1-based and only used for error reporting.
pub fn classify_line(text: &str, line_no: usize) -> Result<Line<'_>> {
    tokenizer::classify(text, line_no)
}

/// Decode an entry's value text into a string or array [`Value`].
pub fn decode_value(text: &str) -> Value {
    if is_array(text) {
        Value::Array(parse_array(text))
    } else {
        Value::String(trim_quotes(text).to_string())
    }
}

#[cfg(test)]
mod tests;
