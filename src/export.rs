// Author: Dustin Pilgrim
// License: MIT

use serde_json::json;

use crate::document::Document;
use crate::error::{Result, SconfError};
use crate::value::{Value, format_double};

/// Render a document as output lines, without line terminators.
///
/// Each data section is written as its comments (`; text`), the `[name]`
/// header and one `key = value` line per key. Sections that only exist in
/// the comment table (a header that never received a key) are not written.
///
/// # Errors
/// Propagates conversion errors from malformed numeric or date payloads, and
/// returns [`SconfError::UnsupportedType`] for non-finite doubles.
pub fn serialize(doc: &Document) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for (section, keys) in doc.sections_iter() {
        if let Some(comments) = doc.comments_for(section) {
            lines.extend(comments.iter().map(|c| format!("; {}", c)));
        }

        lines.push(format!("[{}]", section));
        for (key, value) in keys {
            let mut line = format!("{} = ", key);
            write_value(&mut line, value)?;
            lines.push(line);
        }
    }

    Ok(lines)
}

/// [`serialize`] joined with `\n`, ending in a newline.
pub fn to_string(doc: &Document) -> Result<String> {
    let mut out = String::new();
    for line in serialize(doc)? {
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Render a single value the way it appears on the right of `=`.
pub fn render_value(value: &Value) -> Result<String> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &Value) -> Result<()> {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item)?;
            }
            out.push(']');
        }
        Value::String(s) => out.push_str(s),
        Value::Integer(_) => out.push_str(&value.get_integer()?.to_string()),
        Value::Double(_) => out.push_str(&format_double(finite_double(value)?)),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Date(text) => {
            value.get_date()?;
            out.push_str(text);
        }
    }
    Ok(())
}

/// NaN and the infinities have no spelling in either output format.
fn finite_double(value: &Value) -> Result<f64> {
    let n = value.get_double()?;
    if !n.is_finite() {
        return Err(SconfError::UnsupportedType {
            message: format!("double {} has no textual form", n),
            hint: Some("Only finite doubles can be written".into()),
            code: Some(406),
        });
    }
    Ok(n)
}

/// Export a document to pretty-printed JSON.
///
/// The result has a `sections` object (section -> key -> value) and a
/// `comments` object (section -> list of comment lines). Integers and doubles
/// become JSON numbers, dates become their text form.
pub fn export_to_json(doc: &Document) -> Result<String> {
    fn value_to_json(v: &Value) -> Result<serde_json::Value> {
        Ok(match v {
            Value::String(s) => json!(s),
            Value::Integer(_) => json!(v.get_integer()?),
            Value::Double(_) => json!(finite_double(v)?),
            Value::Boolean(b) => json!(b),
            Value::Date(text) => json!(text),
            Value::Array(items) => serde_json::Value::Array(
                items.iter().map(value_to_json).collect::<Result<Vec<_>>>()?,
            ),
        })
    }

    let mut sections = serde_json::Map::new();
    for (name, keys) in doc.sections_iter() {
        let mut obj = serde_json::Map::new();
        for (key, value) in keys {
            obj.insert(key.clone(), value_to_json(value)?);
        }
        sections.insert(name.clone(), serde_json::Value::Object(obj));
    }

    let comments = doc
        .comments_iter()
        .filter(|(_, lines)| !lines.is_empty())
        .map(|(name, lines)| (name.clone(), json!(lines)))
        .collect::<serde_json::Map<_, _>>();

    let top = json!({
        "sections": sections,
        "comments": comments,
    });

    serde_json::to_string_pretty(&top).map_err(|e| SconfError::UnsupportedType {
        message: format!("JSON encoding failed: {}", e),
        hint: None,
        code: Some(407),
    })
}
