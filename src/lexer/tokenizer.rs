use super::*;
use super::scanner::{trim, trim_quotes};
use crate::error::SconfError;

pub(super) fn classify(text: &str, line_no: usize) -> Result<Line<'_>> {
    let trimmed = trim(text);

    if trimmed.is_empty() {
        return Ok(Line::Blank);
    }

    if let Some(comment) = trimmed.strip_prefix(';') {
        return Ok(Line::Comment(trim(comment)));
    }

    if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
        let inner = &trimmed[1..trimmed.len() - 1];
        return Ok(Line::Section(trim_quotes(trim(inner))));
    }

    classify_entry(trimmed, text, line_no)
}

fn classify_entry<'a>(trimmed: &'a str, original: &str, line_no: usize) -> Result<Line<'a>> {
    let eq = trimmed.find('=').ok_or_else(|| SconfError::MalformedLine {
        message: "missing '=' in key/value pair".into(),
        line: line_no,
        content: original.to_string(),
        hint: Some("Entries look like `key = value`; comments start with ';'".into()),
        code: Some(201),
    })?;

    let key = trim_quotes(trim(&trimmed[..eq]));
    let mut value = trim(&trimmed[eq + 1..]);

    // Inline comments are dropped entirely.
    if let Some(pos) = value.find(';') {
        value = trim_quotes(trim(&value[..pos]));
    }

    Ok(Line::Entry { key, value })
}
