use super::*;

/// Strip leading and trailing whitespace.
pub fn trim(text: &str) -> &str {
    text.trim()
}

/// Remove exactly one pair of surrounding double quotes, if present.
pub fn trim_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// `true` when the text opens with `[` and closes with `]`.
pub fn is_array(text: &str) -> bool {
    text.starts_with('[') && text.ends_with(']') && text.len() >= 2
}

/// Split the interior of an array literal on commas at bracket depth zero.
///
/// A trailing empty item (`a, b,`) is dropped; whitespace-only interiors
/// produce no items.
pub fn split_array_items(inner: &str) -> Vec<&str> {
    if trim(inner).is_empty() {
        return Vec::new();
    }

    let mut items = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (idx, ch) in inner.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(&inner[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    let tail = &inner[start..];
    if !tail.is_empty() {
        items.push(tail);
    }
    items
}

/// Parse an array literal into string leaves, recursing into nested arrays.
///
/// Text that is not an array literal yields an empty sequence.
pub fn parse_array(text: &str) -> Vec<Value> {
    parse_array_with(text, &|item| Value::String(trim_quotes(item).to_string()))
}

/// Like [`parse_array`], but leaves are built by `leaf`, which receives the
/// trimmed item with its quotes still in place.
pub(crate) fn parse_array_with(text: &str, leaf: &dyn Fn(&str) -> Value) -> Vec<Value> {
    let Some(inner) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) else {
        return Vec::new();
    };

    split_array_items(inner)
        .into_iter()
        .map(|item| {
            let item = trim(item);
            let unquoted = trim_quotes(item);
            if is_array(unquoted) {
                Value::Array(parse_array_with(unquoted, leaf))
            } else {
                leaf(item)
            }
        })
        .collect()
}
