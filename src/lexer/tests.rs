#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::error::SconfError;

#[test]
fn test_trim_and_trim_quotes() {
    assert_eq!(trim("  a b \t"), "a b");
    assert_eq!(trim_quotes("\"Ada\""), "Ada");
    assert_eq!(trim_quotes("\"\""), "");
    assert_eq!(trim_quotes("\""), "\"");
    assert_eq!(trim_quotes("\"open"), "\"open");
    assert_eq!(trim_quotes("plain"), "plain");
    // Only one layer comes off.
    assert_eq!(trim_quotes("\"\"twice\"\""), "\"twice\"");
}

#[test]
fn test_trim_quotes_is_stable_on_single_layer() {
    for input in ["\"abc\"", "abc", "", "\"", "\"a", "a\"", "\"\""] {
        let once = trim_quotes(input);
        assert_eq!(trim_quotes(once), once, "input {:?}", input);
    }
}

#[test]
fn test_is_array() {
    assert!(is_array("[1, 2, 3]"));
    assert!(is_array("[]"));
    assert!(!is_array("["));
    assert!(!is_array("]"));
    assert!(!is_array(""));
    assert!(!is_array("1, 2"));
    assert!(!is_array(" [1]"));
}

#[test]
fn test_parse_array_nested() {
    let items = parse_array("[1, 2, [3, 4]]");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Value::String("1".into()));
    assert_eq!(items[1], Value::String("2".into()));
    match &items[2] {
        Value::Array(inner) => {
            assert_eq!(inner, &vec![Value::from("3"), Value::from("4")]);
        }
        other => panic!("expected nested array, got {:?}", other),
    }
}

#[test]
fn test_split_respects_bracket_depth() {
    assert_eq!(split_array_items("[1, 2], 3"), vec!["[1, 2]", " 3"]);
    assert_eq!(split_array_items("a,,b"), vec!["a", "", "b"]);
    assert_eq!(split_array_items("a, b,"), vec!["a", " b"]);
    assert_eq!(split_array_items("a, b, "), vec!["a", " b", " "]);
    assert_eq!(parse_array("[a, b, ]").last(), Some(&Value::from("")));
    assert!(split_array_items("   ").is_empty());

    let items = parse_array("[[a, b], [c, [d, e]]]");
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].get_array().unwrap()[1].get_array().unwrap().len(), 2);
}

#[test]
fn test_parse_array_dequotes_items() {
    let items = parse_array("[\"a\", \" b \", \"[x, y]\"]");
    assert_eq!(items[0], Value::from("a"));
    assert_eq!(items[1], Value::from(" b "));
    assert!(items[2].is_array());
    assert!(parse_array("[]").is_empty());
    assert!(parse_array("not an array").is_empty());
}

#[test]
fn test_classify_lines() {
    assert_eq!(classify_line("   ", 1).unwrap(), Line::Blank);
    assert_eq!(classify_line(";  note ", 1).unwrap(), Line::Comment("note"));
    assert_eq!(classify_line(" [ main ] ", 1).unwrap(), Line::Section("main"));
    assert_eq!(classify_line("[\"quoted\"]", 1).unwrap(), Line::Section("quoted"));
    assert_eq!(
        classify_line("\"name\" = \"Ada\"", 1).unwrap(),
        Line::Entry { key: "name", value: "\"Ada\"" }
    );
}

#[test]
fn test_inline_comment_is_cut() {
    assert_eq!(
        classify_line("name = \"Ada\"      ; person", 3).unwrap(),
        Line::Entry { key: "name", value: "Ada" }
    );
    assert_eq!(
        classify_line("path = a=b ; trailing", 3).unwrap(),
        Line::Entry { key: "path", value: "a=b" }
    );
    assert_eq!(
        classify_line("empty = ; nothing", 3).unwrap(),
        Line::Entry { key: "empty", value: "" }
    );
}

#[test]
fn test_missing_equals_is_malformed() {
    let err = classify_line("just some words", 7).unwrap_err();
    match err {
        SconfError::MalformedLine { line, content, code, .. } => {
            assert_eq!(line, 7);
            assert_eq!(content, "just some words");
            assert_eq!(code, Some(201));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_decode_value() {
    assert_eq!(decode_value("\"Ada\""), Value::from("Ada"));
    assert_eq!(decode_value("42"), Value::from("42"));
    assert_eq!(
        decode_value("[1, 2]"),
        Value::Array(vec![Value::from("1"), Value::from("2")])
    );
}
