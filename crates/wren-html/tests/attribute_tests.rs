//! Integration tests for attribute parsing.

use wren_html::{
    AttributesMap, HTMLParser, IssueKind, Node, ParseErrorKind, ParserOptions, parse,
    parse_with_options,
};

/// Helper to parse a single element and return its attributes
fn attrs_of(html: &str) -> AttributesMap {
    match parse(html.as_bytes()) {
        Ok(Node::Element(data)) => data.attrs,
        other => panic!("Expected Element, got {other:?}"),
    }
}

#[test]
fn test_multiple_attributes() {
    let attrs = attrs_of(r#"<div id="main" class="container wide"></div>"#);
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs.get("id"), Some("main"));
    assert_eq!(attrs.get("class"), Some("container wide"));
}

#[test]
fn test_whitespace_around_attributes() {
    let attrs = attrs_of("<div \n\tid=\"a\"\r\n   data=\"b\"   ></div>");
    assert_eq!(attrs, AttributesMap::from_iter([("id", "a"), ("data", "b")]));
}

#[test]
fn test_attributes_need_no_separator() {
    let attrs = attrs_of(r#"<p a="1"b="2"></p>"#);
    assert_eq!(attrs.sorted(), vec![("a", "1"), ("b", "2")]);
}

#[test]
fn test_empty_value() {
    assert_eq!(attrs_of(r#"<p title=""></p>"#).get("title"), Some(""));
}

#[test]
fn test_value_keeps_markup_bytes() {
    assert_eq!(
        attrs_of(r#"<a href="/x?a=1&b=<2>"></a>"#).get("href"),
        Some("/x?a=1&b=<2>")
    );
}

#[test]
fn test_attribute_names_are_case_sensitive() {
    let attrs = attrs_of(r#"<p ID="1" id="2"></p>"#);
    assert_eq!(attrs.len(), 2);
}

#[test]
fn test_duplicate_attribute_last_wins() {
    let (result, issues) = HTMLParser::new(br#"<p a="1" a="2"></p>"#).run_with_issues();
    let tree = result.unwrap();
    let data = tree.as_element().unwrap();
    assert_eq!(data.attrs.len(), 1);
    assert_eq!(data.attrs.get("a"), Some("2"));

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::DuplicateAttribute);
    assert_eq!(issues[0].offset, 9);
}

#[test]
fn test_attribute_order_does_not_affect_equality() {
    let first = parse(br#"<p a="1" b="2"></p>"#).unwrap();
    let second = parse(br#"<p b="2" a="1"></p>"#).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_equals() {
    let err = parse(b"<p hidden></p>").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::MalformedAttributeAssignment {
            name: "hidden".to_string()
        }
    );
    assert_eq!(err.offset, 9);
}

#[test]
fn test_unquoted_value() {
    let err = parse(b"<p id=hw></p>").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MalformedAttributeValue);
    assert_eq!(err.offset, 6);
}

#[test]
fn test_single_quotes_rejected_by_default() {
    let err = parse(b"<p id='hw'></p>").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MalformedAttributeValue);
}

#[test]
fn test_single_quotes_accepted_when_enabled() {
    let options = ParserOptions::default().with_single_quotes();
    let tree = parse_with_options(br#"<p a='say "hi"' b="it's"></p>"#, &options).unwrap();
    let data = tree.as_element().unwrap();
    assert_eq!(data.attrs.get("a"), Some(r#"say "hi""#));
    assert_eq!(data.attrs.get("b"), Some("it's"));
}

#[test]
fn test_unterminated_value() {
    let err = parse(br#"<p id="hw></p>"#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnterminatedAttributeValue);
    assert_eq!(err.offset, 14);
}

#[test]
fn test_end_of_input_after_equals() {
    assert_eq!(
        parse(b"<p id=").unwrap_err().kind,
        ParseErrorKind::UnterminatedElement {
            tag: "p".to_string()
        }
    );
}

#[test]
fn test_empty_attribute_name_is_accepted_with_issue() {
    let (result, issues) = HTMLParser::new(br#"<p ="x"></p>"#).run_with_issues();
    assert_eq!(result.unwrap().as_element().unwrap().attrs.get(""), Some("x"));
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::EmptyAttributeName);
}

#[test]
fn test_empty_attribute_name_rejected_when_strict() {
    let options = ParserOptions::default().with_strict_names();
    let err = parse_with_options(br#"<p ="x"></p>"#, &options).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::EmptyAttributeName);
    assert_eq!(err.offset, 3);
}

#[test]
fn test_invalid_utf8_value_is_replaced_with_issue() {
    let (result, issues) = HTMLParser::new(b"<p v=\"a\xFFb\">c\xC3</p>").run_with_issues();
    let tree = result.unwrap();
    let data = tree.as_element().unwrap();
    assert_eq!(data.attrs.get("v"), Some("a\u{FFFD}b"));
    assert_eq!(tree.text_content(), "c\u{FFFD}");

    let kinds: Vec<_> = issues.iter().map(|issue| issue.kind).collect();
    assert_eq!(kinds, vec![IssueKind::InvalidUtf8, IssueKind::InvalidUtf8]);
    assert_eq!(issues[0].offset, 7);
    assert_eq!(issues[1].offset, 12);
}
