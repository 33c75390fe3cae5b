//! Unit tests for the markup vocabulary
//!
//! External-view checks of the token translation and the span parser the
//! rendering surface feeds on.

use termfolio::markup::{escape, parse_rows, to_plain_text};

#[test]
fn test_escape_keeps_consecutive_spaces_distinct() {
    assert_eq!(escape("a  b"), "a&nbsp;&nbsp;b");
}

#[test]
fn test_escape_translation_priority() {
    // Newline, space, reserved characters, then verbatim.
    assert_eq!(escape("\n"), "<br>");
    assert_eq!(escape(" "), "&nbsp;");
    assert_eq!(escape("<>&"), "&lt;&gt;&amp;");
    assert_eq!(escape("plain"), "plain");
}

#[test]
fn test_escaped_output_never_contains_structural_angle_brackets() {
    let escaped = escape("<div onload=x>\n&");
    assert_eq!(escaped.replace("<br>", "").find('<'), None);
}

#[test]
fn test_parse_rows_round_trip_of_escaped_text() {
    let text = "first line\nsecond  line";
    let rows = parse_rows(&escape(text));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0].text, "first\u{00A0}line");
    assert_eq!(rows[1][0].text, "second\u{00A0}\u{00A0}line");
}

#[test]
fn test_parse_rows_prompt_shape() {
    let markup = "<div class=\"input-line\">\
<span class=\"prompt-user\">visitor</span>\
<span class=\"prompt-at\">@</span>\
<span class=\"prompt-host\">termfolio</span>\
<span class=\"prompt-path\">:~$</span>\
<span>&nbsp;help</span>\
</div>";
    let rows = parse_rows(markup);
    assert_eq!(rows.len(), 1);
    let classes: Vec<Option<&str>> = rows[0].iter().map(|s| s.class.as_deref()).collect();
    assert_eq!(
        classes,
        vec![
            Some("prompt-user"),
            Some("prompt-at"),
            Some("prompt-host"),
            Some("prompt-path"),
            Some("input-line"),
        ]
    );
    assert_eq!(rows[0][4].text, "\u{00A0}help");
}

#[test]
fn test_unknown_tags_are_inert() {
    let rows = parse_rows("before<script>alert(1)</script>after");
    let text: String = rows[0].iter().map(|s| s.text.as_str()).collect();
    assert_eq!(text, "beforealert(1)after");
}

#[test]
fn test_to_plain_text_decodes_everything() {
    assert_eq!(to_plain_text("a&nbsp;b<br>c&lt;d&gt;e&amp;f"), "a b\nc<d>e&f");
    assert_eq!(to_plain_text("<span class=\"x\">y</span>"), "y");
}
