//! Markup token vocabulary and parsing
//!
//! The typing renderer emits a small HTML-like token vocabulary: `<br>` for
//! line breaks, `&nbsp;` for non-collapsing spaces, and entity escapes for
//! the markup-reserved characters. This module owns that vocabulary in both
//! directions: translating raw characters into tokens for the output
//! buffer, and parsing buffered markup back into styled spans for the
//! rendering surface.

use once_cell::sync::Lazy;
use regex::Regex;

/// Token inserted for a newline; advances to a fresh visual row.
pub const LINE_BREAK: &str = "<br>";

/// Token inserted for a space; keeps consecutive spaces visually distinct.
pub const NBSP: &str = "&nbsp;";

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</?[a-zA-Z][^>]*>").expect("static tag pattern")
});

static CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"class="([^"]*)""#).expect("static class pattern")
});

/// Append one character of untrusted text to `out` as a safe token.
///
/// Translation priority matches the typing renderer contract: newline,
/// space, markup-reserved characters, then everything else verbatim.
pub fn append_char(out: &mut String, ch: char) {
    match ch {
        '\n' => out.push_str(LINE_BREAK),
        ' ' => out.push_str(NBSP),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '&' => out.push_str("&amp;"),
        other => out.push(other),
    }
}

/// Translate a whole string through [`append_char`].
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        append_char(&mut out, ch);
    }
    out
}

/// A run of text sharing one style class within a rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSpan {
    /// Decoded text (entities resolved; `&nbsp;` becomes U+00A0).
    pub text: String,
    /// Innermost enclosing element class, if any.
    pub class: Option<String>,
}

/// Parse buffered markup into visual rows of styled spans.
///
/// Understands the vocabulary this crate emits: `<br>` row breaks,
/// `<span>`/`<div>` elements with optional `class` attributes, and the four
/// entities. Unknown tags are inert and unknown entities render literally,
/// so echoed input can never smuggle structure into the surface.
pub fn parse_rows(markup: &str) -> Vec<Vec<MarkupSpan>> {
    let mut rows: Vec<Vec<MarkupSpan>> = Vec::new();
    let mut row: Vec<MarkupSpan> = Vec::new();
    let mut text = String::new();
    let mut classes: Vec<Option<String>> = Vec::new();

    fn effective(classes: &[Option<String>]) -> Option<String> {
        classes.iter().rev().find_map(|c| c.clone())
    }

    fn flush(row: &mut Vec<MarkupSpan>, text: &mut String, classes: &[Option<String>]) {
        if !text.is_empty() {
            row.push(MarkupSpan {
                text: std::mem::take(text),
                class: effective(classes),
            });
        }
    }

    let bytes = markup.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => {
                let Some(end) = markup[i..].find('>').map(|o| i + o) else {
                    // Unterminated tag: the rest is literal text.
                    text.push_str(&markup[i..]);
                    break;
                };
                let tag = &markup[i + 1..end];
                let name = tag
                    .trim_start_matches('/')
                    .split([' ', '/'])
                    .next()
                    .unwrap_or("")
                    .to_ascii_lowercase();
                match (tag.starts_with('/'), name.as_str()) {
                    (false, "br") => {
                        flush(&mut row, &mut text, &classes);
                        rows.push(std::mem::take(&mut row));
                    }
                    (false, "span" | "div") => {
                        flush(&mut row, &mut text, &classes);
                        let class = CLASS_RE
                            .captures(tag)
                            .map(|c| c[1].to_string())
                            .filter(|c| !c.is_empty());
                        classes.push(class);
                    }
                    (true, "span" | "div") => {
                        flush(&mut row, &mut text, &classes);
                        classes.pop();
                    }
                    _ => {} // inert
                }
                i = end + 1;
            }
            b'&' => {
                if let Some(semi) = markup[i..].find(';').filter(|&o| o <= 6).map(|o| i + o) {
                    match &markup[i + 1..semi] {
                        "nbsp" => text.push('\u{00A0}'),
                        "lt" => text.push('<'),
                        "gt" => text.push('>'),
                        "amp" => text.push('&'),
                        _ => {
                            text.push('&');
                            i += 1;
                            continue;
                        }
                    }
                    i = semi + 1;
                } else {
                    text.push('&');
                    i += 1;
                }
            }
            _ => {
                let ch = markup[i..].chars().next().unwrap_or('\u{FFFD}');
                text.push(ch);
                i += ch.len_utf8();
            }
        }
    }

    flush(&mut row, &mut text, &classes);
    rows.push(row);
    rows
}

/// Reduce markup to plain text: tags stripped, `<br>` as newline, entities
/// decoded to their ordinary characters. Used for logs and assertions.
pub fn to_plain_text(markup: &str) -> String {
    let with_breaks = markup.replace(LINE_BREAK, "\n");
    let stripped = TAG_RE.replace_all(&with_breaks, "");
    stripped
        .replace(NBSP, " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
