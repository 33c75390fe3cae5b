//! Property-based tests for the markup vocabulary

use proptest::prelude::*;

use termfolio::markup::{escape, parse_rows, to_plain_text};

proptest! {
    /// Escaping then flattening is the identity on arbitrary text.
    #[test]
    fn prop_escape_plain_text_round_trip(text in ".{0,200}") {
        prop_assert_eq!(to_plain_text(&escape(&text)), text);
    }

    /// Escaped text carries no structural '<' beyond the line-break token.
    #[test]
    fn prop_escape_emits_no_structural_markup(text in ".{0,200}") {
        let escaped = escape(&text);
        prop_assert!(!escaped.replace("<br>", "").contains('<'));
        prop_assert!(!escaped.replace("<br>", "").contains('>'));
    }

    /// Row count tracks newline count exactly.
    #[test]
    fn prop_row_count_follows_newlines(text in "[a-z \n]{0,120}") {
        let rows = parse_rows(&escape(&text));
        prop_assert_eq!(rows.len(), text.matches('\n').count() + 1);
    }

    /// Parsing escaped text yields unclassed spans only; classes can only
    /// come from markup this crate itself emitted.
    #[test]
    fn prop_escaped_text_has_no_classes(text in ".{0,120}") {
        for row in parse_rows(&escape(&text)) {
            for span in row {
                prop_assert!(span.class.is_none());
            }
        }
    }
}
