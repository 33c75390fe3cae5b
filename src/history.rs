//! Input history
//!
//! A rolling log of previously submitted raw command strings (pre-trim,
//! case-preserved), most-recent-last, with a recall cursor driven by the
//! input controller. Only consecutive duplicates are collapsed: the new
//! entry is compared against the immediately preceding one, not the whole
//! log. Nothing survives a restart; persistence is an explicit non-goal.

/// Result of stepping the recall cursor toward the newest entry.
#[derive(Debug, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Replace the input with this history entry.
    Entry(&'a str),
    /// Stepped past the newest entry: clear the input.
    Cleared,
}

/// Ordered submission log plus recall cursor.
///
/// The cursor counts backwards from the newest entry; `None` means "not
/// browsing".
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submission. Whitespace-only input is never recorded, and an
    /// entry equal to the one immediately before it is skipped.
    pub fn record(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        if self.entries.last().map(String::as_str) == Some(raw) {
            return;
        }
        self.entries.push(raw.to_string());
    }

    /// Step one entry deeper into the past, bounded at the oldest entry.
    /// Returns the entry the input should show, or `None` for a no-op.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(depth) if depth + 1 < self.entries.len() => depth + 1,
            Some(_) => return None,
        };
        self.cursor = Some(next);
        Some(&self.entries[self.entries.len() - 1 - next])
    }

    /// Step one entry back toward the newest. Stepping past the newest
    /// clears the input and resets the cursor.
    pub fn next(&mut self) -> Option<Recall<'_>> {
        match self.cursor {
            Some(depth) if depth > 0 => {
                self.cursor = Some(depth - 1);
                Some(Recall::Entry(
                    &self.entries[self.entries.len() - depth],
                ))
            }
            Some(0) => {
                self.cursor = None;
                Some(Recall::Cleared)
            }
            _ => None,
        }
    }

    /// Leave browsing mode.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    /// All recorded submissions, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
