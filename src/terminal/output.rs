//! Output buffer
//!
//! An ordered, append-only log of rendered lines, mutated only through the
//! `CommandContext` operations. Lines are individually shared so the typing
//! renderer can keep appending to its target without holding the buffer
//! lock; a `clear` that races an in-flight animation simply detaches the
//! line, and the remaining ticks land on a line nothing renders anymore.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::{LineStyle, OutputLine};

/// A buffer line shared between the buffer and the typing renderer.
pub type SharedLine = Arc<Mutex<OutputLine>>;

/// Lock a shared line. A panicked writer must not wedge the render thread.
pub fn lock_line(line: &SharedLine) -> MutexGuard<'_, OutputLine> {
    line.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The ordered log of output lines.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    lines: Vec<SharedLine>,
}

impl OutputBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty typed line and return a handle for the renderer.
    pub fn begin_line(&mut self, style: LineStyle) -> SharedLine {
        let line = Arc::new(Mutex::new(OutputLine::typed(style)));
        self.lines.push(Arc::clone(&line));
        line
    }

    /// Append a complete pre-rendered markup line.
    pub fn push_markup(&mut self, markup: impl Into<String>, style: LineStyle) {
        self.lines
            .push(Arc::new(Mutex::new(OutputLine::pre_rendered(
                markup.into(),
                style,
            ))));
    }

    /// Truncate the buffer. In-flight animations keep their own handles.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// All lines, oldest first.
    pub fn lines(&self) -> &[SharedLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Owned copies of every line, oldest first. Test and logging aid.
    pub fn snapshot(&self) -> Vec<OutputLine> {
        self.lines.iter().map(|l| lock_line(l).clone()).collect()
    }
}
