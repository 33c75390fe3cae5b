//! Input controller
//!
//! The state machine behind the visible input line: caret placement,
//! history recall, live autocomplete, and submission. The controller owns
//! the history log and suggestion state exclusively; the rendering surface
//! feeds it key events and text changes and reads back the caret position
//! and dropdown anchor.

use crate::commands::CommandRegistry;
use crate::completion::SuggestionState;
use crate::history::{HistoryLog, Recall};

/// Horizontal padding between the measured text width and the caret block.
pub const CARET_PAD: f32 = 2.0;

/// Whether the input line is interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// Input hidden; an animation or command is playing.
    Idle,
    /// Input visible and focused.
    Editing,
}

/// Outcome of an Enter keypress.
#[derive(Debug, PartialEq, Eq)]
pub enum EnterOutcome {
    /// A suggestion was accepted; nothing was submitted.
    SuggestionAccepted,
    /// The captured raw input should be handed to the interpreter.
    Submitted(String),
}

/// State machine for the input line.
pub struct InputController {
    state: InputState,
    value: String,
    caret: usize,
    prompt_offset: f32,
    history: HistoryLog,
    suggestions: SuggestionState,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

impl InputController {
    /// Starts `Idle`; the boot sequence reveals the input line.
    pub fn new() -> Self {
        Self {
            state: InputState::Idle,
            value: String::new(),
            caret: 0,
            prompt_offset: 0.0,
            history: HistoryLog::new(),
            suggestions: SuggestionState::new(),
        }
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == InputState::Editing
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Mutable access for the surface's text widget. After the widget
    /// reports an edit, call [`Self::sync_edited`].
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.value
    }

    /// Recompute derived state after the text changed under the widget.
    pub fn sync_edited(&mut self, registry: &CommandRegistry) {
        self.clamp_caret();
        self.suggestions.update(registry, &self.value);
    }

    /// Logical caret offset in characters.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Move the logical caret (cursor keys, clicks), clamped to the value.
    pub fn set_caret(&mut self, chars: usize) {
        self.caret = chars;
        self.clamp_caret();
    }

    fn clamp_caret(&mut self) {
        let max = self.value.chars().count();
        if self.caret > max {
            self.caret = max;
        }
    }

    fn caret_to_end(&mut self) {
        self.caret = self.value.chars().count();
    }

    /// Text before the logical caret.
    pub fn text_before_caret(&self) -> &str {
        let byte = self
            .value
            .char_indices()
            .nth(self.caret)
            .map(|(b, _)| b)
            .unwrap_or(self.value.len());
        &self.value[..byte]
    }

    /// Left edge of the text field in surface coordinates.
    pub fn set_prompt_offset(&mut self, offset: f32) {
        self.prompt_offset = offset;
    }

    /// Visual caret x: prompt offset plus the measured pixel width of the
    /// text before the caret, plus a small pad. The suggestion dropdown is
    /// anchored at the same x.
    pub fn caret_px(&self, measure: impl FnOnce(&str) -> f32) -> f32 {
        self.prompt_offset + measure(self.text_before_caret()) + CARET_PAD
    }

    pub fn suggestions(&self) -> &SuggestionState {
        &self.suggestions
    }

    /// ArrowDown: dropdown navigation while open, otherwise history recall
    /// toward the newest entry.
    pub fn on_arrow_down(&mut self) {
        if self.suggestions.is_open() {
            self.suggestions.select_next();
            return;
        }
        let recalled = match self.history.next() {
            Some(Recall::Entry(entry)) => Some(entry.to_string()),
            Some(Recall::Cleared) => Some(String::new()),
            None => None,
        };
        if let Some(text) = recalled {
            self.value = text;
            self.caret_to_end();
        }
    }

    /// ArrowUp: dropdown navigation while open, otherwise history recall
    /// into the past, bounded at the oldest entry.
    pub fn on_arrow_up(&mut self) {
        if self.suggestions.is_open() {
            self.suggestions.select_previous();
            return;
        }
        if let Some(entry) = self.history.previous().map(str::to_string) {
            self.value = entry;
            self.caret_to_end();
        }
    }

    /// Tab: accept the selected suggestion without submitting.
    pub fn on_tab(&mut self) -> bool {
        self.accept_selected_suggestion()
    }

    /// Escape: close the dropdown, leaving the input untouched.
    pub fn on_escape(&mut self) -> bool {
        if self.suggestions.is_open() {
            self.suggestions.close();
            true
        } else {
            false
        }
    }

    /// Hover over a dropdown entry: move the selection only.
    pub fn suggestions_select(&mut self, index: usize) {
        self.suggestions.select(index);
    }

    /// Click on a dropdown entry.
    pub fn apply_suggestion(&mut self, index: usize) -> bool {
        self.suggestions.select(index);
        self.accept_selected_suggestion()
    }

    fn accept_selected_suggestion(&mut self) -> bool {
        let Some(name) = self.suggestions.selected().map(str::to_string) else {
            return false;
        };
        self.value = name;
        self.suggestions.close();
        self.caret_to_end();
        true
    }

    /// Enter: accept a selected suggestion, or submit.
    ///
    /// Submission effects, in order: capture the value, clear the input,
    /// record the capture into history (consecutive-dedup; whitespace is
    /// never recorded), reset the recall cursor, and lock the input
    /// (`Idle`). The caller hands the capture to the interpreter and calls
    /// [`Self::finish_execution`] when it settles. A whitespace-only value
    /// still submits; the interpreter echoes a blank prompt line for it.
    pub fn on_enter(&mut self) -> EnterOutcome {
        if self.suggestions.is_open() && self.accept_selected_suggestion() {
            return EnterOutcome::SuggestionAccepted;
        }
        let raw = std::mem::take(&mut self.value);
        self.caret = 0;
        self.suggestions.close();
        self.history.record(&raw);
        self.history.reset_cursor();
        self.state = InputState::Idle;
        EnterOutcome::Submitted(raw)
    }

    /// Execution settled: unlock the input.
    pub fn finish_execution(&mut self) {
        self.state = InputState::Editing;
    }

    /// Boot: reveal the input line.
    pub fn show_input(&mut self) {
        self.state = InputState::Editing;
    }

    /// Boot: one synthetic keystroke, advancing the caret as if typed.
    /// Deliberately does not touch suggestions or history.
    pub fn synth_char(&mut self, ch: char) {
        self.value.push(ch);
        self.caret_to_end();
    }

    /// Boot: capture and clear the input ahead of the synthetic execution,
    /// locking the input line. History is bypassed.
    pub fn take_for_execution(&mut self) -> String {
        self.caret = 0;
        self.state = InputState::Idle;
        std::mem::take(&mut self.value)
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }
}
