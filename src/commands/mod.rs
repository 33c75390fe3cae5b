//! Command abstractions
//!
//! A command is a named, described, executable unit registered once at
//! startup. Commands act only through the [`CommandContext`] capability
//! object, which exposes exactly three operations on the output buffer:
//! append an animated text line, append raw pre-rendered markup, and clear.
//! Nothing here touches the rendering surface directly, so every command is
//! testable headless.

pub mod builtins;
pub mod registry;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;

use crate::config::TypingConfig;
use crate::error::Result;
use crate::models::LineStyle;
use crate::terminal::output::OutputBuffer;
use crate::terminal::typist;

pub use registry::CommandRegistry;

/// An executable terminal command.
///
/// Implementations are registered into the [`CommandRegistry`] keyed by
/// `name()` (case-insensitive) and are immutable for the rest of the
/// session.
#[async_trait]
pub trait TerminalCommand: Send + Sync {
    /// Unique command name, the registry key.
    fn name(&self) -> &'static str;

    /// Human-readable description, shown by the help listing.
    fn description(&self) -> &'static str;

    /// Run the command. Output happens only through `ctx`; a returned error
    /// is reported by the registry as a "command failed" line.
    async fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Capability object handed to commands at execution time.
#[derive(Clone)]
pub struct CommandContext {
    output: Arc<Mutex<OutputBuffer>>,
    typing: TypingConfig,
}

impl CommandContext {
    /// Context with the default typing speeds.
    pub fn new(output: Arc<Mutex<OutputBuffer>>) -> Self {
        Self::with_typing(output, TypingConfig::default())
    }

    /// Context with configured typing speeds.
    pub fn with_typing(output: Arc<Mutex<OutputBuffer>>, typing: TypingConfig) -> Self {
        Self { output, typing }
    }

    fn buffer(&self) -> MutexGuard<'_, OutputBuffer> {
        self.output.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The typing speeds this context reveals text at.
    pub fn typing(&self) -> &TypingConfig {
        &self.typing
    }

    /// Append a line and reveal `text` into it at the prose speed.
    pub async fn print_line(&self, text: &str) {
        self.print_line_with(text, self.typing.output_speed(), LineStyle::Output)
            .await;
    }

    /// Append a line revealed at the fast data-block speed.
    pub async fn print_data_line(&self, text: &str) {
        self.print_line_with(text, self.typing.data_speed(), LineStyle::Output)
            .await;
    }

    /// Append a line revealed at the error-report speed.
    pub async fn print_error_line(&self, text: &str) {
        self.print_line_with(text, self.typing.error_speed(), LineStyle::Output)
            .await;
    }

    /// Append a line and reveal `text` into it at `speed` with `style`.
    ///
    /// Resolves once the last character has been appended; callers that
    /// chain output are therefore naturally sequential.
    pub async fn print_line_with(&self, text: &str, speed: Duration, style: LineStyle) {
        let line = self.buffer().begin_line(style);
        typist::reveal(&line, text, speed).await;
    }

    /// Append a complete pre-rendered markup line, bypassing the animation.
    pub fn print_markup(&self, markup: impl Into<String>) {
        self.buffer().push_markup(markup, LineStyle::Prompt);
    }

    /// Clear all output.
    pub fn clear(&self) {
        self.buffer().clear();
    }
}

/// Live, registration-ordered listing of command names and descriptions.
///
/// The help command holds a catalog handle instead of a reference back into
/// the registry, so its table always reflects the commands registered at
/// the moment it runs.
#[derive(Clone, Debug, Default)]
pub struct CommandCatalog {
    entries: Arc<RwLock<Vec<(String, String)>>>,
}

impl CommandCatalog {
    pub(crate) fn record(&self, name: &str, description: &str) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(slot) = entries
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            slot.1 = description.to_string();
        } else {
            entries.push((name.to_string(), description.to_string()));
        }
    }

    /// Name/description pairs in registration order.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
