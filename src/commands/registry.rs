//! Command registry
//!
//! Maps command names to handlers, preserving registration order. Lookup is
//! case-insensitive; the registry also answers prefix-suggestion queries for
//! the autocomplete dropdown and reports unknown or failing commands as
//! output lines rather than faults.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::commands::builtins;
use crate::commands::{CommandCatalog, CommandContext, TerminalCommand};

/// The command set, shared read-only after construction.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Arc<dyn TerminalCommand>>,
    catalog: CommandCatalog,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated with the built-in command set.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(builtins::AboutCommand);
        registry.register(builtins::SkillsCommand);
        registry.register(builtins::ProjectsCommand);
        registry.register(builtins::ClearCommand);
        registry.register(builtins::HelpCommand::new(registry.catalog()));
        registry.register(builtins::ChatCommand);
        registry
    }

    /// Handle to the live name/description listing.
    pub fn catalog(&self) -> CommandCatalog {
        self.catalog.clone()
    }

    /// Insert a command, overwriting any entry with the same name
    /// (case-insensitive) in place so registration order is stable.
    pub fn register<C: TerminalCommand + 'static>(&mut self, command: C) {
        self.register_arc(Arc::new(command));
    }

    /// See [`Self::register`].
    pub fn register_arc(&mut self, command: Arc<dyn TerminalCommand>) {
        debug!(command = command.name(), "registering command");
        self.catalog.record(command.name(), command.description());
        if let Some(slot) = self
            .commands
            .iter_mut()
            .find(|c| c.name().eq_ignore_ascii_case(command.name()))
        {
            *slot = command;
        } else {
            self.commands.push(command);
        }
    }

    fn find(&self, name: &str) -> Option<&Arc<dyn TerminalCommand>> {
        self.commands
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Execute the command named by `token`.
    ///
    /// `token` is the trimmed, case-preserved text the user typed; lookup
    /// folds case internally so the not-found line can echo the token
    /// verbatim. Faults raised by a command are caught here, logged, and
    /// reported as a line; this method never propagates them.
    pub async fn execute(&self, token: &str, ctx: &CommandContext) {
        let name = token.trim().to_lowercase();
        match self.find(&name) {
            Some(command) => {
                debug!(command = %name, "executing command");
                if let Err(err) = command.execute(ctx).await {
                    warn!(command = %name, error = %err, "command execution failed");
                    ctx.print_error_line(&format!("Command failed: {}.", token))
                        .await;
                }
            }
            None => {
                ctx.print_error_line(&format!(
                    "Command not found: {}. Type 'help' for list.",
                    token
                ))
                .await;
            }
        }
    }

    /// Registered names starting with `prefix` (case-folded), excluding an
    /// exact match, in registration order. An empty prefix suggests nothing.
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let lower = prefix.to_lowercase();
        self.commands
            .iter()
            .map(|c| c.name().to_lowercase())
            .filter(|name| name.starts_with(&lower) && *name != lower)
            .collect()
    }

    /// All registered commands in registration order.
    pub fn all(&self) -> &[Arc<dyn TerminalCommand>] {
        &self.commands
    }
}
