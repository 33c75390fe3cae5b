//! Command interpreter
//!
//! Takes one raw submitted line, echoes it as a pre-rendered prompt line,
//! splits it on the chaining delimiter, and drives sequential execution
//! against the registry. Segment N's output animation fully completes
//! before segment N+1's echo appears; a failing segment never prevents the
//! rest of the chain from running.

use std::sync::Arc;

use tracing::debug;

use crate::commands::{CommandContext, CommandRegistry};
use crate::config::PromptConfig;

/// The character splitting one input line into sequential sub-commands.
pub const CHAIN_DELIMITER: char = '&';

/// Sequential executor for submitted input lines.
pub struct Interpreter {
    registry: Arc<CommandRegistry>,
    prompt: PromptConfig,
}

impl Interpreter {
    pub fn new(registry: Arc<CommandRegistry>, prompt: PromptConfig) -> Self {
        Self { registry, prompt }
    }

    /// Prompt-decorated echo markup for `cmd`.
    ///
    /// The command text is inserted literally; `markup::parse_rows` treats
    /// unknown tags as inert, so the echo can never gain structure.
    pub fn prompt_markup(&self, cmd: &str) -> String {
        format!(
            "<div class=\"input-line\">\
<span class=\"prompt-user\">{}</span>\
<span class=\"prompt-at\">@</span>\
<span class=\"prompt-host\">{}</span>\
<span class=\"prompt-path\">{}</span>\
<span>&nbsp;{}</span>\
</div>",
            self.prompt.user, self.prompt.host, self.prompt.path, cmd
        )
    }

    /// Handle one raw submitted line.
    ///
    /// The echo always comes first, even for input that trims to nothing —
    /// an all-whitespace submission leaves exactly one blank prompt line.
    pub async fn handle(&self, raw: &str, ctx: &CommandContext) {
        debug!(input = raw, "handling input line");
        ctx.print_markup(self.prompt_markup(raw));

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }

        let segments = trimmed
            .split(CHAIN_DELIMITER)
            .map(str::trim)
            .filter(|segment| !segment.is_empty());
        for (index, segment) in segments.enumerate() {
            if index > 0 {
                ctx.print_markup(self.prompt_markup(segment));
            }
            self.registry.execute(segment, ctx).await;
        }
    }
}
