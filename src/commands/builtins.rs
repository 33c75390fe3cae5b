//! Built-in command set
//!
//! One type per command, all acting through [`CommandContext`]. The data
//! blocks reveal at the fast data speed; `clear` prints nothing at all.

use async_trait::async_trait;

use crate::commands::{CommandCatalog, CommandContext, TerminalCommand};
use crate::error::Result;

/// `about` — the fixed biography block.
pub struct AboutCommand;

impl AboutCommand {
    const BIO: &'static str = "\
NAME: Alex Moreau
ROLE: Systems Engineer
EXP:  6 Years
LOC:  Lyon, France

SUMMARY:
Systems engineer specializing in Rust and distributed services.
Fond of protocol plumbing, storage engines, and interfaces that feel instant.";
}

#[async_trait]
impl TerminalCommand for AboutCommand {
    fn name(&self) -> &'static str {
        "about"
    }

    fn description(&self) -> &'static str {
        "Display user information"
    }

    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        ctx.print_data_line(Self::BIO).await;
        Ok(())
    }
}

/// `skills` — the fixed skills block.
pub struct SkillsCommand;

impl SkillsCommand {
    const SKILLS: &'static str = "\
[SYS] SKILLS LOADED
-------------------
LANGUAGES:  Rust, Go, TypeScript, SQL
RUNTIMES:   Tokio, WebAssembly, Linux
DATABASES:  PostgreSQL, Redis, SQLite
CONCEPTS:   Distributed Systems, Zero-copy IO, Property Testing";
}

#[async_trait]
impl TerminalCommand for SkillsCommand {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn description(&self) -> &'static str {
        "List technical skills"
    }

    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        ctx.print_data_line(Self::SKILLS).await;
        Ok(())
    }
}

/// `projects` — the fixed projects block.
pub struct ProjectsCommand;

impl ProjectsCommand {
    const PROJECTS: &'static str = "\
[DIR] PROJECTS
--------------
1. termfolio (Personal)
   - This terminal, a portfolio that types back

2. driftline (Open Source)
   - CRDT-backed collaborative text buffer

3. cadence (Contract)
   - Market-data ingestion service (Rust, Tokio, Kafka)

4. shelfling (Personal)
   - Content-addressed backup CLI";
}

#[async_trait]
impl TerminalCommand for ProjectsCommand {
    fn name(&self) -> &'static str {
        "projects"
    }

    fn description(&self) -> &'static str {
        "List projects"
    }

    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        ctx.print_data_line(Self::PROJECTS).await;
        Ok(())
    }
}

/// `clear` — wipes the output buffer, prints nothing.
pub struct ClearCommand;

#[async_trait]
impl TerminalCommand for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Clear terminal screen"
    }

    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        ctx.clear();
        Ok(())
    }
}

/// `help` — a generated table of every registered command.
///
/// Holds a live catalog handle so the table reflects whatever is registered
/// at the moment it runs; adding a command anywhere changes the alignment
/// for all rows.
pub struct HelpCommand {
    catalog: CommandCatalog,
}

impl HelpCommand {
    pub fn new(catalog: CommandCatalog) -> Self {
        Self { catalog }
    }

    fn render(&self) -> String {
        let entries = self.catalog.entries();
        let width = entries
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0)
            + 2;
        let body = entries
            .iter()
            .map(|(name, description)| format!("{:<width$}- {}", name, description))
            .collect::<Vec<_>>()
            .join("\n");
        format!("AVAILABLE COMMANDS:\n-------------------\n{}", body)
    }
}

#[async_trait]
impl TerminalCommand for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show this help message"
    }

    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        ctx.print_data_line(&self.render()).await;
        Ok(())
    }
}

/// `chat` — placeholder for the video-call integration; until a relay is
/// wired up it only reports itself offline.
pub struct ChatCommand;

#[async_trait]
impl TerminalCommand for ChatCommand {
    fn name(&self) -> &'static str {
        "chat"
    }

    fn description(&self) -> &'static str {
        "Chat with bot"
    }

    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        ctx.print_data_line("Chat is not connected yet.").await;
        Ok(())
    }
}
