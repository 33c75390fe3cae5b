//! Contract tests for the command registry
//!
//! Pin the registry's externally observable contract: exactly-once
//! dispatch, the not-found line, suggestion semantics, and the generated
//! help table's alignment rule.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use termfolio::commands::builtins::HelpCommand;
use termfolio::commands::{CommandContext, CommandRegistry, TerminalCommand};
use termfolio::error::Result;
use termfolio::terminal::OutputBuffer;

struct Stub {
    name: &'static str,
    description: &'static str,
    calls: Arc<AtomicUsize>,
}

impl Stub {
    fn new(name: &'static str, description: &'static str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                name,
                description,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl TerminalCommand for Stub {
    fn name(&self) -> &'static str {
        self.name
    }
    fn description(&self) -> &'static str {
        self.description
    }
    async fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn ctx() -> (CommandContext, Arc<Mutex<OutputBuffer>>) {
    let output = Arc::new(Mutex::new(OutputBuffer::new()));
    (CommandContext::new(Arc::clone(&output)), output)
}

#[tokio::test(start_paused = true)]
async fn test_registered_command_runs_exactly_once_with_no_extra_output() {
    let (stub, calls) = Stub::new("probe", "a probe");
    let mut registry = CommandRegistry::new();
    registry.register(stub);

    let (ctx, output) = ctx();
    registry.execute("probe", &ctx).await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(output.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_lookup_is_case_insensitive() {
    let (stub, calls) = Stub::new("probe", "a probe");
    let mut registry = CommandRegistry::new();
    registry.register(stub);

    let (ctx, _output) = ctx();
    registry.execute("PrObE", &ctx).await;
    registry.execute("  probe  ", &ctx).await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_unregistered_token_reports_once_and_does_not_panic() {
    let registry = CommandRegistry::with_builtins();
    let (ctx, output) = ctx();
    registry.execute("T", &ctx).await;

    let snapshot = output.lock().unwrap().snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(
        snapshot[0].plain_text(),
        "Command not found: T. Type 'help' for list."
    );
}

#[test]
fn test_suggestion_contract() {
    let (a, _) = Stub::new("about", "a");
    let (b, _) = Stub::new("abacus", "b");
    let (c, _) = Stub::new("help", "c");
    let mut registry = CommandRegistry::new();
    registry.register(a);
    registry.register(b);
    registry.register(c);

    assert_eq!(registry.suggestions(""), Vec::<String>::new());
    assert_eq!(registry.suggestions("ab"), vec!["about", "abacus"]);
    // An exact match is never suggested back.
    assert!(registry
        .suggestions("about")
        .iter()
        .all(|name| name != "about"));
    assert_eq!(registry.suggestions("ABOUT"), Vec::<String>::new());
}

#[tokio::test(start_paused = true)]
async fn test_help_column_width_contract() {
    let (a, _) = Stub::new("a", "x");
    let (b, _) = Stub::new("bbb", "y");
    let mut registry = CommandRegistry::new();
    registry.register(a);
    registry.register(b);
    registry.register(HelpCommand::new(registry.catalog()));

    let (ctx, output) = ctx();
    registry.execute("help", &ctx).await;

    let snapshot = output.lock().unwrap().snapshot();
    let text = snapshot[0].plain_text();
    let lines: Vec<&str> = text.lines().collect();
    // Names pad to max(1, 3, 4) + 2 = 6 columns ("help" itself counts).
    assert_eq!(lines[2], "a     - x");
    assert_eq!(lines[3], "bbb   - y");
    assert_eq!(lines[4], "help  - Show this help message");
}

#[tokio::test(start_paused = true)]
async fn test_all_returns_registration_order() {
    let registry = CommandRegistry::with_builtins();
    let names: Vec<&str> = registry.all().iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec!["about", "skills", "projects", "clear", "help", "chat"]
    );
}
