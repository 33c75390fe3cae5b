//! Integration tests for command execution flows
//!
//! Drives the interpreter end-to-end against the built-in registry and
//! checks the transcript the output buffer accumulates. Paused tokio time
//! lets the typing animations play out instantly and deterministically.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use termfolio::commands::{CommandContext, CommandRegistry};
use termfolio::config::PromptConfig;
use termfolio::input::{EnterOutcome, InputController};
use termfolio::interpreter::Interpreter;
use termfolio::models::LineStyle;
use termfolio::terminal::{lock_line, typist, OutputBuffer};

fn fixture() -> (Interpreter, CommandContext, Arc<Mutex<OutputBuffer>>) {
    let registry = Arc::new(CommandRegistry::with_builtins());
    let interpreter = Interpreter::new(registry, PromptConfig::default());
    let output = Arc::new(Mutex::new(OutputBuffer::new()));
    let ctx = CommandContext::new(Arc::clone(&output));
    (interpreter, ctx, output)
}

fn plain_lines(output: &Arc<Mutex<OutputBuffer>>) -> Vec<String> {
    output
        .lock()
        .unwrap()
        .snapshot()
        .iter()
        .map(|line| line.plain_text())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_help_produces_exact_table() {
    let (interpreter, ctx, output) = fixture();
    interpreter.handle("help", &ctx).await;

    let lines = plain_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("$ help"));

    let table: Vec<&str> = lines[1].lines().collect();
    assert_eq!(table[0], "AVAILABLE COMMANDS:");
    assert_eq!(table[1], "-------------------");
    // "projects" (8) is the longest name, so every name pads to 10 columns.
    assert_eq!(table[2], "about     - Display user information");
    assert_eq!(table[3], "skills    - List technical skills");
    assert_eq!(table[4], "projects  - List projects");
    assert_eq!(table[5], "clear     - Clear terminal screen");
    assert_eq!(table[6], "help      - Show this help message");
    assert_eq!(table[7], "chat      - Chat with bot");
}

#[tokio::test(start_paused = true)]
async fn test_chained_help_then_clear_wipes_everything() {
    let (interpreter, ctx, output) = fixture();
    interpreter.handle("help & clear", &ctx).await;
    // The final clear removed the echoes and the freshly typed table alike.
    assert!(output.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_chain_orders_segment_output() {
    let (interpreter, ctx, output) = fixture();
    interpreter.handle("skills & about", &ctx).await;

    let lines = plain_lines(&output);
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("$ skills & about"));
    assert!(lines[1].starts_with("[SYS] SKILLS LOADED"));
    assert!(lines[2].ends_with("$ about"));
    assert!(lines[3].starts_with("NAME:"));
}

#[tokio::test(start_paused = true)]
async fn test_unknown_command_line() {
    let (interpreter, ctx, output) = fixture();
    interpreter.handle("frobnicate", &ctx).await;

    let lines = plain_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        "Command not found: frobnicate. Type 'help' for list."
    );
}

#[tokio::test(start_paused = true)]
async fn test_whitespace_submission_echoes_blank_line() {
    let (interpreter, ctx, output) = fixture();
    interpreter.handle("  \t ", &ctx).await;

    let snapshot = output.lock().unwrap().snapshot();
    assert_eq!(snapshot.len(), 1);
    assert!(snapshot[0].pre_rendered);
    assert_eq!(snapshot[0].style, LineStyle::Prompt);
}

#[tokio::test(start_paused = true)]
async fn test_submission_round_trip_through_controller() {
    let (interpreter, ctx, output) = fixture();
    let registry = CommandRegistry::with_builtins();
    let mut controller = InputController::new();
    controller.show_input();

    controller.buffer_mut().push_str("chat");
    controller.set_caret(4);
    controller.sync_edited(&registry);

    let EnterOutcome::Submitted(raw) = controller.on_enter() else {
        panic!("expected a submission");
    };
    assert!(!controller.is_editing());

    interpreter.handle(&raw, &ctx).await;
    controller.finish_execution();

    assert!(controller.is_editing());
    assert_eq!(controller.history().entries(), ["chat"]);
    let lines = plain_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "Chat is not connected yet.");
}

#[tokio::test(start_paused = true)]
async fn test_reveal_steps_one_character_per_tick() {
    let mut buffer = OutputBuffer::new();
    let line = buffer.begin_line(LineStyle::Output);

    let target = Arc::clone(&line);
    let handle = tokio::spawn(async move {
        typist::reveal(&target, "a b", Duration::from_millis(30)).await;
    });

    // First character lands immediately, before any timer fires.
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
    assert_eq!(lock_line(&line).content, "a");

    tokio::time::advance(Duration::from_millis(30)).await;
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
    assert_eq!(lock_line(&line).content, "a&nbsp;");

    tokio::time::advance(Duration::from_millis(30)).await;
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
    assert_eq!(lock_line(&line).content, "a&nbsp;b");
    // All three characters are in, but the final tick has not elapsed.
    assert!(!handle.is_finished());

    tokio::time::advance(Duration::from_millis(30)).await;
    handle.await.expect("reveal task");
}

#[tokio::test(start_paused = true)]
async fn test_reveal_escapes_dynamic_text_end_to_end() {
    let (interpreter, ctx, output) = fixture();
    interpreter.handle("<script>alert(1)</script>", &ctx).await;

    let snapshot = output.lock().unwrap().snapshot();
    // Echo line plus the not-found report for the odd token.
    assert_eq!(snapshot.len(), 2);
    assert!(!snapshot[1].content.contains("<script>"));
    assert!(snapshot[1]
        .plain_text()
        .starts_with("Command not found: <script>alert(1)</script>."));
}
