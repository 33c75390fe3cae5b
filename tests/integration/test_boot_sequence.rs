//! Integration tests for the boot sequence
//!
//! Runs the one-shot startup choreography under paused time and checks the
//! event stream, the resulting transcript, and determinism of the synthetic
//! typing.

use std::sync::{Arc, Mutex};

use termfolio::boot::{self, BootEvent};
use termfolio::commands::{CommandContext, CommandRegistry};
use termfolio::config::{BootConfig, PromptConfig};
use termfolio::input::InputController;
use termfolio::interpreter::Interpreter;
use termfolio::models::LineStyle;
use termfolio::terminal::OutputBuffer;

async fn run_boot(config: &BootConfig) -> (Vec<BootEvent>, Arc<Mutex<OutputBuffer>>) {
    let registry = Arc::new(CommandRegistry::with_builtins());
    let interpreter = Interpreter::new(registry, PromptConfig::default());
    let output = Arc::new(Mutex::new(OutputBuffer::new()));
    let ctx = CommandContext::new(Arc::clone(&output));
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    boot::run(config, &interpreter, &ctx, &tx).await;

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    (events, output)
}

#[tokio::test(start_paused = true)]
async fn test_boot_transcript_and_event_order() {
    let (events, output) = run_boot(&BootConfig::default()).await;

    // Input appears before any keystroke, execution locks it afterwards.
    assert_eq!(events.first(), Some(&BootEvent::InputRevealed));
    let typed: String = events
        .iter()
        .filter_map(|event| match event {
            BootEvent::KeystrokeTyped(ch) => Some(*ch),
            _ => None,
        })
        .collect();
    assert_eq!(typed, "about");
    assert_eq!(events[events.len() - 2], BootEvent::ExecutionStarted);
    assert_eq!(events.last(), Some(&BootEvent::Finished));

    // Banner, prompt echo, biography block.
    let snapshot = output.lock().unwrap().snapshot();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot[0].style, LineStyle::AsciiArt);
    assert!(!snapshot[0].pre_rendered);
    assert!(snapshot[1].pre_rendered);
    assert!(snapshot[1].plain_text().ends_with("$ about"));
    assert!(snapshot[2].plain_text().contains("SUMMARY:"));
}

#[tokio::test(start_paused = true)]
async fn test_boot_respects_configured_command() {
    let config = BootConfig {
        command: "help".to_string(),
        ..BootConfig::default()
    };
    let (events, output) = run_boot(&config).await;

    let typed: String = events
        .iter()
        .filter_map(|event| match event {
            BootEvent::KeystrokeTyped(ch) => Some(*ch),
            _ => None,
        })
        .collect();
    assert_eq!(typed, "help");

    let snapshot = output.lock().unwrap().snapshot();
    assert!(snapshot[2].plain_text().starts_with("AVAILABLE COMMANDS:"));
}

#[tokio::test(start_paused = true)]
async fn test_boot_caret_positions_are_deterministic() {
    // A fixed-width measure stands in for the surface's font metrics.
    let measure = |text: &str| text.chars().count() as f32 * 9.0;

    let mut caret_runs: Vec<Vec<f32>> = Vec::new();
    for _ in 0..2 {
        let (events, _) = run_boot(&BootConfig::default()).await;

        let mut controller = InputController::new();
        let mut positions = Vec::new();
        for event in &events {
            match event {
                BootEvent::InputRevealed => controller.show_input(),
                BootEvent::KeystrokeTyped(ch) => {
                    controller.synth_char(*ch);
                    positions.push(controller.caret_px(measure));
                }
                BootEvent::ExecutionStarted => {
                    controller.take_for_execution();
                }
                BootEvent::Finished => controller.finish_execution(),
            }
        }
        assert_eq!(positions.len(), "about".chars().count());
        caret_runs.push(positions);
    }

    assert_eq!(caret_runs[0], caret_runs[1]);
}

#[tokio::test(start_paused = true)]
async fn test_post_boot_state_matches_ordinary_editing() {
    let (events, _) = run_boot(&BootConfig::default()).await;

    let mut controller = InputController::new();
    for event in events {
        match event {
            BootEvent::InputRevealed => controller.show_input(),
            BootEvent::KeystrokeTyped(ch) => controller.synth_char(ch),
            BootEvent::ExecutionStarted => {
                assert_eq!(controller.take_for_execution(), "about");
            }
            BootEvent::Finished => controller.finish_execution(),
        }
    }

    assert!(controller.is_editing());
    assert_eq!(controller.value(), "");
    // The synthetic submission bypasses history.
    assert!(controller.history().is_empty());
}
