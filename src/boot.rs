//! Boot sequence
//!
//! One-shot startup choreography: reveal the banner, show the input line,
//! pause, synthesize keystrokes for the default command as if a visitor
//! typed it, pause again, then execute it exactly like a submission. After
//! it finishes the terminal is indistinguishable from the ordinary
//! post-submission `Editing` state.

use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::commands::CommandContext;
use crate::config::BootConfig;
use crate::interpreter::Interpreter;
use crate::models::LineStyle;

/// Startup banner, revealed at the data speed with the ASCII-art style.
pub const BANNER: &str = r"
  _____ _____ ____  __  __ _____ ___  _     ___ ___
 |_   _| ____|  _ \|  \/  |  ___/ _ \| |   |_ _/ _ \
   | | |  _| | |_) | |\/| | |_ | | | | |    | | | | |
   | | | |___|  _ <| |  | |  _|| |_| | |___ | | |_| |
   |_| |_____|_| \_\_|  |_|_|   \___/|_____|___\___/
";

/// Surface-facing notifications emitted while the boot sequence runs.
///
/// The input controller lives on the UI side; the boot task drives it by
/// sending these events rather than reaching into UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootEvent {
    /// Show and focus the input line (`Editing`).
    InputRevealed,
    /// One synthetic keystroke landed; advance the caret as if typed.
    KeystrokeTyped(char),
    /// Input captured and hidden (`Idle`); execution is about to start.
    ExecutionStarted,
    /// The default command settled; back to `Editing`, focused, scrolled.
    Finished,
}

fn notify(events: &UnboundedSender<BootEvent>, event: BootEvent) {
    if events.send(event).is_err() {
        warn!(?event, "boot event receiver dropped");
    }
}

/// Run the boot sequence once.
pub async fn run(
    config: &BootConfig,
    interpreter: &Interpreter,
    ctx: &CommandContext,
    events: &UnboundedSender<BootEvent>,
) {
    info!(command = %config.command, "boot sequence starting");

    ctx.print_line_with(BANNER, ctx.typing().data_speed(), LineStyle::AsciiArt)
        .await;

    notify(events, BootEvent::InputRevealed);
    tokio::time::sleep(config.startup_pause()).await;

    for ch in config.command.chars() {
        notify(events, BootEvent::KeystrokeTyped(ch));
        tokio::time::sleep(config.keystroke_delay()).await;
    }

    tokio::time::sleep(config.pre_execute_pause()).await;
    notify(events, BootEvent::ExecutionStarted);

    interpreter.handle(&config.command, ctx).await;

    notify(events, BootEvent::Finished);
    info!("boot sequence complete");
}
