//! Background async task loop
//!
//! Runs the boot sequence and submitted command lines off the UI thread.
//! The UI stays responsive while animations play; results flow back as
//! events the UI polls each frame.

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use termfolio::boot;
use termfolio::commands::CommandContext;
use termfolio::config::BootConfig;
use termfolio::interpreter::Interpreter;

use super::{AppRequest, UiEvent};

/// Receive requests from the UI until the channel closes.
pub(crate) async fn request_loop(
    requests: &mut UnboundedReceiver<AppRequest>,
    events: UnboundedSender<UiEvent>,
    interpreter: Interpreter,
    ctx: CommandContext,
    boot_config: BootConfig,
) {
    while let Some(request) = requests.recv().await {
        match request {
            AppRequest::Boot => {
                let (boot_tx, mut boot_rx) = tokio::sync::mpsc::unbounded_channel();
                let forward_events = events.clone();
                let forwarder = tokio::spawn(async move {
                    while let Some(event) = boot_rx.recv().await {
                        if forward_events.send(UiEvent::Boot(event)).is_err() {
                            break;
                        }
                    }
                });
                boot::run(&boot_config, &interpreter, &ctx, &boot_tx).await;
                drop(boot_tx);
                let _ = forwarder.await;
            }
            AppRequest::Run(raw) => {
                debug!(input = %raw, "running submitted line");
                interpreter.handle(&raw, &ctx).await;
                if events.send(UiEvent::CommandFinished).is_err() {
                    info!("event receiver dropped, stopping request loop");
                    break;
                }
            }
        }
    }
}
