//! Main application structure
//!
//! The `TermfolioApp` struct implements `eframe::App`: it owns the output
//! buffer, the input controller, and a background tokio runtime that runs
//! the interpreter and the boot sequence. Communication is channel-based:
//! the UI sends [`AppRequest`]s and polls [`UiEvent`]s each frame, so the
//! engine's single-logical-thread assumptions hold — input is locked while
//! anything executes and submissions never overlap.

mod async_ops;

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use termfolio::boot::BootEvent;
use termfolio::commands::{CommandContext, CommandRegistry};
use termfolio::config::Config;
use termfolio::input::InputController;
use termfolio::interpreter::Interpreter;
use termfolio::terminal::{OutputBuffer, SharedLine};
use termfolio::ui::colors::UiColors;
use termfolio::ui::{input as input_row, output as output_view, suggestions};

/// Work sent from the UI to the background task.
#[derive(Debug, Clone)]
pub(crate) enum AppRequest {
    /// Run the one-shot boot sequence.
    Boot,
    /// Run one submitted input line through the interpreter.
    Run(String),
}

/// Notifications polled by the UI each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UiEvent {
    /// Progress of the boot choreography.
    Boot(BootEvent),
    /// A submitted line finished executing.
    CommandFinished,
}

/// Main termfolio application
pub struct TermfolioApp {
    /// Shared output buffer, written by the engine, read by the renderer
    output: Arc<Mutex<OutputBuffer>>,
    /// Input line state machine
    controller: InputController,
    /// Command set, shared read-only with the interpreter
    registry: Arc<CommandRegistry>,
    /// Loaded configuration
    config: Config,
    /// Cached theme colors
    colors: UiColors,
    /// Tokio runtime for the engine.
    /// Kept alive for the life of the app even though never accessed.
    #[allow(dead_code)]
    runtime: tokio::runtime::Runtime,
    /// Requests from UI to background
    request_tx: mpsc::UnboundedSender<AppRequest>,
    /// Events from background to UI
    event_rx: mpsc::UnboundedReceiver<UiEvent>,
    /// The boot request has been sent
    boot_started: bool,
    /// Move the widget cursor to the end on the next frame
    force_caret_to_end: bool,
    /// Focus the input field on the next frame
    focus_input: bool,
}

impl TermfolioApp {
    /// Build the application from a loaded configuration.
    pub fn new(config: Config) -> Self {
        info!("initializing termfolio");

        let output = Arc::new(Mutex::new(OutputBuffer::new()));
        let registry = Arc::new(CommandRegistry::with_builtins());
        let interpreter = Interpreter::new(Arc::clone(&registry), config.prompt.clone());
        let ctx = CommandContext::with_typing(Arc::clone(&output), config.typing.clone());
        let colors = UiColors::from_theme(&config.ui.theme);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("termfolio-engine")
            .enable_all()
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "multi-threaded runtime unavailable, falling back");
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .unwrap_or_else(|err| {
                        error!(error = %err, "cannot create a tokio runtime");
                        panic!("termfolio requires a tokio runtime: {err}");
                    })
            });

        let (request_tx, mut request_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let boot_config = config.boot.clone();
        runtime.spawn(async move {
            async_ops::request_loop(&mut request_rx, event_tx, interpreter, ctx, boot_config)
                .await;
        });

        Self {
            output,
            controller: InputController::new(),
            registry,
            config,
            colors,
            runtime,
            request_tx,
            event_rx,
            boot_started: false,
            force_caret_to_end: false,
            focus_input: false,
        }
    }

    /// Apply every pending background event.
    fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                UiEvent::Boot(BootEvent::InputRevealed) => {
                    self.controller.show_input();
                    self.focus_input = true;
                }
                UiEvent::Boot(BootEvent::KeystrokeTyped(ch)) => {
                    self.controller.synth_char(ch);
                    self.force_caret_to_end = true;
                }
                UiEvent::Boot(BootEvent::ExecutionStarted) => {
                    let _ = self.controller.take_for_execution();
                }
                UiEvent::Boot(BootEvent::Finished) | UiEvent::CommandFinished => {
                    self.controller.finish_execution();
                    self.focus_input = true;
                }
            }
        }
    }

    fn line_snapshot(&self) -> Vec<SharedLine> {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .lines()
            .to_vec()
    }
}

impl eframe::App for TermfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.boot_started {
            self.boot_started = true;
            if self.request_tx.send(AppRequest::Boot).is_err() {
                error!("engine task gone before boot");
            }
        }

        self.poll_events();

        // Animations mutate the buffer off-thread; keep frames coming while
        // the input is locked.
        if !self.controller.is_editing() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }

        let lines = self.line_snapshot();
        let font = egui::FontId::monospace(self.config.ui.font_size);
        let caret_to_end = std::mem::take(&mut self.force_caret_to_end);
        let request_focus = std::mem::take(&mut self.focus_input);

        let frame = egui::Frame::none()
            .fill(self.colors.background)
            .inner_margin(egui::Margin::same(12.0));
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    output_view::render_lines(ui, &lines, &self.colors, &font);

                    if self.controller.is_editing() {
                        let result = input_row::show(
                            ui,
                            &mut self.controller,
                            &self.registry,
                            &self.colors,
                            &self.config.prompt,
                            self.config.ui.font_size,
                            caret_to_end,
                            request_focus,
                        );

                        if let Some(raw) = result.submitted {
                            if self.request_tx.send(AppRequest::Run(raw)).is_err() {
                                error!("engine task gone, dropping submission");
                            }
                        } else if self.controller.suggestions().is_open() {
                            let clicked = suggestions::show(
                                ui.ctx(),
                                result.dropdown_anchor,
                                &mut self.controller,
                                &self.colors,
                                self.config.ui.font_size,
                            );
                            if let Some(index) = clicked {
                                self.controller.apply_suggestion(index);
                                self.force_caret_to_end = true;
                            }
                        }
                    }
                });
        });
    }
}
