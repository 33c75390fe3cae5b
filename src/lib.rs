//! termfolio - a desktop fake-terminal portfolio
//!
//! This library provides the engine behind termfolio, a portfolio
//! application styled as a retro terminal: a visitor types commands and the
//! answers type themselves back, one character at a time.
//!
//! ## Features
//!
//! - **Command registry:** polymorphic commands keyed by name, with prefix
//!   suggestions and a generated help table
//! - **Typing renderer:** timer-driven character reveal with markup-safe
//!   escaping of dynamic text
//! - **Input controller:** history recall, live autocomplete, measured
//!   caret placement
//! - **Boot sequence:** banner plus a synthetically typed default command
//! - **Configuration:** TOML-based prompt, speed, boot, and theme settings
//!
//! ## Module Organization
//!
//! ### Engine
//!
//! - [`commands`] - Command trait, context capability object, registry,
//!   built-ins
//! - [`interpreter`] - Echo, `&` chaining, sequential execution
//! - [`terminal`] - Output buffer and the typing renderer
//! - [`input`] - Input controller state machine
//! - [`history`] / [`completion`] - Recall log and suggestion state
//! - [`boot`] - Startup choreography
//! - [`markup`] - Token vocabulary shared by renderer and surface
//!
//! ### Ambient
//!
//! - [`config`] - Configuration structures and loader
//! - [`mod@error`] - Error types and Result alias
//! - [`models`] - Shared data structures
//! - [`ui`] - egui rendering surface
//!
//! ## Architecture
//!
//! The GUI thread runs the `egui` loop; a background `tokio` runtime runs
//! the interpreter and boot sequence. The UI sends requests over an
//! unbounded channel and polls events back each frame, so the single
//! logical thread of control the engine assumes is preserved: input is
//! locked while anything executes, and no two submissions ever overlap.

pub mod boot;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod interpreter;
pub mod markup;
pub mod models;
pub mod terminal;
pub mod ui;

// Re-exports for core functionality
pub use commands::{CommandContext, CommandRegistry, TerminalCommand};
pub use config::Config;
pub use config::loader::ConfigLoader;
pub use error::{Error, Result};
pub use history::HistoryLog;
pub use input::{InputController, InputState};
pub use interpreter::Interpreter;
pub use models::{LineStyle, OutputLine};
pub use terminal::OutputBuffer;

/// The current version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
