//! Configuration management for termfolio
//!
//! TOML-backed configuration with built-in defaults for every field. The
//! loader degrades gracefully: a missing or malformed file falls back to
//! defaults rather than refusing to start.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prompt decoration
    pub prompt: PromptConfig,

    /// Typing animation speeds
    pub typing: TypingConfig,

    /// Boot sequence choreography
    pub boot: BootConfig,

    /// Window and theme settings
    pub ui: UiConfig,
}

/// The `user@host:path$` decoration shown on echoed prompt lines and ahead
/// of the input field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub user: String,
    pub host: String,
    pub path: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            user: "visitor".to_string(),
            host: "termfolio".to_string(),
            path: ":~$".to_string(),
        }
    }
}

/// Reveal intervals for the typing renderer, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub output_ms: u64,
    pub data_ms: u64,
    pub error_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            output_ms: 30,
            data_ms: 5,
            error_ms: 10,
        }
    }
}

impl TypingConfig {
    pub fn output_speed(&self) -> Duration {
        Duration::from_millis(self.output_ms)
    }

    pub fn data_speed(&self) -> Duration {
        Duration::from_millis(self.data_ms)
    }

    pub fn error_speed(&self) -> Duration {
        Duration::from_millis(self.error_ms)
    }
}

/// Boot sequence: which command to fake-type and how fast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    /// Command synthesized at startup.
    pub command: String,
    /// Pause after the banner before typing starts.
    pub startup_pause_ms: u64,
    /// Delay between synthetic keystrokes.
    pub keystroke_ms: u64,
    /// Pause after typing before the command runs.
    pub pre_execute_pause_ms: u64,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            command: "about".to_string(),
            startup_pause_ms: 500,
            keystroke_ms: 100,
            pre_execute_pause_ms: 500,
        }
    }
}

impl BootConfig {
    pub fn startup_pause(&self) -> Duration {
        Duration::from_millis(self.startup_pause_ms)
    }

    pub fn keystroke_delay(&self) -> Duration {
        Duration::from_millis(self.keystroke_ms)
    }

    pub fn pre_execute_pause(&self) -> Duration {
        Duration::from_millis(self.pre_execute_pause_ms)
    }
}

/// Window geometry, font size, and theme colors (`#rrggbb` strings).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub font_size: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_size: 15.0,
            window_width: 900.0,
            window_height: 600.0,
            theme: ThemeConfig::default(),
        }
    }
}

/// Color assignments for the style classes the renderer knows about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: String,
    pub foreground: String,
    pub ascii_art: String,
    pub prompt_user: String,
    pub prompt_host: String,
    pub prompt_path: String,
    pub caret: String,
    pub selection: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#0d1117".to_string(),
            foreground: "#c9d1d9".to_string(),
            ascii_art: "#39d353".to_string(),
            prompt_user: "#39d353".to_string(),
            prompt_host: "#58a6ff".to_string(),
            prompt_path: "#bc8cff".to_string(),
            caret: "#c9d1d9".to_string(),
            selection: "#1f6feb".to_string(),
        }
    }
}
