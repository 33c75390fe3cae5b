//! Theme colors
//!
//! Maps the markup style classes onto egui colors, built once from the
//! TOML theme section. Unparseable hex values fall back to the defaults.

use eframe::egui::Color32;
use tracing::warn;

use crate::config::ThemeConfig;
use crate::models::LineStyle;

/// Cached egui colors for the rendering surface.
#[derive(Debug, Clone)]
pub struct UiColors {
    pub background: Color32,
    pub foreground: Color32,
    pub ascii_art: Color32,
    pub prompt_user: Color32,
    pub prompt_host: Color32,
    pub prompt_path: Color32,
    pub caret: Color32,
    pub selection: Color32,
}

impl UiColors {
    pub fn from_theme(theme: &ThemeConfig) -> Self {
        let defaults = ThemeConfig::default();
        let parse = |value: &str, fallback: &str| {
            parse_hex(value).unwrap_or_else(|| {
                warn!(value, "unparseable theme color, using default");
                parse_hex(fallback).unwrap_or(Color32::WHITE)
            })
        };
        Self {
            background: parse(&theme.background, &defaults.background),
            foreground: parse(&theme.foreground, &defaults.foreground),
            ascii_art: parse(&theme.ascii_art, &defaults.ascii_art),
            prompt_user: parse(&theme.prompt_user, &defaults.prompt_user),
            prompt_host: parse(&theme.prompt_host, &defaults.prompt_host),
            prompt_path: parse(&theme.prompt_path, &defaults.prompt_path),
            caret: parse(&theme.caret, &defaults.caret),
            selection: parse(&theme.selection, &defaults.selection),
        }
    }

    /// Color for a markup style class.
    pub fn class_color(&self, class: &str) -> Color32 {
        match class {
            "prompt-user" => self.prompt_user,
            "prompt-host" => self.prompt_host,
            "prompt-path" => self.prompt_path,
            "ascii-art" => self.ascii_art,
            _ => self.foreground,
        }
    }

    /// Base color for a line without span classes of its own.
    pub fn style_color(&self, style: LineStyle) -> Color32 {
        match style {
            LineStyle::AsciiArt => self.ascii_art,
            LineStyle::Output | LineStyle::Prompt => self.foreground,
        }
    }
}

impl Default for UiColors {
    fn default() -> Self {
        Self::from_theme(&ThemeConfig::default())
    }
}

/// Parse a `#rrggbb` color string.
fn parse_hex(value: &str) -> Option<Color32> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}
