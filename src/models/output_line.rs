//! Output Line Model
//!
//! Represents a single entry in the terminal's output buffer: either a line
//! that is revealed character by character by the typing renderer, or a
//! pre-rendered markup line inserted complete (the interpreter's prompt
//! echoes).

use chrono::{DateTime, Utc};

/// Visual style tag chosen when a line is created.
///
/// Maps one-to-one onto the style classes the rendering surface understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Ordinary command output.
    Output,
    /// Banner / ASCII-art output.
    AsciiArt,
    /// A prompt echo line.
    Prompt,
}

impl LineStyle {
    /// The style-class name used in markup and by the renderer.
    pub fn class_name(self) -> &'static str {
        match self {
            LineStyle::Output => "command-output",
            LineStyle::AsciiArt => "ascii-art",
            LineStyle::Prompt => "input-line",
        }
    }
}

/// A single line of terminal output.
///
/// `content` holds markup tokens (see [`crate::markup`]). For typed lines it
/// grows one token per animation tick and freezes once the animation
/// completes; for pre-rendered lines it is complete at insertion and never
/// mutates.
#[derive(Debug, Clone)]
pub struct OutputLine {
    /// Markup content of the line.
    pub content: String,

    /// Style tag, fixed at creation.
    pub style: LineStyle,

    /// True for raw markup lines that bypass the typing animation.
    pub pre_rendered: bool,

    /// When this line was created.
    pub timestamp: DateTime<Utc>,
}

impl OutputLine {
    /// Create an empty line that the typing renderer will fill.
    pub fn typed(style: LineStyle) -> Self {
        Self {
            content: String::new(),
            style,
            pre_rendered: false,
            timestamp: Utc::now(),
        }
    }

    /// Create a complete pre-rendered markup line.
    pub fn pre_rendered(markup: String, style: LineStyle) -> Self {
        Self {
            content: markup,
            style,
            pre_rendered: true,
            timestamp: Utc::now(),
        }
    }

    /// Plain-text view of the line, entities decoded and tags stripped.
    pub fn plain_text(&self) -> String {
        crate::markup::to_plain_text(&self.content)
    }
}
