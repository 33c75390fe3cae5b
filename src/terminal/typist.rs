//! Typing renderer
//!
//! Reveals a string against a single output line as a cooperative,
//! time-sliced animation: one translated character per tick, scheduled on
//! the runtime timer. The returned future resolves only after the final
//! character has been appended. There is no cancellation; once started, a
//! reveal runs to completion even if the buffer is cleared underneath it.

use std::time::Duration;

use crate::markup;
use crate::terminal::output::{lock_line, SharedLine};

/// Type `text` into `line`, one character per `speed` tick.
///
/// Characters are translated through the markup vocabulary as they land:
/// newlines become row breaks, spaces become non-collapsing tokens, and
/// markup-reserved characters are escaped. This is the only path by which
/// dynamic text reaches the rendering surface.
pub async fn reveal(line: &SharedLine, text: &str, speed: Duration) {
    for ch in text.chars() {
        markup::append_char(&mut lock_line(line).content, ch);
        tokio::time::sleep(speed).await;
    }
}
