//! Terminal output pipeline: the shared output buffer and the typing
//! renderer that animates text into it.

pub mod output;
pub mod typist;

pub use output::{lock_line, OutputBuffer, SharedLine};
