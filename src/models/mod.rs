//! Data structures shared across the engine

pub mod output_line;

pub use output_line::{LineStyle, OutputLine};
