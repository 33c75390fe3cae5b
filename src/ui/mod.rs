//! egui rendering surface
//!
//! The presentation layer over the engine: markup-aware output rendering,
//! the prompt input row with its measured caret, the suggestion dropdown,
//! and theme colors. The engine itself never imports anything from here.

pub mod colors;
pub mod input;
pub mod output;
pub mod suggestions;

pub use colors::UiColors;
pub use input::{input_field_id, InputRowResult};
