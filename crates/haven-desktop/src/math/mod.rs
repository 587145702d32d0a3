//! Core geometry types for the desktop environment.

mod rect;
mod size;

pub use rect::Rect;
pub use size::Size;
