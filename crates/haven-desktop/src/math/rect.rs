//! Window geometry rectangle.

use serde::{Deserialize, Serialize};

/// Screen-space rectangle in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Create a rectangle.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle at the origin with the given size.
    pub const fn of_size(size: super::Size) -> Self {
        Self::new(0, 0, size.w, size.h)
    }
}
