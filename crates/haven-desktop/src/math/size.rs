//! Viewport and window dimensions.

use serde::{Deserialize, Serialize};

/// Width/height pair in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Size {
    /// Create a size.
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}
