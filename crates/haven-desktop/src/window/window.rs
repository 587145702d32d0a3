//! Per-window state record.

use serde::{Deserialize, Serialize};

use crate::math::Rect;

/// The in-memory state tracked per open window id.
///
/// Invariants maintained by [`super::WindowManager`]:
/// - `z_index` values come from a single global counter; no two open
///   windows share one, and the highest belongs to the most recently
///   focused window.
/// - `restore_rect` is `Some` if and only if `maximized` is true.
/// - a minimized window keeps its record but is not drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Caller-assigned opaque id, unique among open windows
    pub id: String,

    /// Title shown in the frame and taskbar
    pub title: String,

    /// Current geometry
    pub rect: Rect,

    /// Whether the window is hidden from rendering
    pub minimized: bool,

    /// Whether the window fills the viewport
    pub maximized: bool,

    /// Stacking/focus order; higher renders above lower
    pub z_index: u64,

    /// Geometry saved while maximized, restored on un-maximize
    pub restore_rect: Option<Rect>,
}

impl Window {
    /// Whether the window should be rendered.
    pub fn is_visible(&self) -> bool {
        !self.minimized
    }
}
