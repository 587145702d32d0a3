//! Window creation defaults.

use crate::math::Rect;

/// Defaults supplied when opening a window.
///
/// Both fields are ignored when the id is already open; re-opening an
/// existing id restores or raises the existing record.
#[derive(Clone, Debug, Default)]
pub struct WindowConfig {
    /// Initial title
    pub title: String,

    /// Initial geometry; `None` staggers from the current window count
    pub rect: Option<Rect>,
}

impl WindowConfig {
    /// Config with a title and staggered default geometry.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rect: None,
        }
    }

    /// Config with a title and explicit geometry.
    pub fn with_rect(title: impl Into<String>, rect: Rect) -> Self {
        Self {
            title: title.into(),
            rect: Some(rect),
        }
    }
}
