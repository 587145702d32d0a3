//! Snapshot persistence for the window stack.
//!
//! The persisted form is the full record list plus the next-z-index
//! counter. A restored snapshot is a geometry/metadata cache only — it
//! carries no live window content or UI handles.

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::window::{Window, WindowManager};

/// Serializable window-manager state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All open window records
    pub windows: Vec<Window>,

    /// Value of the global z counter
    pub next_z_index: u64,
}

impl Snapshot {
    /// Capture the current state of a manager.
    pub fn capture(manager: &WindowManager) -> Self {
        Self {
            windows: manager.windows().into_iter().cloned().collect(),
            next_z_index: manager.next_z_index(),
        }
    }

    /// Rebuild a manager from this snapshot.
    pub fn restore(self) -> WindowManager {
        WindowManager::from_records(self.windows, self.next_z_index)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> DesktopResult<String> {
        serde_json::to_string(self).map_err(|e| DesktopError::SerializationError(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        serde_json::from_str(json).map_err(|e| DesktopError::SerializationError(e.to_string()))
    }
}
