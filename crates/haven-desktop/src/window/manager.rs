//! Window lifecycle manager.
//!
//! A registry of window records plus a single global monotonic z counter.
//! Relative stacking order only ever changes through `bring_to_front`, so
//! at any instant the window with the numerically highest z-index is the
//! one most recently interacted with.

use std::collections::BTreeMap;

use crate::math::{Rect, Size};
use crate::window::{Window, WindowConfig};

/// First z-index handed out.
pub const Z_INDEX_BASE: u64 = 1000;

/// Default width of a newly opened window.
pub const DEFAULT_WINDOW_WIDTH: i32 = 640;
/// Default height of a newly opened window.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 480;
/// Top-left origin of the first staggered window.
pub const CASCADE_ORIGIN: (i32, i32) = (64, 64);
/// Offset applied per already-open window so successive opens cascade.
pub const CASCADE_OFFSET: i32 = 32;

/// Default viewport used until the host reports its real size.
const DEFAULT_VIEWPORT: Size = Size::new(1280, 800);

/// In-memory window registry.
pub struct WindowManager {
    windows: BTreeMap<String, Window>,
    next_z: u64,
    viewport: Size,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create an empty manager with the default viewport.
    pub fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
            next_z: Z_INDEX_BASE,
            viewport: DEFAULT_VIEWPORT,
        }
    }

    /// Take the next z-index from the global counter.
    fn take_z(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    /// Default geometry staggered by the current open-window count.
    fn staggered_rect(&self) -> Rect {
        let step = self.windows.len() as i32 * CASCADE_OFFSET;
        Rect::new(
            CASCADE_ORIGIN.0 + step,
            CASCADE_ORIGIN.1 + step,
            DEFAULT_WINDOW_WIDTH,
            DEFAULT_WINDOW_HEIGHT,
        )
    }

    // ========== Lifecycle Operations ==========

    /// Open the window with `id`.
    ///
    /// Open is idempotent per id and never replaces an existing record: on
    /// an already-open id this degrades to `restore` (if minimized) or
    /// `bring_to_front`, and the supplied config is ignored.
    pub fn open(&mut self, id: &str, config: WindowConfig) {
        if let Some(existing) = self.windows.get(id) {
            if existing.minimized {
                self.restore(id);
            } else {
                self.bring_to_front(id);
            }
            return;
        }

        let rect = config.rect.unwrap_or_else(|| self.staggered_rect());
        let z_index = self.take_z();
        tracing::debug!(id, z_index, "window opened");
        self.windows.insert(
            String::from(id),
            Window {
                id: String::from(id),
                title: config.title,
                rect,
                minimized: false,
                maximized: false,
                z_index,
                restore_rect: None,
            },
        );
    }

    /// Remove the record for `id`. Idempotent; closing an unknown id does
    /// nothing.
    pub fn close(&mut self, id: &str) {
        if self.windows.remove(id).is_some() {
            tracing::debug!(id, "window closed");
        }
    }

    /// Hide `id` from rendering. Z-index and geometry are untouched.
    pub fn minimize(&mut self, id: &str) {
        if let Some(window) = self.windows.get_mut(id) {
            window.minimized = true;
        }
    }

    /// Un-minimize `id` and raise it to the front.
    pub fn restore(&mut self, id: &str) {
        if let Some(window) = self.windows.get_mut(id) {
            window.minimized = false;
        }
        self.bring_to_front(id);
    }

    /// Assign `id` the next global z-index, leaving every other window's
    /// z-index unchanged. This is the sole mechanism that reorders the
    /// stack.
    pub fn bring_to_front(&mut self, id: &str) {
        if !self.windows.contains_key(id) {
            return;
        }
        let z = self.take_z();
        if let Some(window) = self.windows.get_mut(id) {
            tracing::trace!(id, z, "window focused");
            window.z_index = z;
        }
    }

    /// Toggle between maximized (viewport-filling) and the geometry saved
    /// when maximizing. No-op if `id` is absent.
    pub fn toggle_maximize(&mut self, id: &str) {
        let viewport = self.viewport;
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };

        if window.maximized {
            if let Some(saved) = window.restore_rect.take() {
                window.rect = saved;
            }
            window.maximized = false;
        } else {
            window.restore_rect = Some(window.rect);
            window.rect = Rect::of_size(viewport);
            window.maximized = true;
        }
    }

    /// Move `id` during an interactive drag. No-op if absent or maximized;
    /// maximized geometry is derived from the viewport, not user-set.
    pub fn update_position(&mut self, id: &str, x: i32, y: i32) {
        if let Some(window) = self.windows.get_mut(id) {
            if window.maximized {
                return;
            }
            window.rect.x = x;
            window.rect.y = y;
        }
    }

    /// Resize `id` during an interactive drag. No-op if absent or
    /// maximized.
    pub fn update_size(&mut self, id: &str, w: i32, h: i32) {
        if let Some(window) = self.windows.get_mut(id) {
            if window.maximized {
                return;
            }
            window.rect.w = w;
            window.rect.h = h;
        }
    }

    /// Report the available viewport. Currently maximized windows re-derive
    /// their geometry from it.
    pub fn set_viewport(&mut self, w: i32, h: i32) {
        self.viewport = Size::new(w, h);
        for window in self.windows.values_mut() {
            if window.maximized {
                window.rect = Rect::of_size(self.viewport);
            }
        }
    }

    // ========== Queries ==========

    /// The record for `id`, if open.
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.get(id)
    }

    /// Whether a window with `id` is open.
    pub fn contains(&self, id: &str) -> bool {
        self.windows.contains_key(id)
    }

    /// Number of open windows, minimized included.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no windows are open.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// All open windows in ascending z order (render order).
    pub fn windows(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Windows that should be rendered, in ascending z order.
    pub fn visible_windows(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().filter(|w| w.is_visible()).collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// The most recently focused visible window.
    pub fn focused(&self) -> Option<&Window> {
        self.windows
            .values()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
    }

    /// The z counter value the next open or focus will consume.
    pub fn next_z_index(&self) -> u64 {
        self.next_z
    }

    /// Rebuild a manager from persisted state.
    ///
    /// The record list is a geometry/metadata cache: ids are deduplicated
    /// by last occurrence, the saved-geometry invariant is re-established,
    /// and the z counter is advanced past every restored z-index.
    pub(crate) fn from_records(records: Vec<Window>, next_z: u64) -> Self {
        let mut manager = Self::new();
        for mut window in records {
            if window.maximized && window.restore_rect.is_none() {
                window.restore_rect = Some(window.rect);
            }
            if !window.maximized {
                window.restore_rect = None;
            }
            manager.next_z = manager.next_z.max(window.z_index + 1);
            manager.windows.insert(window.id.clone(), window);
        }
        manager.next_z = manager.next_z.max(next_z);
        manager
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod manager_tests;
