//! Haven OS Desktop Core
//!
//! This crate provides the shared desktop state for the shell simulation:
//! - Window management (open, close, focus order, minimize, maximize)
//! - Desktop settings (theme, wallpaper) with change notification
//! - Snapshot persistence for the window stack
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is plain Rust, testable
//!    without any rendering host.
//! 2. **Single actor**: Every operation runs to completion synchronously;
//!    the design assumes one logical caller (the UI thread).
//! 3. **Silent no-ops**: Operations on unknown window ids do nothing. The
//!    shell routinely issues operations against windows the user just
//!    closed, and that must never be an error.

pub mod math;
pub mod window;

mod error;
mod persistence;
mod settings;

pub use error::{DesktopError, DesktopResult};
pub use math::{Rect, Size};
pub use persistence::Snapshot;
pub use settings::{Settings, TOPIC_THEME, TOPIC_WALLPAPER};
pub use window::{Window, WindowConfig, WindowManager};
