//! Window management module
//!
//! Provides window lifecycle, focus ordering, and geometry state.

mod config;
mod manager;
#[allow(clippy::module_inception)]
mod window;

pub use config::WindowConfig;
pub use manager::WindowManager;
pub use window::Window;
