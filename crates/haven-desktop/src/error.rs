//! Error types for the desktop crate.
//!
//! Window operations on unknown ids are silent no-ops, never errors, so
//! the only fallible surface here is snapshot persistence.

/// Errors from desktop persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

/// Result type alias for desktop operations.
pub type DesktopResult<T> = Result<T, DesktopError>;
