//! Error types for the VFS layer.

use serde::{Deserialize, Serialize};

/// Errors from VFS operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VfsError {
    /// No entry at the target path
    NotFound,

    /// An entry already occupies the target path
    AlreadyExists,

    /// The operation is structurally invalid for its target
    InvalidOperation(String),

    /// A stored record could not be encoded or decoded
    Store(String),
}

impl VfsError {
    /// Create an invalid-operation error with a reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidOperation(reason.into())
    }

    /// Create a store error with a message.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

impl std::fmt::Display for VfsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::AlreadyExists => write!(f, "already exists"),
            Self::InvalidOperation(reason) => write!(f, "invalid operation: {}", reason),
            Self::Store(msg) => write!(f, "store error: {}", msg),
        }
    }
}

impl std::error::Error for VfsError {}
