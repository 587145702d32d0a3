//! Entry types for the VFS layer.

use serde::{Deserialize, Serialize};

use crate::path;

/// A stored file or folder record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Leaf component, no separators
    pub name: String,

    /// Full normalized path; the unique store key
    pub path: String,

    /// Whether this entry is a folder
    pub is_folder: bool,

    /// File payload; empty for folders
    pub content: String,

    /// Byte length of `content`; 0 for folders
    pub size: u64,

    /// Clock tick of first write; immutable afterwards
    pub created: u64,

    /// Clock tick of the latest content write
    pub modified: u64,
}

impl Entry {
    /// Create a folder entry at a normalized path.
    pub fn folder(path: String, now: u64) -> Self {
        Self {
            name: String::from(path::file_name(&path)),
            path,
            is_folder: true,
            content: String::new(),
            size: 0,
            created: now,
            modified: now,
        }
    }

    /// Create a file entry at a normalized path.
    pub fn file(path: String, content: String, created: u64, modified: u64) -> Self {
        Self {
            name: String::from(path::file_name(&path)),
            path,
            is_folder: false,
            size: content.len() as u64,
            content,
            created,
            modified,
        }
    }

    /// Whether this entry is a file.
    pub fn is_file(&self) -> bool {
        !self.is_folder
    }
}

/// Aggregate usage statistics over the whole filesystem.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageUsage {
    /// Number of file entries
    pub file_count: u64,

    /// Number of folder entries
    pub folder_count: u64,

    /// Total content bytes across all files
    pub used_bytes: u64,
}
