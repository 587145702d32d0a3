//! Haven OS Virtual Filesystem Layer
//!
//! The VFS layer provides path semantics over a flat backing store:
//!
//! - **Types**: `Entry` for file and folder records
//! - **Path**: Path normalization and manipulation
//! - **Vfs**: Filesystem operations with cascading move/rename/delete
//!
//! # Design Principles
//!
//! 1. **Flat map, full-path keys**: Entries live in a flat store keyed by
//!    normalized path. Cascading operations pay an O(n) prefix scan; in
//!    exchange, single-key CRUD is trivial and the whole filesystem
//!    serializes as one ordered list of key/value pairs. The expected scale
//!    is hundreds of entries, not millions.
//! 2. **Empty string is root**: `""` is the root container and never an
//!    entry itself. Normalization strips leading and trailing separators,
//!    so `"a/"`, `"/a"`, and `"a"` all denote `"a"`.
//! 3. **Collect, then apply**: Cascading operations collect every affected
//!    key before mutating anything, so a rename never races its own
//!    key-collision checks and no iteration happens over a map being
//!    mutated.
//! 4. **Explicit results**: Failures surface as `Result` values; callers
//!    check before proceeding. Nothing in this crate panics.

pub mod path;

mod error;
mod types;
mod vfs;

pub use error::VfsError;
pub use types::{Entry, StorageUsage};
pub use vfs::Vfs;
