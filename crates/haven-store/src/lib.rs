//! Haven OS Backing Store
//!
//! A flat persistent associative container mapping a normalized string key
//! to a serialized record. Higher layers (the virtual filesystem and the
//! desktop settings registry) use the store exclusively through the
//! [`StoreBackend`] trait; nothing else touches it directly.
//!
//! # Design Principles
//!
//! 1. **Flat keyspace**: No hierarchy at this layer. Path semantics live in
//!    the filesystem crate; the store only sees opaque keys.
//! 2. **Dependency injection**: Subsystems own the store instance they are
//!    handed, so tests can instantiate isolated stores per case.
//! 3. **Ordered persistence**: The whole store serializes as one sorted
//!    list of key/value pairs.

pub mod memory;

mod backend;

pub use backend::StoreBackend;
pub use memory::MemoryStore;
