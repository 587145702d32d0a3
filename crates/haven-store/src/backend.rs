//! Backend trait for the backing store.
//!
//! Defines the interface every store implementation provides.

/// Flat key/value store interface.
///
/// All methods take `&self`; implementations use interior mutability so a
/// store can sit behind a shared reference inside the subsystem that owns
/// it. The store is single-threaded by design: every call runs to
/// completion before returning and there are no internal suspension points.
pub trait StoreBackend {
    /// Get the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or overwrite the value under `key`.
    fn put(&self, key: &str, value: &str);

    /// Remove the value under `key`. Returns `true` if a value was present.
    fn remove(&self, key: &str) -> bool;

    /// Check whether `key` has a value.
    fn exists(&self, key: &str) -> bool;

    /// All keys, sorted.
    fn keys(&self) -> Vec<String>;

    /// All key/value pairs, sorted by key. This is the persisted layout.
    fn entries(&self) -> Vec<(String, String)>;

    /// Replace the entire contents from an ordered pair list.
    fn load(&self, pairs: Vec<(String, String)>);

    /// Remove every record unconditionally.
    fn clear(&self);

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
