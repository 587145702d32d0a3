//! Filesystem operations over a flat backing store.

use core::cell::RefCell;

use haven_store::StoreBackend;

use crate::error::VfsError;
use crate::path;
use crate::types::{Entry, StorageUsage};

/// First tick of the injectable clock.
const CLOCK_EPOCH: u64 = 1000;

/// Path-addressed virtual filesystem.
///
/// Owns its backing store; tests instantiate one isolated store per case.
/// Timestamps come from an internal monotonic tick counter so behavior is
/// deterministic; hosts that want wall-clock stamps seed it with
/// [`Vfs::set_now`] before mutating.
pub struct Vfs<S: StoreBackend> {
    store: S,
    /// Current timestamp generator
    now: RefCell<u64>,
}

impl<S: StoreBackend> Vfs<S> {
    /// Create a filesystem over an empty (or previously populated) store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            now: RefCell::new(CLOCK_EPOCH),
        }
    }

    /// Get the current timestamp and advance the clock.
    fn tick(&self) -> u64 {
        let mut now = self.now.borrow_mut();
        let current = *now;
        *now += 1;
        current
    }

    /// Set the current timestamp (for testing, or wall-clock seeding).
    pub fn set_now(&self, timestamp: u64) {
        *self.now.borrow_mut() = timestamp;
    }

    fn load_entry(&self, key: &str) -> Result<Option<Entry>, VfsError> {
        match self.store.get(key) {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| VfsError::store(e.to_string())),
            None => Ok(None),
        }
    }

    fn save_entry(&self, entry: &Entry) -> Result<(), VfsError> {
        let raw = serde_json::to_string(entry).map_err(|e| VfsError::store(e.to_string()))?;
        self.store.put(&entry.path, &raw);
        Ok(())
    }

    // ========== Write Operations ==========

    /// Create a folder named `name` under `parent`.
    ///
    /// Fails with `AlreadyExists` if the computed path is occupied. The
    /// parent folder is not required to exist; see [`Vfs::list`] for how
    /// orphaned deep paths behave.
    pub fn create_folder(&self, name: &str, parent: &str) -> Result<Entry, VfsError> {
        let target = path::join(&path::normalize(parent), name);
        if self.store.exists(&target) {
            return Err(VfsError::AlreadyExists);
        }

        let entry = Entry::folder(target, self.tick());
        self.save_entry(&entry)?;
        Ok(entry)
    }

    /// Insert or overwrite the file at `parent/name`.
    ///
    /// Preserves the original `created` timestamp on overwrite; always
    /// refreshes `modified` and `size`. Callers pre-validate names; the
    /// store itself never rejects a write.
    pub fn write_file(&self, name: &str, content: &str, parent: &str) -> Result<Entry, VfsError> {
        let target = path::join(&path::normalize(parent), name);

        let modified = self.tick();
        let created = match self.load_entry(&target)? {
            Some(existing) => existing.created,
            None => modified,
        };

        let entry = Entry::file(target, String::from(content), created, modified);
        self.save_entry(&entry)?;
        Ok(entry)
    }

    /// Delete the entry at `path`.
    ///
    /// Deleting a folder cascades to every entry whose path extends the
    /// folder's path by a `/`-prefixed suffix. All affected keys are
    /// collected before any removal.
    pub fn delete(&self, raw_path: &str) -> Result<(), VfsError> {
        let target = path::normalize(raw_path);
        let entry = self.load_entry(&target)?.ok_or(VfsError::NotFound)?;

        if entry.is_folder {
            let victims = self.subtree_keys(&target);
            tracing::debug!(path = %target, count = victims.len(), "cascading delete");
            for key in victims {
                self.store.remove(&key);
            }
        } else {
            self.store.remove(&target);
        }

        Ok(())
    }

    /// Move the entry at `source` into the folder at `target_folder`,
    /// keeping its name.
    ///
    /// Folder moves re-key every descendant by prefix replacement,
    /// preserving relative structure. Moving a folder into itself or its
    /// own subtree is rejected as `InvalidOperation`.
    pub fn move_entry(&self, source: &str, target_folder: &str) -> Result<(), VfsError> {
        let source = path::normalize(source);
        let target_folder = path::normalize(target_folder);

        let entry = self.load_entry(&source)?.ok_or(VfsError::NotFound)?;
        let destination = path::join(&target_folder, &entry.name);

        if self.store.exists(&destination) {
            return Err(VfsError::AlreadyExists);
        }
        if entry.is_folder
            && (target_folder == source
                || target_folder.starts_with(&format!("{}/", source)))
        {
            return Err(VfsError::invalid("cannot move a folder into itself"));
        }

        self.rekey(&source, &destination)
    }

    /// Change the final path segment of the entry at `path` to `new_name`.
    ///
    /// Folder renames cascade to descendants exactly like `move_entry`.
    pub fn rename(&self, raw_path: &str, new_name: &str) -> Result<(), VfsError> {
        let source = path::normalize(raw_path);
        if !self.store.exists(&source) {
            return Err(VfsError::NotFound);
        }

        let destination = path::join(path::parent(&source), new_name);
        if self.store.exists(&destination) {
            return Err(VfsError::AlreadyExists);
        }
        if destination.starts_with(&format!("{}/", source)) {
            return Err(VfsError::invalid("new name nests the entry inside itself"));
        }

        self.rekey(&source, &destination)
    }

    /// Empty the store unconditionally.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Re-key `from` and every descendant to live under `to`.
    ///
    /// All renames are collected before any is applied, so the batch never
    /// collides with its own intermediate states.
    fn rekey(&self, from: &str, to: &str) -> Result<(), VfsError> {
        let affected = self.subtree_keys(from);
        tracing::debug!(from = %from, to = %to, count = affected.len(), "re-keying subtree");

        let mut staged = Vec::with_capacity(affected.len());
        for key in affected {
            let new_key = format!("{}{}", to, &key[from.len()..]);
            let mut entry = self.load_entry(&key)?.ok_or(VfsError::NotFound)?;
            entry.name = String::from(path::file_name(&new_key));
            entry.path = new_key;
            staged.push((key, entry));
        }

        for (old_key, entry) in staged {
            self.store.remove(&old_key);
            self.save_entry(&entry)?;
        }
        Ok(())
    }

    /// Keys of `root` and every entry beneath it.
    fn subtree_keys(&self, root: &str) -> Vec<String> {
        let prefix = format!("{}/", root);
        self.store
            .keys()
            .into_iter()
            .filter(|key| key.as_str() == root || key.starts_with(&prefix))
            .collect()
    }

    // ========== Read Operations ==========

    /// Read the content of the file at `path`.
    ///
    /// A missing path and a folder path both report `NotFound`; neither
    /// holds readable content.
    pub fn read_file(&self, raw_path: &str) -> Result<String, VfsError> {
        let target = path::normalize(raw_path);
        match self.load_entry(&target)? {
            Some(entry) if entry.is_file() => Ok(entry.content),
            _ => Err(VfsError::NotFound),
        }
    }

    /// Get the entry at `path`.
    pub fn stat(&self, raw_path: &str) -> Result<Entry, VfsError> {
        let target = path::normalize(raw_path);
        self.load_entry(&target)?.ok_or(VfsError::NotFound)
    }

    /// Check whether an entry exists at `path`.
    pub fn exists(&self, raw_path: &str) -> bool {
        self.store.exists(&path::normalize(raw_path))
    }

    /// Direct children of the folder at `folder_path`, folders before
    /// files, then lexicographic by name.
    ///
    /// The root is `""`. Only direct-child relationships are considered:
    /// an entry whose remaining path after the `folder/` prefix contains
    /// another separator is invisible here, even though it stays
    /// retrievable by exact path.
    pub fn list(&self, folder_path: &str) -> Result<Vec<Entry>, VfsError> {
        let folder = path::normalize(folder_path);
        let prefix = if folder.is_empty() {
            String::new()
        } else {
            format!("{}/", folder)
        };

        let mut children = Vec::new();
        for key in self.store.keys() {
            if key == folder || !key.starts_with(&prefix) {
                continue;
            }
            let rest = &key[prefix.len()..];
            if rest.contains(path::SEPARATOR) {
                continue;
            }
            if let Some(entry) = self.load_entry(&key)? {
                children.push(entry);
            }
        }

        children.sort_by(|a, b| b.is_folder.cmp(&a.is_folder).then_with(|| a.name.cmp(&b.name)));
        Ok(children)
    }

    /// Every stored entry regardless of depth, sorted by path. Supports
    /// global search.
    pub fn get_all_entries(&self) -> Result<Vec<Entry>, VfsError> {
        let mut entries = Vec::with_capacity(self.store.len());
        for (_, raw) in self.store.entries() {
            let entry: Entry =
                serde_json::from_str(&raw).map_err(|e| VfsError::store(e.to_string()))?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Aggregate usage over every stored entry.
    pub fn usage(&self) -> Result<StorageUsage, VfsError> {
        let mut usage = StorageUsage::default();
        for entry in self.get_all_entries()? {
            if entry.is_folder {
                usage.folder_count += 1;
            } else {
                usage.file_count += 1;
                usage.used_bytes += entry.size;
            }
        }
        Ok(usage)
    }

    // ========== Persistence ==========

    /// Export the filesystem as an ordered list of `(path, Entry)` pairs.
    pub fn snapshot(&self) -> Result<Vec<(String, Entry)>, VfsError> {
        let mut pairs = Vec::with_capacity(self.store.len());
        for (key, raw) in self.store.entries() {
            let entry: Entry =
                serde_json::from_str(&raw).map_err(|e| VfsError::store(e.to_string()))?;
            pairs.push((key, entry));
        }
        Ok(pairs)
    }

    /// Replace the filesystem contents from a snapshot pair list.
    ///
    /// The clock is advanced past every restored timestamp so later writes
    /// keep timestamps non-decreasing.
    pub fn restore(&self, pairs: Vec<(String, Entry)>) -> Result<(), VfsError> {
        self.store.clear();
        let mut horizon = CLOCK_EPOCH;
        for (_, entry) in &pairs {
            horizon = horizon.max(entry.created + 1).max(entry.modified + 1);
            self.save_entry(entry)?;
        }
        self.set_now(horizon);
        tracing::debug!(count = self.store.len(), "filesystem restored from snapshot");
        Ok(())
    }
}

#[cfg(test)]
#[path = "vfs_tests.rs"]
mod vfs_tests;
