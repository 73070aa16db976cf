//! In-process stores.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{PreferenceStore, StoreError};

/// An in-memory key/value store.
///
/// Clones share the same underlying map, so a clone handed to one session can
/// be handed to the next to model a medium that outlives a session.
///
/// # Example
///
/// ```rust
/// use spill_theme::{MemoryStore, PreferenceStore};
///
/// let mut store = MemoryStore::new();
/// let view = store.clone();
/// store.set("goGameTheme", "dark").unwrap();
/// assert_eq!(view.get("goGameTheme").unwrap().as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Returns a handle on the same entries that rejects every write.
    pub fn read_only(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
            read_only: true,
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store for environments with no persistence medium.
///
/// Every read and write fails with [`StoreError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}
