//! Persistence medium for the user's theme choice.
//!
//! This module provides:
//!
//! - [`PreferenceStore`]: the key/value seam the theme core persists through
//! - [`MemoryStore`]: an in-process map, shared by clones
//! - [`FileStore`]: a JSON file of key/value pairs
//! - [`UnavailableStore`]: a medium that is never there
//!
//! Exactly one key is ever written by this crate: the configured storage key
//! (see [`DEFAULT_STORAGE_KEY`]), holding `"light"` or `"dark"`.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::{MemoryStore, UnavailableStore};

/// Storage key used when no configuration overrides it.
pub const DEFAULT_STORAGE_KEY: &str = "goGameTheme";

/// A string key/value persistence medium.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
