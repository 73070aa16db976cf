//! JSON-file backed store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{PreferenceStore, StoreError};

/// Persists key/value pairs as a flat JSON object in a single file.
///
/// A missing file reads as "nothing stored". Only the written key is touched:
/// other entries survive a write whatever their JSON type, and a key holding
/// a non-string value reads as absent. Writes go through a sibling
/// temporary file followed by a rename, so a crash mid-write never leaves a
/// truncated file behind. Parent directories are created on first write.
///
/// # Example
///
/// ```rust,no_run
/// use spill_theme::{FileStore, PreferenceStore};
///
/// let mut store = FileStore::new(".spill-theme.json");
/// store.set("goGameTheme", "dark")?;
/// # Ok::<(), spill_theme::StoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }

    fn format_error(&self, message: impl Into<String>) -> StoreError {
        StoreError::Format {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    fn read_entries(&self) -> Result<Map<String, Value>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(self.io_error(err)),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&raw).map_err(|e| self.format_error(e.to_string()))? {
            Value::Object(entries) => Ok(entries),
            _ => Err(self.format_error("expected a JSON object")),
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let body =
            serde_json::to_string_pretty(entries).map_err(|e| self.format_error(e.to_string()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, body).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .read_entries()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // Content that is not a JSON object is replaced rather than blocking the write.
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StoreError::Format { message, .. }) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %message,
                    "discarding malformed preference file"
                );
                Map::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.write_entries(&entries)
    }
}
