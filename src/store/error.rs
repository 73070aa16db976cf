//! Persistence errors.

use std::path::PathBuf;

/// Error returned by a [`PreferenceStore`](super::PreferenceStore).
///
/// None of these are fatal to a session: the resolver treats a failed read as
/// an absent value, and the projector still applies tokens when a write fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// There is no persistence medium at all.
    #[error("no persistence medium available")]
    Unavailable,

    /// The medium exists but refuses writes.
    #[error("preference store is read-only")]
    ReadOnly,

    /// Reading or writing the backing file failed.
    #[error("failed to access preference file \"{}\": {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// The backing file exists but does not hold a key/value object.
    #[error("preference file \"{}\" is malformed: {message}", path.display())]
    Format { path: PathBuf, message: String },
}
