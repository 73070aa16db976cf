//! Initial theme resolution.

use super::detect::EnvironmentSignal;
use super::mode::Theme;
use crate::store::PreferenceStore;

/// Which input decided the initial theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// A valid persisted choice from an earlier session.
    Persisted,
    /// The environment reported a dark color-scheme preference.
    Environment,
    /// Neither input yielded a value.
    Default,
}

/// Outcome of resolving the initial theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub theme: Theme,
    pub source: ResolutionSource,
}

/// Decides the initial theme of a session.
///
/// Inputs are consulted in strict priority order:
///
/// 1. The persisted preference, if it is exactly `"light"` or `"dark"`
/// 2. The environment signal, if it reports a dark preference
/// 3. [`Theme::Light`]
///
/// Resolution only reads. Failed reads and malformed stored values fall
/// through to the next step; nothing here ever errors.
///
/// # Example
///
/// ```rust
/// use spill_theme::{FixedSignal, MemoryStore, PreferenceResolver, Theme};
///
/// let resolver = PreferenceResolver::new("goGameTheme");
/// let store = MemoryStore::with_entry("goGameTheme", "blue");
///
/// assert_eq!(resolver.resolve_initial_theme(&store, &FixedSignal(true)), Theme::Dark);
/// ```
#[derive(Debug, Clone)]
pub struct PreferenceResolver {
    storage_key: String,
}

impl PreferenceResolver {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Resolves the initial theme and reports which input decided it.
    pub fn resolve<S, E>(&self, store: &S, signal: &E) -> Resolution
    where
        S: PreferenceStore + ?Sized,
        E: EnvironmentSignal + ?Sized,
    {
        if let Some(theme) = self.persisted(store) {
            return Resolution {
                theme,
                source: ResolutionSource::Persisted,
            };
        }
        if signal.prefers_dark_color_scheme() {
            return Resolution {
                theme: Theme::Dark,
                source: ResolutionSource::Environment,
            };
        }
        Resolution {
            theme: Theme::Light,
            source: ResolutionSource::Default,
        }
    }

    /// Resolves the initial theme.
    pub fn resolve_initial_theme<S, E>(&self, store: &S, signal: &E) -> Theme
    where
        S: PreferenceStore + ?Sized,
        E: EnvironmentSignal + ?Sized,
    {
        self.resolve(store, signal).theme
    }

    fn persisted<S: PreferenceStore + ?Sized>(&self, store: &S) -> Option<Theme> {
        match store.get(&self.storage_key) {
            Ok(Some(raw)) => {
                let theme = Theme::parse(&raw);
                if theme.is_none() {
                    tracing::debug!(key = %self.storage_key, value = %raw, "ignoring unrecognized stored theme");
                }
                theme
            }
            Ok(None) => None,
            Err(err) => {
                tracing::debug!(key = %self.storage_key, error = %err, "stored theme unreadable");
                None
            }
        }
    }
}
