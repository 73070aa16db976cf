//! Projection of a theme onto the presentation sink.

use super::mode::Theme;
use super::tokens::TokenSet;
use crate::context::PresentationSink;
use crate::store::{PreferenceStore, StoreError};

/// What a single projection did.
///
/// Projection itself cannot fail. The only thing that can go wrong is
/// persisting the theme, which is reported here rather than as an error:
/// the current session is already correctly styled when the write fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub theme: Theme,
    pub tokens_written: usize,
    pub persist_error: Option<StoreError>,
}

impl ApplyReport {
    /// Whether the theme reached the persistence medium.
    pub fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }
}

/// Writes a theme's tokens and marker into a sink and persists the theme.
///
/// Every call writes the complete [`TokenSet`], so a switch never leaves a
/// token holding the previous theme's value. Applying the same theme twice is
/// observably the same as applying it once.
///
/// # Example
///
/// ```rust
/// use spill_theme::{MemoryStore, PresentationContext, PreferenceStore, StyleTokenProjector, Theme};
///
/// let projector = StyleTokenProjector::new("goGameTheme");
/// let mut ctx = PresentationContext::new();
/// let mut store = MemoryStore::new();
///
/// let report = projector.apply_theme(Theme::Dark, &mut ctx, &mut store);
/// assert!(report.is_persisted());
/// assert_eq!(ctx.token("button-primary-bg"), Some("#FFA000"));
/// assert_eq!(store.get("goGameTheme").unwrap().as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone)]
pub struct StyleTokenProjector {
    storage_key: String,
}

impl StyleTokenProjector {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    /// Projects `theme` onto `sink` and persists it to `store`.
    pub fn apply_theme<P, S>(&self, theme: Theme, sink: &mut P, store: &mut S) -> ApplyReport
    where
        P: PresentationSink + ?Sized,
        S: PreferenceStore + ?Sized,
    {
        let tokens_written = project(theme, sink);

        let persist_error = store.set(&self.storage_key, theme.as_str()).err();
        if let Some(err) = &persist_error {
            tracing::warn!(
                theme = %theme,
                key = %self.storage_key,
                error = %err,
                "theme applied but could not be persisted"
            );
        }

        tracing::debug!(theme = %theme, tokens = tokens_written, "theme applied");
        ApplyReport {
            theme,
            tokens_written,
            persist_error,
        }
    }
}

/// Writes the full token set and the marker for `theme`, without persisting.
///
/// Returns the number of tokens written.
pub fn project<P: PresentationSink + ?Sized>(theme: Theme, sink: &mut P) -> usize {
    let set = TokenSet::for_theme(theme);
    for (name, value) in set.iter() {
        sink.set_token(name, value);
    }
    sink.set_theme_marker(theme);
    set.len()
}
