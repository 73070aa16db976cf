//! # Spill Theme - presentation state for the Go Spill front end
//!
//! Spill Theme decides a session's visual theme, keeps it in sync with the
//! user's stored choice and the system color-scheme preference, and projects
//! the theme's style tokens onto a single shared presentation context.
//!
//! ## Lifecycle
//!
//! 1. Create a [`ThemeManager`] around a [`PreferenceStore`]; it starts out
//!    not ready
//! 2. Call [`ThemeManager::resolve`] once: the persisted choice wins, then the
//!    [`EnvironmentSignal`], then [`Theme::Light`]
//! 3. Render only once [`ThemeManager::is_ready`] is true, reading tokens
//!    from [`ThemeManager::context`]
//! 4. Change the theme with [`ThemeManager::set_theme`] or
//!    [`ThemeManager::toggle_theme`]; every change re-projects all tokens and
//!    persists the new value
//!
//! ## Quick Start
//!
//! ```rust
//! use spill_theme::{FixedSignal, MemoryStore, PreferenceStore, Theme, ThemeManager};
//!
//! let store = MemoryStore::new();
//! let mut session = ThemeManager::new(store.clone());
//!
//! // System prefers dark, nothing stored yet.
//! session.resolve(&FixedSignal(true)).unwrap();
//! assert_eq!(session.theme().unwrap(), Theme::Dark);
//! assert_eq!(session.context().token("button-primary-bg"), Some("#FFA000"));
//!
//! // Explicit toggle: tokens follow, choice is persisted.
//! session.set_theme(Theme::Light).unwrap();
//! assert_eq!(session.context().token("button-primary-bg"), Some("#FFD700"));
//! assert_eq!(store.get("goGameTheme").unwrap().as_deref(), Some("light"));
//!
//! // The next session starts from the stored choice.
//! let mut next = ThemeManager::new(store);
//! next.resolve(&FixedSignal(true)).unwrap();
//! assert_eq!(next.theme().unwrap(), Theme::Light);
//! ```
//!
//! ## Failure handling
//!
//! Environmental irregularities never reach the UI: an unreadable or
//! malformed stored value counts as absent, a missing color-scheme signal
//! counts as "prefers light", and a failed write is logged through `tracing`
//! and reported in the returned [`ApplyReport`] while the tokens are applied
//! regardless. Only lifecycle misuse surfaces as a [`ThemeError`].

pub mod config;
pub mod context;
pub mod games;
pub mod page;
pub mod store;
pub mod theme;

pub use config::{ConfigError, ThemeConfig};
pub use context::{PresentationContext, PresentationSink};
pub use games::{GameId, GameInfo, GameSource, GameSourceError, GameStatus, PlaceholderGames};
pub use store::{
    FileStore, MemoryStore, PreferenceStore, StoreError, UnavailableStore, DEFAULT_STORAGE_KEY,
};
pub use theme::{
    project, ApplyReport, EnvironmentSignal, FixedSignal, NoSignal, PreferenceResolver,
    Resolution, ResolutionSource, ResolutionState, StyleTokenProjector, SystemColorScheme, Theme,
    ThemeError, ThemeManager, TokenSet, UnknownTheme, TOKEN_NAMES,
};
