//! Session lifecycle: resolve once, then project on every change.

use super::detect::EnvironmentSignal;
use super::mode::Theme;
use super::projector::{ApplyReport, StyleTokenProjector};
use super::resolver::{PreferenceResolver, Resolution};
use crate::config::ThemeConfig;
use crate::context::{PresentationContext, PresentationSink};
use crate::store::PreferenceStore;

/// Whether the initial theme of a session has been decided.
///
/// The state moves from `Pending` to `Resolved` exactly once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionState {
    #[default]
    Pending,
    Resolved(Theme),
}

impl ResolutionState {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionState::Resolved(_))
    }

    pub fn theme(&self) -> Option<Theme> {
        match self {
            ResolutionState::Pending => None,
            ResolutionState::Resolved(theme) => Some(*theme),
        }
    }
}

/// Misuse of the session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The theme was read or changed before the initial resolution ran.
    #[error("theme is not resolved yet; call resolve() before reading or setting it")]
    NotReady,

    /// The initial resolution was attempted a second time.
    #[error("theme was already resolved for this session")]
    AlreadyResolved,
}

/// The single owner of a session's presentation state.
///
/// A manager ties together the persistence medium, the presentation sink and
/// the resolution state. It is the only writer of the sink; renderers read
/// through [`context`](Self::context) and gate on [`is_ready`](Self::is_ready).
///
/// # Lifecycle
///
/// 1. [`new`](Self::new): state is [`ResolutionState::Pending`]
/// 2. [`resolve`](Self::resolve): decides the initial theme, projects it
/// 3. [`set_theme`](Self::set_theme) / [`toggle_theme`](Self::toggle_theme):
///    explicit changes, each one projected and persisted
///
/// Nothing can read the theme before step 2. Sharing a manager across threads
/// requires wrapping it in a single mutex; all mutation already goes through
/// `&mut self`.
///
/// # Example
///
/// ```rust
/// use spill_theme::{FixedSignal, MemoryStore, Theme, ThemeManager};
///
/// let mut manager = ThemeManager::new(MemoryStore::new());
/// assert!(!manager.is_ready());
///
/// manager.resolve(&FixedSignal(true)).unwrap();
/// assert_eq!(manager.theme().unwrap(), Theme::Dark);
/// assert_eq!(manager.context().token("button-primary-bg"), Some("#FFA000"));
///
/// manager.set_theme(Theme::Light).unwrap();
/// assert_eq!(manager.context().token("button-primary-bg"), Some("#FFD700"));
/// ```
#[derive(Debug)]
pub struct ThemeManager<S, P = PresentationContext> {
    resolver: PreferenceResolver,
    projector: StyleTokenProjector,
    store: S,
    sink: P,
    state: ResolutionState,
}

impl<S: PreferenceStore> ThemeManager<S, PresentationContext> {
    /// Creates a manager with the default storage key and a fresh context.
    pub fn new(store: S) -> Self {
        Self::with_config(&ThemeConfig::default(), store)
    }

    /// Creates a manager using the storage key from `config`.
    pub fn with_config(config: &ThemeConfig, store: S) -> Self {
        Self::with_sink(config, store, PresentationContext::new())
    }
}

impl<S: PreferenceStore, P: PresentationSink> ThemeManager<S, P> {
    /// Creates a manager projecting into a host-provided sink.
    pub fn with_sink(config: &ThemeConfig, store: S, sink: P) -> Self {
        Self {
            resolver: PreferenceResolver::new(&config.storage_key),
            projector: StyleTokenProjector::new(&config.storage_key),
            store,
            sink,
            state: ResolutionState::Pending,
        }
    }

    /// Resolves the initial theme and projects it.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::AlreadyResolved`] if called more than once.
    pub fn resolve<E>(&mut self, signal: &E) -> Result<ApplyReport, ThemeError>
    where
        E: EnvironmentSignal + ?Sized,
    {
        if self.state.is_resolved() {
            return Err(ThemeError::AlreadyResolved);
        }
        let Resolution { theme, source } = self.resolver.resolve(&self.store, signal);
        tracing::debug!(theme = %theme, ?source, "initial theme resolved");

        self.state = ResolutionState::Resolved(theme);
        Ok(self.apply(theme))
    }

    /// Readiness gate: true once the initial theme has been resolved.
    pub fn is_ready(&self) -> bool {
        self.state.is_resolved()
    }

    pub fn state(&self) -> ResolutionState {
        self.state
    }

    /// Returns the current theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NotReady`] before resolution.
    pub fn theme(&self) -> Result<Theme, ThemeError> {
        self.state.theme().ok_or(ThemeError::NotReady)
    }

    /// Changes the theme and projects it.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NotReady`] before resolution; nothing is
    /// projected or persisted in that case.
    pub fn set_theme(&mut self, theme: Theme) -> Result<ApplyReport, ThemeError> {
        if !self.state.is_resolved() {
            return Err(ThemeError::NotReady);
        }
        self.state = ResolutionState::Resolved(theme);
        Ok(self.apply(theme))
    }

    /// Switches to the other theme.
    pub fn toggle_theme(&mut self) -> Result<ApplyReport, ThemeError> {
        let next = self.theme()?.toggled();
        self.set_theme(next)
    }

    /// Read access to the presentation sink.
    pub fn context(&self) -> &P {
        &self.sink
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ends the session, handing back the store and sink.
    pub fn into_parts(self) -> (S, P) {
        (self.store, self.sink)
    }

    fn apply(&mut self, theme: Theme) -> ApplyReport {
        self.projector
            .apply_theme(theme, &mut self.sink, &mut self.store)
    }
}
