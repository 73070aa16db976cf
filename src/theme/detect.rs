//! Environment color-scheme signal.
//!
//! The resolver asks a single question of the hosting environment: does the
//! user prefer a dark color scheme? Anything implementing
//! [`EnvironmentSignal`] can answer it, including plain closures, which makes
//! forcing a mode in tests trivial.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

/// Source of the system-level "prefers dark" preference.
///
/// Implementations must not fail: a source that cannot be consulted answers
/// `false`.
pub trait EnvironmentSignal {
    fn prefers_dark_color_scheme(&self) -> bool;
}

impl<F> EnvironmentSignal for F
where
    F: Fn() -> bool,
{
    fn prefers_dark_color_scheme(&self) -> bool {
        self()
    }
}

/// Reads the operating system's light/dark setting.
///
/// # Example
///
/// ```rust,no_run
/// use spill_theme::{EnvironmentSignal, SystemColorScheme};
///
/// let dark = SystemColorScheme.prefers_dark_color_scheme();
/// println!("system prefers dark: {dark}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColorScheme;

impl EnvironmentSignal for SystemColorScheme {
    fn prefers_dark_color_scheme(&self) -> bool {
        matches!(detect_os_theme(), OsThemeMode::Dark)
    }
}

/// A signal with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSignal(pub bool);

impl EnvironmentSignal for FixedSignal {
    fn prefers_dark_color_scheme(&self) -> bool {
        self.0
    }
}

/// No signal source available, e.g. while pre-rendering on a server.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSignal;

impl EnvironmentSignal for NoSignal {
    fn prefers_dark_color_scheme(&self) -> bool {
        false
    }
}
