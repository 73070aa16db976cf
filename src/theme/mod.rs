//! Theme resolution and projection.
//!
//! This module provides:
//!
//! - [`Theme`]: the closed light/dark enum
//! - [`TokenSet`]: the static style tokens of each theme
//! - [`EnvironmentSignal`]: the system "prefers dark" question, with
//!   [`SystemColorScheme`] answering it from the OS
//! - [`PreferenceResolver`]: persisted choice, then environment, then light
//! - [`StyleTokenProjector`]: writes tokens and marker, persists the theme
//! - [`ThemeManager`]: the per-session owner tying these together behind a
//!   readiness gate

mod detect;
mod manager;
mod mode;
mod projector;
mod resolver;
mod tokens;

pub use detect::{EnvironmentSignal, FixedSignal, NoSignal, SystemColorScheme};
pub use manager::{ResolutionState, ThemeError, ThemeManager};
pub use mode::{Theme, UnknownTheme};
pub use projector::{project, ApplyReport, StyleTokenProjector};
pub use resolver::{PreferenceResolver, Resolution, ResolutionSource};
pub use tokens::{TokenSet, TOKEN_NAMES};
