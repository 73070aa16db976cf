//! The shared presentation sink.
//!
//! A [`PresentationContext`] plays the part of a document-level style root: it
//! holds the currently projected token values and a class list carrying the
//! coarse theme marker. One context exists per session. It is owned by the
//! [`ThemeManager`](crate::ThemeManager), which is its only writer; everything
//! else reads it through shared borrows.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use crate::theme::Theme;

/// Write side of a presentation sink.
///
/// Hosts with their own style root (a browser document, a GUI toolkit's style
/// registry) implement this to receive projected tokens directly.
pub trait PresentationSink {
    /// Sets a single token to `value`, replacing any previous value.
    fn set_token(&mut self, name: &str, value: &str);

    /// Makes `theme` the active coarse marker.
    ///
    /// After this call exactly one theme marker is active.
    fn set_theme_marker(&mut self, theme: Theme);
}

/// In-process presentation sink with read access for renderers.
///
/// # Example
///
/// ```rust
/// use spill_theme::{PresentationContext, PresentationSink, Theme};
///
/// let mut ctx = PresentationContext::new();
/// ctx.add_class("antialiased");
/// ctx.set_theme_marker(Theme::Dark);
/// ctx.set_theme_marker(Theme::Light);
///
/// assert_eq!(ctx.active_marker(), Some(Theme::Light));
/// assert!(!ctx.has_class("dark"));
/// assert!(ctx.has_class("antialiased"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationContext {
    tokens: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

impl PresentationContext {
    /// Creates an empty context: no tokens, no classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a token.
    pub fn token(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(String::as_str)
    }

    /// Iterates over all `(name, value)` pairs in name order.
    pub fn tokens(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Adds an unrelated class to the class list (fonts, layout flags).
    ///
    /// Theme marker names are reserved; use
    /// [`set_theme_marker`](PresentationSink::set_theme_marker) for those.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if Theme::parse(&class).is_none() {
            self.classes.insert(class);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// The theme whose marker is active, if a projection has happened.
    pub fn active_marker(&self) -> Option<Theme> {
        Theme::ALL
            .into_iter()
            .find(|t| self.classes.contains(t.as_str()))
    }

    /// Renders the current tokens as a CSS custom-property block.
    ///
    /// Intended for pre-rendered pages: embedding this block makes the first
    /// paint use the same values the client will project after hydration.
    ///
    /// ```rust
    /// use spill_theme::{PresentationContext, PresentationSink};
    ///
    /// let mut ctx = PresentationContext::new();
    /// ctx.set_token("list-item-bg", "#2d3748");
    /// assert_eq!(ctx.to_css(), ":root {\n  --list-item-bg: #2d3748;\n}\n");
    /// ```
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.tokens {
            let _ = writeln!(css, "  --{}: {};", name, value);
        }
        css.push_str("}\n");
        css
    }

    /// Space-separated class list, suitable for a `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes().collect::<Vec<_>>().join(" ")
    }
}

impl PresentationSink for PresentationContext {
    fn set_token(&mut self, name: &str, value: &str) {
        self.tokens.insert(name.to_string(), value.to_string());
    }

    fn set_theme_marker(&mut self, theme: Theme) {
        self.classes.remove(theme.toggled().as_str());
        self.classes.insert(theme.as_str().to_string());
    }
}

impl<P: PresentationSink + ?Sized> PresentationSink for &mut P {
    fn set_token(&mut self, name: &str, value: &str) {
        (**self).set_token(name, value)
    }

    fn set_theme_marker(&mut self, theme: Theme) {
        (**self).set_theme_marker(theme)
    }
}
