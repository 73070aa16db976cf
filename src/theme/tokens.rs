//! Static style tokens for each theme.
//!
//! Token names are CSS custom-property names without the leading `--`. Values
//! are opaque color strings handed to the presentation sink untouched.
//!
//! Both token sets carry exactly the same names, in the same order. Projection
//! relies on this: writing the full set for the new theme overwrites every
//! value written for the old one, so no stale entry can survive a switch.

use super::mode::Theme;

/// Every token name, in projection order.
pub static TOKEN_NAMES: [&str; 12] = [
    "button-primary-bg",
    "button-primary-text",
    "button-primary-border",
    "button-primary-shadow-color",
    "button-secondary-bg",
    "button-secondary-text",
    "button-secondary-border",
    "button-secondary-shadow-color",
    "list-item-bg",
    "list-item-text",
    "list-item-border-color",
    "list-item-hover-bg",
];

static LIGHT: [&str; 12] = [
    "#FFD700",
    "#2c2c2c",
    "#B8860B",
    "rgba(0,0,0,0.25)",
    "#4ECDC4",
    "#FFFFFF",
    "#3AAFA9",
    "rgba(0,0,0,0.2)",
    "#f9f9f9",
    "#333333",
    "#e0e0e0",
    "#efefef",
];

static DARK: [&str; 12] = [
    "#FFA000",
    "#FFFFFF",
    "#D46F00",
    "rgba(0,0,0,0.35)",
    "#20B2AA",
    "#FFFFFF",
    "#1A8C84",
    "rgba(0,0,0,0.3)",
    "#2d3748",
    "#e2e8f0",
    "#4A5568",
    "#374151",
];

/// The full set of named color values for one [`Theme`].
///
/// Token sets are derived data: there is exactly one per theme and they are
/// never persisted.
///
/// # Example
///
/// ```rust
/// use spill_theme::{Theme, TokenSet};
///
/// let dark = TokenSet::for_theme(Theme::Dark);
/// assert_eq!(dark.get("button-primary-bg"), Some("#FFA000"));
/// assert_eq!(dark.len(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSet {
    theme: Theme,
    values: &'static [&'static str; 12],
}

impl TokenSet {
    /// Returns the token set for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        let values = match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        };
        Self { theme, values }
    }

    /// The theme this set belongs to.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Looks up a single token value by name.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        TOKEN_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }

    /// Iterates over `(name, value)` pairs in projection order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        TOKEN_NAMES.iter().copied().zip(self.values.iter().copied())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        TOKEN_NAMES.iter().copied()
    }

    pub fn len(&self) -> usize {
        TOKEN_NAMES.len()
    }

    pub fn is_empty(&self) -> bool {
        TOKEN_NAMES.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_names_are_unique() {
        let unique: HashSet<_> = TOKEN_NAMES.iter().collect();
        assert_eq!(unique.len(), TOKEN_NAMES.len());
    }

    #[test]
    fn test_both_sets_share_names() {
        let light: Vec<_> = TokenSet::for_theme(Theme::Light).names().collect();
        let dark: Vec<_> = TokenSet::for_theme(Theme::Dark).names().collect();
        assert_eq!(light, dark);
    }

    #[test]
    fn test_light_values() {
        let set = TokenSet::for_theme(Theme::Light);
        assert_eq!(set.get("button-primary-bg"), Some("#FFD700"));
        assert_eq!(set.get("button-secondary-shadow-color"), Some("rgba(0,0,0,0.2)"));
        assert_eq!(set.get("list-item-hover-bg"), Some("#efefef"));
    }

    #[test]
    fn test_dark_values() {
        let set = TokenSet::for_theme(Theme::Dark);
        assert_eq!(set.get("button-primary-bg"), Some("#FFA000"));
        assert_eq!(set.get("button-primary-border"), Some("#D46F00"));
        assert_eq!(set.get("list-item-bg"), Some("#2d3748"));
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(TokenSet::for_theme(Theme::Light).get("page-background"), None);
    }

    #[test]
    fn test_sets_differ_where_expected() {
        let light = TokenSet::for_theme(Theme::Light);
        let dark = TokenSet::for_theme(Theme::Dark);
        let differing = light
            .iter()
            .zip(dark.iter())
            .filter(|((_, l), (_, d))| l != d)
            .count();
        // Secondary button text is white in both themes.
        assert_eq!(differing, TOKEN_NAMES.len() - 1);
    }

    #[test]
    fn test_iter_order_matches_names() {
        let set = TokenSet::for_theme(Theme::Dark);
        let names: Vec<_> = set.iter().map(|(n, _)| n).collect();
        assert_eq!(names, TOKEN_NAMES.to_vec());
    }
}
