//! The closed set of visual themes.

use serde::{Deserialize, Serialize};

/// The active visual mode of a session.
///
/// Only two variants exist. The textual form (`"light"` / `"dark"`) is what
/// gets persisted and what ends up in the coarse theme marker, so it must stay
/// stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Both themes, in declaration order.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Returns the persisted / marker form of this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a stored value.
    ///
    /// Anything other than the exact strings `"light"` and `"dark"` yields
    /// `None`. Stored values are never trimmed or case-folded: a value we did
    /// not write ourselves is treated as absent.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Returns the other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a theme name from user input fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct UnknownTheme(pub String);

impl std::str::FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::parse(s).ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_values() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for raw in ["", "blue", "Dark", " light", "light\n", "null"] {
            assert_eq!(Theme::parse(raw), None, "{raw:?} should not parse");
        }
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_from_str_error_names_input() {
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }
}
