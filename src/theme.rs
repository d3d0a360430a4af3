//! Color theme values and preference resolution.
//!
//! Resolution is an ordered fallback chain: a valid persisted value wins, then
//! the OS color-scheme signal, then [`Theme::Light`]. The result is tagged with
//! the step that produced it so callers (and tests) can tell the three apart.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

/// Active color theme, mirrored in the root element's theme attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted or attribute value. Anything but exact `"light"` / `"dark"` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The value written to storage and to the theme attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which step of the fallback chain produced a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// A valid value was found in persistent storage.
    FromStorage,
    /// Storage was empty or invalid; the OS dark-mode signal decided.
    FromSystemSignal,
    /// Neither storage nor the OS signal were usable.
    Default,
}

/// A resolved theme and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeResolution {
    pub theme: Theme,
    pub source: ThemeSource,
}

/// Resolve the theme from a persisted value and the OS signal.
///
/// `system_prefers_dark` is `None` when the host cannot evaluate the media query.
#[must_use]
pub fn resolve_theme(stored: Option<&str>, system_prefers_dark: Option<bool>) -> ThemeResolution {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return ThemeResolution { theme, source: ThemeSource::FromStorage };
    }
    match system_prefers_dark {
        Some(dark) => ThemeResolution { theme: Theme::from_dark(dark), source: ThemeSource::FromSystemSignal },
        None => ThemeResolution { theme: Theme::default(), source: ThemeSource::Default },
    }
}
