//! Theme: the only durable user preference.

use std::fmt;

/// Color theme applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to client storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Build from the "is dark" flag used by the toggle control.
    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite theme.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Interpret a raw stored value.
    ///
    /// `"dark"` is dark, and any other non-empty value is an explicit light
    /// choice. An empty string counts as no preference.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "dark" => Some(Self::Dark),
            _ => Some(Self::Light),
        }
    }

    /// Resolve the initial theme at page load.
    ///
    /// A persisted preference always wins over the OS signal.
    #[must_use]
    pub fn resolve(stored: Option<&str>, os_prefers_dark: bool) -> Self {
        match stored.and_then(Self::from_stored) {
            Some(theme) => theme,
            None => Self::from_dark(os_prefers_dark),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
