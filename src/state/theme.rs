#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Glyph shown while dark is active: click to go light.
pub const SUN_GLYPH: &str = "\u{2600}\u{fe0f}";
/// Glyph shown while light is active: click to go dark.
pub const MOON_GLYPH: &str = "\u{1f319}";

/// Visual state of the document root. Exactly one is active after init.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Value written to persistent storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Toggle glyph advertising the state a click switches to.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Dark => SUN_GLYPH,
            Self::Light => MOON_GLYPH,
        }
    }
}

/// Persisted user choice. `Unset` covers absent, unreadable, and unknown values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
    #[default]
    Unset,
}

impl ThemePreference {
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ => Self::Unset,
        }
    }

    /// Resolve to a concrete theme, consulting the system hint only when unset.
    pub fn resolve(self, system_prefers_dark: bool) -> Theme {
        match self {
            Self::Dark => Theme::Dark,
            Self::Light => Theme::Light,
            Self::Unset if system_prefers_dark => Theme::Dark,
            Self::Unset => Theme::Light,
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::Dark,
            Theme::Light => Self::Light,
        }
    }
}
