//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from a [`PreferenceStore`] and applies exactly
//! one of the dark/light classes to the document root through a
//! [`ThemeSurface`]. Toggle writes the flipped value back and updates the
//! toggle glyph.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort: unreadable storage behaves as an
//! unset preference and a failed write is logged, while the visual flip still
//! happens.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::error::PageError;
use crate::state::theme::{Theme, ThemePreference};

/// Key-value storage that survives page loads.
pub trait PreferenceStore {
    /// `None` when the key is absent or storage cannot be read.
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), PageError>;
}

/// The document root plus the glyph-bearing toggle control.
pub trait ThemeSurface {
    /// Whether the dark class is currently on the root.
    fn is_dark(&self) -> bool;
    /// Replace the theme class so only `theme`'s class remains.
    fn apply(&mut self, theme: Theme);
    fn set_glyph(&mut self, glyph: &str);
}

#[derive(Debug)]
pub struct ThemeController<S, T> {
    store: S,
    surface: T,
    storage_key: String,
}

impl<S: PreferenceStore, T: ThemeSurface> ThemeController<S, T> {
    pub fn new(store: S, surface: T, storage_key: impl Into<String>) -> Self {
        Self { store, surface, storage_key: storage_key.into() }
    }

    /// Read the persisted preference.
    pub fn preference(&self) -> ThemePreference {
        ThemePreference::from_stored(self.store.load(&self.storage_key).as_deref())
    }

    /// Apply the persisted preference, or the system hint when none is stored.
    pub fn initialize(&mut self, system_prefers_dark: bool) -> Theme {
        let preference = self.preference();
        let theme = preference.resolve(system_prefers_dark);
        self.show(theme);
        log::info!("theme initialized to {} (stored {preference:?}, system dark {system_prefers_dark})", theme.as_str());
        theme
    }

    /// Flip the visible theme and persist the result.
    pub fn toggle(&mut self) -> Theme {
        let current = if self.surface.is_dark() { Theme::Dark } else { Theme::Light };
        let next = current.opposite();
        self.show(next);
        if let Err(e) = self.store.save(&self.storage_key, next.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
        log::debug!("theme toggled to {}", next.as_str());
        next
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn show(&mut self, theme: Theme) {
        self.surface.apply(theme);
        self.surface.set_glyph(theme.glyph());
    }
}
