//! Page behavior configuration.
//!
//! Every field has a default matching the markup emitted by the TOC generator,
//! so a page without an override behaves identically to one with `{}`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_STORAGE_KEY: &str = "generateTOCdarkMode";
pub const DEFAULT_TOGGLE_ID: &str = "dark-toggle";
pub const DEFAULT_NAV_SELECTOR: &str = ".navigation";
pub const DEFAULT_DARK_CLASS: &str = "dark";
pub const DEFAULT_LIGHT_CLASS: &str = "light";
pub const DEFAULT_HIDDEN_CLASS: &str = "hidden";
pub const DEFAULT_IDLE_MS: u32 = 1500;
pub const DEFAULT_DEBOUNCE_MS: u32 = 100;
pub const DEFAULT_FRAME_FALLBACK_MS: u32 = 16;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors raised while parsing or validating a [`PageConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config field `{field}` must not be empty")]
    Empty { field: &'static str },
    #[error("config field `{field}` must be a single class token, got {value:?}")]
    NotAToken { field: &'static str, value: String },
    #[error("dark and light classes must differ (both {0:?})")]
    SameThemeClass(String),
    #[error("config field `{field}` must be greater than zero")]
    Zero { field: &'static str },
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub storage_key: String,
    pub toggle_id: String,
    pub nav_selector: String,
    pub dark_class: String,
    pub light_class: String,
    pub hidden_class: String,
    pub idle_ms: u32,
    pub debounce_ms: u32,
    pub frame_fallback_ms: u32,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            nav_selector: DEFAULT_NAV_SELECTOR.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            light_class: DEFAULT_LIGHT_CLASS.to_owned(),
            hidden_class: DEFAULT_HIDDEN_CLASS.to_owned(),
            idle_ms: DEFAULT_IDLE_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            frame_fallback_ms: DEFAULT_FRAME_FALLBACK_MS,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override. Absent fields keep their defaults.
    ///
    /// The result is validated before it is returned.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("storage_key", &self.storage_key)?;
        non_empty("toggle_id", &self.toggle_id)?;
        non_empty("nav_selector", &self.nav_selector)?;
        class_token("dark_class", &self.dark_class)?;
        class_token("light_class", &self.light_class)?;
        class_token("hidden_class", &self.hidden_class)?;
        if self.dark_class == self.light_class {
            return Err(ConfigError::SameThemeClass(self.dark_class.clone()));
        }
        if self.idle_ms == 0 {
            return Err(ConfigError::Zero { field: "idle_ms" });
        }
        if self.frame_fallback_ms == 0 {
            return Err(ConfigError::Zero { field: "frame_fallback_ms" });
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(self.log_level.trim()).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn idle(&self) -> Duration {
        Duration::from_millis(u64::from(self.idle_ms))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.debounce_ms))
    }

    pub fn frame_fallback(&self) -> Duration {
        Duration::from_millis(u64::from(self.frame_fallback_ms))
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty { field });
    }
    Ok(())
}

fn class_token(field: &'static str, value: &str) -> Result<(), ConfigError> {
    non_empty(field, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::NotAToken { field, value: value.to_owned() });
    }
    Ok(())
}
