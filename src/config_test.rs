use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_matches_generator_markup() {
    let config = PageConfig::default();
    assert_eq!(config.storage_key, "generateTOCdarkMode");
    assert_eq!(config.toggle_id, "dark-toggle");
    assert_eq!(config.nav_selector, ".navigation");
    assert_eq!(config.idle(), Duration::from_millis(1500));
    assert_eq!(config.debounce(), Duration::from_millis(100));
    assert_eq!(config.frame_fallback(), Duration::from_millis(16));
}

#[test]
fn default_config_is_valid() {
    assert!(PageConfig::default().validate().is_ok());
    assert_eq!(PageConfig::default().level().unwrap(), log::Level::Info);
}

// =============================================================
// from_json
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let config = PageConfig::from_json("{}").unwrap();
    assert_eq!(config, PageConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = PageConfig::from_json(r#"{ "idle_ms": 3000, "hidden_class": "nav-hidden" }"#).unwrap();
    assert_eq!(config.idle_ms, 3000);
    assert_eq!(config.hidden_class, "nav-hidden");
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = PageConfig::from_json("{ idle_ms: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn class_with_whitespace_is_rejected() {
    let err = PageConfig::from_json(r#"{ "dark_class": "dark mode" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NotAToken { field: "dark_class", .. }));
}

#[test]
fn identical_theme_classes_are_rejected() {
    let err = PageConfig::from_json(r#"{ "dark_class": "x", "light_class": "x" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::SameThemeClass(ref c) if c == "x"));
}

#[test]
fn zero_idle_is_rejected() {
    let err = PageConfig::from_json(r#"{ "idle_ms": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Zero { field: "idle_ms" }));
}

#[test]
fn zero_debounce_is_allowed() {
    let config = PageConfig::from_json(r#"{ "debounce_ms": 0 }"#).unwrap();
    assert_eq!(config.debounce_ms, 0);
}

#[test]
fn blank_storage_key_is_rejected() {
    let err = PageConfig::from_json(r#"{ "storage_key": "  " }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Empty { field: "storage_key" }));
}

#[test]
fn log_level_parses_case_insensitively() {
    let config = PageConfig::from_json(r#"{ "log_level": "DEBUG" }"#).unwrap();
    assert_eq!(config.level().unwrap(), log::Level::Debug);
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = PageConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::LogLevel(_)));
}
