//! Configuration system tests
//!
//! Tests for config paths and config loading/saving.

use hilite::config::HiliteConfig;
use hilite::config_paths;
use hilite::LanguageId;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("hilite"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_themes_and_logs_are_subdirs_of_config() {
    let config = config_paths::config_dir().unwrap();
    assert!(config_paths::themes_dir().unwrap().starts_with(&config));
    assert!(config_paths::logs_dir().unwrap().starts_with(&config));
}

// ========================================================================
// Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = HiliteConfig::default();
    assert_eq!(config.theme, "dark");
    assert_eq!(config.default_language(), LanguageId::TypeScript);
    assert!(config.extra_keywords.is_empty());
}

#[test]
fn test_config_serialize_deserialize() {
    let config = HiliteConfig {
        theme: "light".to_string(),
        default_language: "css".to_string(),
        extra_keywords: vec!["model".to_string()],
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: HiliteConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
    assert_eq!(parsed.default_language(), LanguageId::Css);
}

#[test]
fn test_partial_config_uses_defaults() {
    let parsed: HiliteConfig = serde_yaml::from_str("theme: light\n").unwrap();
    assert_eq!(parsed.theme, "light");
    assert_eq!(parsed.default_language, "ts");
    assert!(parsed.extra_keywords.is_empty());
}

#[test]
fn test_unknown_default_language_falls_back() {
    let parsed: HiliteConfig = serde_yaml::from_str("default_language: fortran\n").unwrap();
    assert_eq!(parsed.default_language(), LanguageId::TypeScript);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = HiliteConfig {
        theme: "light".to_string(),
        default_language: "html".to_string(),
        extra_keywords: vec!["input".to_string(), "output".to_string()],
    };
    config.save_to(&path).unwrap();
    assert!(path.exists());

    assert_eq!(HiliteConfig::load_from(&path), config);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = HiliteConfig::load_from(&dir.path().join("missing.yaml"));
    assert_eq!(loaded, HiliteConfig::default());
}

#[test]
fn test_load_invalid_yaml_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "theme: [unclosed").unwrap();
    assert_eq!(HiliteConfig::load_from(&path), HiliteConfig::default());
}

#[test]
fn test_config_highlighter_uses_extra_keywords() {
    let config = HiliteConfig {
        extra_keywords: vec!["model".to_string()],
        ..HiliteConfig::default()
    };
    let hl = config.highlighter();
    assert!(hl.keywords().iter().any(|k| k == "model"));
    assert!(hl.keywords().iter().any(|k| k == "const"));
    assert_eq!(
        hl.highlight("model", LanguageId::TypeScript),
        "<b class=\"kw\">model</b>"
    );

    let plain = HiliteConfig::default().highlighter();
    assert_eq!(plain.highlight("model", LanguageId::TypeScript), "model");
}

#[test]
fn test_set_theme_persists_choice() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = HiliteConfig {
        extra_keywords: vec!["model".to_string()],
        ..HiliteConfig::default()
    };
    config.set_theme("light", &path).unwrap();
    assert_eq!(config.theme, "light");

    let loaded = HiliteConfig::load_from(&path);
    assert_eq!(loaded.theme, "light");
    assert_eq!(loaded.extra_keywords, vec!["model".to_string()]);
}

#[test]
fn test_set_theme_keeps_previous_on_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    // The target is an existing directory, so the write fails
    let mut config = HiliteConfig::default();
    assert!(config.set_theme("light", dir.path()).is_err());
    assert_eq!(config.theme, "dark");
}
