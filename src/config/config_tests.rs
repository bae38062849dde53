use super::*;
use crate::error::KbdPluginError;
use crate::shortcuts::RenderOptions;
use std::fs;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.use_key_symbol, DEFAULT_USE_KEY_SYMBOL);
    assert_eq!(config.use_mod_symbol, DEFAULT_USE_MOD_SYMBOL);
    assert_eq!(config.use_plus, DEFAULT_USE_PLUS);
    assert_eq!(config.render_options(), RenderOptions::default());
}

#[test]
fn test_partial_config_uses_defaults() {
    let config: Config = serde_json::from_str(r#"{"usePlus": true}"#).unwrap();
    assert!(config.use_plus);
    assert!(config.use_key_symbol);
    assert!(config.use_mod_symbol);
}

#[test]
fn test_empty_object_is_default() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_serialization_is_camel_case() {
    let config = Config {
        use_key_symbol: false,
        use_mod_symbol: true,
        use_plus: true,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"useKeySymbol\":false"));
    assert!(json.contains("\"usePlus\":true"));

    let deserialized: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, config);
}

#[test]
fn test_overrides_apply_on_top_of_file() {
    let config = Config::default().with_overrides(ConfigOverrides {
        text_keys: true,
        text_mods: false,
        plus: true,
    });
    assert!(!config.use_key_symbol);
    assert!(config.use_mod_symbol);
    assert!(config.use_plus);
}

#[test]
fn test_unset_overrides_keep_file_values() {
    let file = Config {
        use_key_symbol: false,
        use_mod_symbol: false,
        use_plus: true,
    };
    assert_eq!(file.clone().with_overrides(ConfigOverrides::default()), file);
}

#[test]
fn test_load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"useModSymbol": false}"#).unwrap();

    let config = load_config_from(&path).unwrap().unwrap();
    assert!(!config.use_mod_symbol);
    assert!(config.use_key_symbol);

    let path_str = path.to_string_lossy().to_string();
    assert_eq!(load_config(Some(&path_str)), config);
}

#[test]
fn test_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert!(load_config_from(&path).unwrap().is_none());

    let path_str = path.to_string_lossy().to_string();
    assert_eq!(load_config(Some(&path_str)), Config::default());
}

#[test]
fn test_invalid_file_is_config_error_and_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    match load_config_from(&path) {
        Err(KbdPluginError::Config { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected config error, got {:?}", other),
    }

    let path_str = path.to_string_lossy().to_string();
    assert_eq!(load_config(Some(&path_str)), Config::default());
}

#[test]
fn test_expand_path_without_tilde_is_unchanged() {
    assert_eq!(
        expand_path("/etc/kbd/config.json"),
        std::path::PathBuf::from("/etc/kbd/config.json")
    );
}
