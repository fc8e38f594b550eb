//! Unit tests for config_store module
//! No filesystem, timing, or external dependencies.

#![allow(clippy::panic, clippy::unwrap_used)]

use serde_json::{Value, json};

use crate::{config::LogLevel, config_store::ConfigStore, services::audio::ShaperKind};

#[test]
fn defaults_have_document_and_volume() {
    let store = ConfigStore::with_defaults();

    assert_eq!(store.get_current().general.log_level, LogLevel::Info);
    assert_eq!(store.get_by_path("general.log_level"), Some(&json!("info")));
    assert_eq!(store.default_volume(), 60);
    assert!(store.source().is_none());
}

#[test]
fn reads_values_outside_typed_schema() {
    let store = ConfigStore::from_toml_str(
        r#"
        [audio]
        shaper = "logarithmic"

        [audio.volume]
        default = 72
        "#,
    )
    .unwrap();

    assert_eq!(store.get_current().audio.shaper, ShaperKind::Logarithmic);
    assert_eq!(store.get_by_path("audio.volume.default"), Some(&json!(72)));
    assert_eq!(store.default_volume(), 72);
}

#[test]
fn non_numeric_default_volume_falls_back() {
    let store = ConfigStore::from_toml_str(
        r#"
        [audio.volume]
        default = "quiet"
        "#,
    )
    .unwrap();

    assert_eq!(store.default_volume(), 60);
}

#[test]
fn arrays_are_indexable() {
    let store = ConfigStore::from_toml_str(
        r#"
        [audio]
        presets = [10, 40, 80]
        "#,
    )
    .unwrap();

    assert_eq!(store.get_by_path("audio.presets.1"), Some(&json!(40)));
    assert_eq!(store.get_by_path("audio.presets.9"), None);
    assert_eq!(store.get_by_path("audio.presets.1.x"), None);
}

#[test]
fn missing_paths_resolve_to_nothing() {
    let store = ConfigStore::from_toml_str("").unwrap();

    assert_eq!(store.get_by_path("audio.volume.default"), None);
    assert_eq!(store.document(), &Value::Object(Default::default()));
}

#[test]
fn invalid_toml_is_rejected() {
    assert!(ConfigStore::from_toml_str("[audio").is_err());
}
