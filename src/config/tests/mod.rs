//! Unit tests for config module
//!
//! Tests configuration types, defaults, and document parsing.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::path::PathBuf;

use crate::{
    DevaudioError,
    config::{Config, LogLevel},
    services::audio::ShaperKind,
};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.audio.shaper, ShaperKind::Linear);
    assert_eq!(config.audio.property_file, None);
}

#[test]
fn config_serialize_toml() {
    let config = Config::default();

    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[audio]"));
    assert!(toml_str.contains("shaper = \"linear\""));
    assert!(!toml_str.contains("property_file"));
}

#[test]
fn config_from_full_document() {
    let document = Config::parse_document(
        r#"
        [general]
        log_level = "debug"

        [audio]
        shaper = "logarithmic"
        property_file = "/tmp/properties.toml"
        "#,
        None,
    )
    .unwrap();

    let config = Config::from_document(&document).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.audio.shaper, ShaperKind::Logarithmic);
    assert_eq!(
        config.audio.property_file,
        Some(PathBuf::from("/tmp/properties.toml"))
    );
}

#[test]
fn config_empty_document() {
    let document = Config::parse_document("", None).unwrap();

    let config = Config::from_document(&document).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.audio.shaper, ShaperKind::Linear);
}

#[test]
fn config_ignores_keys_outside_schema() {
    let document = Config::parse_document(
        r#"
        [audio.volume]
        default = "not a number"

        [unrelated]
        value = 1
        "#,
        None,
    )
    .unwrap();

    assert!(Config::from_document(&document).is_ok());
}

#[test]
fn config_rejects_wrong_types_in_schema() {
    let document = Config::parse_document(
        r#"
        [audio]
        shaper = "cubic"
        "#,
        None,
    )
    .unwrap();

    let result = Config::from_document(&document);

    assert!(matches!(
        result,
        Err(DevaudioError::ConfigValidation { .. })
    ));
}

#[test]
fn config_parse_error_reports_location() {
    let result = Config::parse_document("[general\nlog_level = ", None);

    match result {
        Err(DevaudioError::TomlParseError { location, .. }) => assert_eq!(location, "string"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn log_level_filters() {
    assert_eq!(LogLevel::Warn.as_filter(), "warn");
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}

#[test]
fn config_schema_lists_sections() {
    let schema = schemars::schema_for!(Config);
    let rendered = serde_json::to_string(&schema).unwrap();

    assert!(rendered.contains("general"));
    assert!(rendered.contains("shaper"));
}
