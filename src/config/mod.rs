//! Configuration schema definitions.
//!
//! Defines the typed configuration for devaudio. All sections have defaults
//! and unknown keys are ignored, so a configuration file may carry values
//! that are only read through tolerant path lookups (such as
//! `audio.volume.default`).

mod audio;
mod general;
mod loading;
mod paths;

#[cfg(test)]
mod tests;

pub use audio::AudioConfig;
pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for devaudio.
///
/// Represents the configuration schema loaded from TOML. All fields have
/// sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Audio stream settings.
    #[serde(default)]
    pub audio: AudioConfig,
}
