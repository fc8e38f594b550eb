use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::services::audio::ShaperKind;

/// Audio stream settings.
///
/// The default stream volume lives at `audio.volume.default` and is read
/// leniently from the raw document, not through this struct.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct AudioConfig {
    /// Volume curve applied to the backend at startup.
    #[serde(default)]
    pub shaper: ShaperKind,

    /// Location of the persisted property file. Defaults to
    /// `~/.devaudio/properties.toml`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_file: Option<PathBuf>,
}
