use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    Result,
    config::ConfigPaths,
    config_store::ConfigStore,
    services::audio::{AudioError, FileStore, MemoryBackend, StreamRegistry},
};

/// Stream registry backed by the on-disk property file
pub type DeviceAudio = StreamRegistry<FileStore, MemoryBackend>;

/// Container for all application services
///
/// Services are created once during startup and shared via Arc references.
#[derive(Clone)]
pub struct Services {
    /// Per-stream volume, mute and curve control
    pub audio: Arc<DeviceAudio>,
}

impl Services {
    /// Create all application services
    ///
    /// Opens the property file from `audio.property_file` (or the default
    /// location), restores persisted volumes and applies the configured
    /// volume curve.
    ///
    /// # Errors
    /// Returns error if the property file cannot be opened or parsed, or if
    /// the backend rejects the initial volumes or curve
    #[instrument(skip_all)]
    pub fn new(config_store: &ConfigStore) -> Result<Self> {
        let config = config_store.get_current();

        let property_file = match &config.audio.property_file {
            Some(path) => path.clone(),
            None => ConfigPaths::property_file()?,
        };

        let store = FileStore::open(&property_file).map_err(AudioError::from)?;
        let audio = StreamRegistry::new(
            store,
            MemoryBackend::new(),
            config_store.default_volume(),
        )?;

        let shaper = config.audio.shaper;
        audio.set_volume_shaper(|max| shaper.curve(max))?;
        info!(?shaper, "Audio services ready");

        Ok(Self {
            audio: Arc::new(audio),
        })
    }
}
