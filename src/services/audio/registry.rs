use serde_json::Value;
use tracing::{info, instrument, warn};

use super::{
    AudioBackend, AudioError, BackendError, PropertyNamespace, PropertyStore, StreamDescriptor,
    StreamId, StreamKind,
    backend::CURVE_MAX_INDEX,
    stream::{self, BROADCAST_STREAMS, CATALOG},
};
use crate::path_ops;

/// Volume used when configuration does not provide a usable one
pub const DEFAULT_VOLUME: u8 = 60;

/// Configuration path of the default volume
pub const DEFAULT_VOLUME_PATH: &str = "audio.volume.default";

/// Resolves the default volume from a configuration document
///
/// Falls back to [`DEFAULT_VOLUME`] when the path is missing or does not hold
/// a number. Numbers are clamped to 0..=100 and floored.
pub fn default_volume_from(config: Option<&Value>) -> u8 {
    let fallback = Value::from(DEFAULT_VOLUME);
    let configured = path_ops::get(config, DEFAULT_VOLUME_PATH, &fallback);

    match configured.as_f64() {
        Some(volume) => clamp_volume(volume),
        None => {
            warn!(
                value = %configured,
                fallback = DEFAULT_VOLUME,
                "Ignoring non-numeric default volume"
            );
            DEFAULT_VOLUME
        }
    }
}

fn clamp_volume(volume: f64) -> u8 {
    volume.clamp(0.0, 100.0).floor() as u8
}

/// Reads the leading integer of a persisted value
///
/// Leading whitespace and a sign are accepted, anything after the digits is
/// ignored. Returns `None` when no digits lead the value.
fn parse_volume(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end].parse::<i64>().ok().map(|value| sign * value)
}

/// The device's audio streams and their persisted volumes
///
/// Owns the property store and audio backend it mediates. Construction
/// initializes the catalog, so every stream has a persisted volume once a
/// registry exists.
#[derive(Debug)]
pub struct StreamRegistry<S, B> {
    store: S,
    backend: B,
    default_volume: u8,
}

impl<S, B> StreamRegistry<S, B>
where
    S: PropertyStore,
    B: AudioBackend,
{
    /// Create the registry and initialize the stream catalog
    ///
    /// # Arguments
    /// * `store` - Property store holding persisted volumes
    /// * `backend` - Native audio backend
    /// * `default_volume` - Volume written for streams with nothing persisted
    ///
    /// # Errors
    /// Returns error if the store or backend fail during initialization
    pub fn new(store: S, backend: B, default_volume: u8) -> Result<Self, AudioError> {
        let registry = Self {
            store,
            backend,
            default_volume: default_volume.min(100),
        };

        registry.initialize()?;
        Ok(registry)
    }

    /// Ensure every stream has a persisted volume and apply it to the backend
    ///
    /// Streams that already have a value keep it, so running this again
    /// changes nothing in the store.
    ///
    /// # Returns
    /// Number of streams that received the default volume
    ///
    /// # Errors
    /// Returns error if the store or backend fail
    #[instrument(skip(self), fields(default_volume = self.default_volume))]
    pub fn initialize(&self) -> Result<usize, AudioError> {
        let mut defaulted = 0;

        for descriptor in &CATALOG {
            let key = descriptor.property_key();

            let persisted = match self.store.get(&key, PropertyNamespace::Persist)? {
                Some(value) => value,
                None => {
                    let value = self.default_volume.to_string();
                    self.store.set(&key, &value, PropertyNamespace::Persist)?;
                    defaulted += 1;
                    value
                }
            };

            if let Some(volume) = parse_volume(&persisted) {
                self.backend
                    .set_stream_volume(descriptor.id, clamp_volume(volume as f64))?;
            }
        }

        info!(defaulted, "Stream catalog initialized");
        Ok(defaulted)
    }

    /// Set the volume of one stream, or of the broadcast set when `stream` is `None`
    ///
    /// The volume is clamped to 0..=100 and floored before it is persisted and
    /// forwarded. A broadcast writes audio, playback, tts and ring one after
    /// another and stops at the first failure; streams already written keep
    /// their new volume.
    ///
    /// # Errors
    /// * `AudioError::InvalidArgument` - If `volume` is NaN
    /// * `AudioError::UnknownStream` - If `stream` is not in the catalog
    /// * `AudioError::PermissionDenied` - If the stream is readonly
    /// * `AudioError::Store` / `AudioError::Backend` - If persisting or forwarding fails
    pub fn set_volume(&self, stream: Option<StreamId>, volume: f64) -> Result<(), AudioError> {
        match stream {
            Some(stream) => self.set_stream_volume(stream, volume),
            None => BROADCAST_STREAMS
                .iter()
                .try_for_each(|kind| self.set_stream_volume(kind.id(), volume)),
        }
    }

    fn set_stream_volume(&self, stream: StreamId, volume: f64) -> Result<(), AudioError> {
        if volume.is_nan() {
            return Err(AudioError::InvalidArgument {
                arg: "volume",
                reason: "must be a number".to_string(),
            });
        }

        let descriptor = self.descriptor(stream)?;
        if descriptor.readonly {
            return Err(AudioError::PermissionDenied {
                stream: descriptor.name,
            });
        }

        let level = clamp_volume(volume);
        self.store.set(
            &descriptor.property_key(),
            &level.to_string(),
            PropertyNamespace::Persist,
        )?;
        self.backend.set_stream_volume(descriptor.id, level)?;

        info!(stream = descriptor.name, volume = level, "Stream volume set");
        Ok(())
    }

    /// Persisted volume of a stream, TTS when `stream` is `None`
    ///
    /// # Returns
    /// `None` when nothing usable is persisted, which is distinct from a volume of zero
    ///
    /// # Errors
    /// * `AudioError::UnknownStream` - If `stream` is not in the catalog
    /// * `AudioError::Store` - If the store cannot be read
    pub fn get_volume(&self, stream: Option<StreamId>) -> Result<Option<i64>, AudioError> {
        let descriptor = self.descriptor(stream.unwrap_or(StreamKind::Tts.id()))?;
        let persisted = self
            .store
            .get(&descriptor.property_key(), PropertyNamespace::Persist)?;

        Ok(persisted.as_deref().and_then(parse_volume))
    }

    /// Global mute state as reported by the backend
    pub fn is_muted(&self) -> bool {
        self.backend.is_muted()
    }

    /// Set global mute state
    ///
    /// # Errors
    /// Returns error if the backend refuses the change
    pub fn set_mute(&self, muted: bool) -> Result<(), AudioError> {
        self.backend.set_mute(muted)?;
        info!(muted, "Mute state set");
        Ok(())
    }

    /// Apply a volume curve
    ///
    /// `shaper` is called with the highest curve index (100) and must return a
    /// sequence with one number per index. Points are forwarded in order and
    /// the first rejected point stops the update; earlier points stay applied.
    ///
    /// # Errors
    /// * `AudioError::Structural` - If the shaper does not return a sequence
    /// * `AudioError::Range` - If a point is missing, not a number, or out of range
    /// * `AudioError::Backend` - If the backend fails for another reason
    pub fn set_volume_shaper<F>(&self, shaper: F) -> Result<(), AudioError>
    where
        F: FnOnce(u32) -> Value,
    {
        let points = match shaper(CURVE_MAX_INDEX) {
            Value::Array(points) => points,
            other => return Err(AudioError::Structural(path_ops::type_str(&other).to_string())),
        };

        for index in 0..=CURVE_MAX_INDEX {
            let point = points.get(index as usize);
            let value = point.and_then(Value::as_f64).ok_or_else(|| AudioError::Range {
                index,
                details: match point {
                    Some(other) => format!("expected a number, got {}", path_ops::type_str(other)),
                    None => "point is missing".to_string(),
                },
            })?;

            self.backend
                .set_curve_point(index, value)
                .map_err(|e| match e {
                    BackendError::OutOfRange { .. } => AudioError::Range {
                        index,
                        details: e.to_string(),
                    },
                    other => AudioError::Backend(other),
                })?;
        }

        info!(points = CURVE_MAX_INDEX + 1, "Volume curve applied");
        Ok(())
    }

    /// Whether a stream is playing, TTS when `stream` is `None`
    ///
    /// # Errors
    /// * `AudioError::UnknownStream` - If `stream` is not in the catalog
    pub fn get_playing_status(&self, stream: Option<StreamId>) -> Result<bool, AudioError> {
        let descriptor = self.descriptor(stream.unwrap_or(StreamKind::Tts.id()))?;
        Ok(self.backend.is_stream_playing(descriptor.id))
    }
}

impl<S, B> StreamRegistry<S, B> {
    /// Catalog name for a native id, `None` when the id is unknown
    pub fn get_stream_name(&self, stream: StreamId) -> Option<&'static str> {
        stream::descriptor(stream).map(|descriptor| descriptor.name)
    }

    /// Catalog record for a native id
    ///
    /// # Errors
    /// * `AudioError::UnknownStream` - If `stream` is not in the catalog
    pub fn descriptor(&self, stream: StreamId) -> Result<&'static StreamDescriptor, AudioError> {
        stream::descriptor(stream).ok_or(AudioError::UnknownStream(stream))
    }

    /// All catalog records in native id order
    pub fn descriptors(&self) -> impl Iterator<Item = &'static StreamDescriptor> {
        CATALOG.iter()
    }

    /// Volume written for streams with nothing persisted
    pub fn default_volume(&self) -> u8 {
        self.default_volume
    }

    /// Underlying property store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Underlying audio backend
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
