use std::{
    collections::{HashMap, HashSet},
    sync::{PoisonError, RwLock},
};

use tracing::debug;

use super::StreamId;

/// Highest volume index addressed by the volume curve
pub const CURVE_MAX_INDEX: u32 = 100;

/// Native audio backend errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    /// Curve value outside what the driver accepts
    #[error("curve value {value} at index {index} is out of range")]
    OutOfRange {
        /// Curve index
        index: u32,
        /// Rejected value
        value: f64,
    },

    /// Driver refused the call
    #[error("backend rejected {operation}: {details}")]
    Rejected {
        /// Operation that was refused
        operation: &'static str,
        /// Rejection details
        details: String,
    },
}

/// Calls forwarded to the native audio driver
///
/// All calls are synchronous. Implementations use interior mutability so a
/// registry can be shared behind an `Arc`.
pub trait AudioBackend {
    /// Apply a volume (0 to 100) to a stream
    ///
    /// # Errors
    /// Returns error if the driver refuses the volume
    fn set_stream_volume(&self, stream: StreamId, volume: u8) -> Result<(), BackendError>;

    /// Whether the stream is currently playing or connected
    fn is_stream_playing(&self, stream: StreamId) -> bool;

    /// Global mute state
    fn is_muted(&self) -> bool;

    /// Set global mute state
    ///
    /// # Errors
    /// Returns error if the driver refuses the change
    fn set_mute(&self, muted: bool) -> Result<(), BackendError>;

    /// Set one point of the volume curve
    ///
    /// # Errors
    /// Returns `BackendError::OutOfRange` if the value cannot be applied at `index`
    fn set_curve_point(&self, index: u32, value: f64) -> Result<(), BackendError>;
}

#[derive(Debug, Default)]
struct BackendState {
    volumes: HashMap<StreamId, u8>,
    playing: HashSet<StreamId>,
    muted: bool,
    curve: HashMap<u32, f64>,
}

/// In-process stand-in for the native driver
///
/// Keeps whatever it is told and accepts curve values between 0 and 100.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: RwLock<BackendState>,
}

impl MemoryBackend {
    /// Create a backend with nothing playing, unmuted and no curve
    pub fn new() -> Self {
        Self::default()
    }

    /// Last volume applied to a stream
    pub fn stream_volume(&self, stream: StreamId) -> Option<u8> {
        self.read(|state| state.volumes.get(&stream).copied())
    }

    /// Mark a stream as playing or idle
    pub fn set_playing(&self, stream: StreamId, playing: bool) {
        self.write(|state| {
            if playing {
                state.playing.insert(stream);
            } else {
                state.playing.remove(&stream);
            }
        });
    }

    /// Curve value applied at `index`
    pub fn curve_point(&self, index: u32) -> Option<f64> {
        self.read(|state| state.curve.get(&index).copied())
    }

    /// Number of curve points applied so far
    pub fn curve_len(&self) -> usize {
        self.read(|state| state.curve.len())
    }

    fn read<T>(&self, f: impl FnOnce(&BackendState) -> T) -> T {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write<T>(&self, f: impl FnOnce(&mut BackendState) -> T) -> T {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl AudioBackend for MemoryBackend {
    fn set_stream_volume(&self, stream: StreamId, volume: u8) -> Result<(), BackendError> {
        debug!(%stream, volume, "Applying stream volume");
        self.write(|state| state.volumes.insert(stream, volume));
        Ok(())
    }

    fn is_stream_playing(&self, stream: StreamId) -> bool {
        self.read(|state| state.playing.contains(&stream))
    }

    fn is_muted(&self) -> bool {
        self.read(|state| state.muted)
    }

    fn set_mute(&self, muted: bool) -> Result<(), BackendError> {
        debug!(muted, "Applying global mute");
        self.write(|state| state.muted = muted);
        Ok(())
    }

    fn set_curve_point(&self, index: u32, value: f64) -> Result<(), BackendError> {
        if index > CURVE_MAX_INDEX || !(0.0..=100.0).contains(&value) {
            return Err(BackendError::OutOfRange { index, value });
        }

        debug!(index, value, "Applying volume curve point");
        self.write(|state| state.curve.insert(index, value));
        Ok(())
    }
}
