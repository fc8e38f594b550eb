/// Per-stream volume, mute and curve control
pub mod audio;

pub use audio::{AudioBackend, PropertyStore, StreamId, StreamKind, StreamRegistry};
