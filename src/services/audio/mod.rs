/// Native audio backend contract and in-memory implementation
pub mod backend;
/// Error types
pub mod error;
/// Property store contract and implementations
pub mod properties;
/// Stream registry
pub mod registry;
/// Built-in volume curves
pub mod shaper;
/// Stream catalog types
pub mod stream;

#[cfg(test)]
mod tests;

pub use backend::{AudioBackend, BackendError, MemoryBackend};
pub use error::{AudioError, StoreError};
pub use properties::{FileStore, MemoryStore, PropertyNamespace, PropertyStore};
pub use registry::{DEFAULT_VOLUME, StreamRegistry, default_volume_from};
pub use shaper::ShaperKind;
pub use stream::{BROADCAST_STREAMS, StreamDescriptor, StreamId, StreamKind};
