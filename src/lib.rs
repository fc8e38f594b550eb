//! devaudio - per-stream volume control for a device's audio channels.
//!
//! Keeps a closed catalog of audio streams, persists their volumes in a
//! property store and forwards changes to an audio backend. The main pieces:
//!
//! - Stream registry with volume, mute, playback status and volume curves
//! - Dotted-path lookups into loosely structured configuration
//! - TOML configuration with a JSON schema
//! - CLI for stream and configuration commands
//!
//! # Quick Start
//!
//! ```rust
//! use devaudio::services::audio::{MemoryBackend, MemoryStore, StreamKind, StreamRegistry};
//!
//! let registry = StreamRegistry::new(MemoryStore::new(), MemoryBackend::new(), 60).unwrap();
//!
//! registry.set_volume(Some(StreamKind::Ring.id()), 35.0).unwrap();
//! assert_eq!(registry.get_volume(Some(StreamKind::Ring.id())).unwrap(), Some(35));
//! ```

/// Configuration schema definitions and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Loaded configuration with path lookups.
pub mod config_store;

/// Command-line interface for streams and configuration.
pub mod cli;

/// Tolerant dotted-path navigation over value trees.
pub mod path_ops;

/// Audio services.
pub mod services;

/// Simple service instance manager.
pub mod service_manager;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{DevaudioError, Result};
