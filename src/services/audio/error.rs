use std::path::PathBuf;

use super::{BackendError, StreamId};

/// Stream registry errors
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    /// Argument has the wrong shape, e.g. a volume that is not a number
    #[error("invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// Argument name
        arg: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Identifier outside the stream catalog
    #[error("unknown stream {0}")]
    UnknownStream(StreamId),

    /// Write attempted on a readonly stream
    #[error("stream '{stream}' is readonly")]
    PermissionDenied {
        /// Catalog name of the stream
        stream: &'static str,
    },

    /// Volume shaper returned something other than a sequence
    #[error("volume shaper must return a sequence, got {0}")]
    Structural(String),

    /// Backend refused a curve point
    #[error("volume curve point {index} rejected: {details}")]
    Range {
        /// Curve index, 0 to 100
        index: u32,
        /// Rejection details
        details: String,
    },

    /// Property store failure
    #[error("property store failed")]
    Store(#[from] StoreError),

    /// Audio backend failure
    #[error("audio backend failed")]
    Backend(#[from] BackendError),
}

/// Property store errors
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("I/O error on '{path}': {details}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Backing file is not valid TOML
    #[error("failed to parse properties at '{path}': {details}")]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Parse error details
        details: String,
    },

    /// Properties could not be serialized
    #[error("failed to serialize properties: {0}")]
    Serialize(String),

    /// Lock guarding the properties was poisoned while writing
    #[error("failed to acquire {0} lock on properties")]
    Lock(&'static str),
}
