//! Loaded configuration with tolerant path lookups.
//!
//! Keeps the typed [`Config`](crate::config::Config) alongside the raw
//! document it was read from, so values outside the typed schema can still be
//! queried by dotted path.

mod store;

#[cfg(test)]
mod tests;

pub use store::ConfigStore;
