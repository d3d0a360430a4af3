//! Error types for host capabilities and configuration.
//!
//! ERROR HANDLING
//! ==============
//! Capability traits return [`HostError`] so adapters can use `?`. The
//! synchronizer decides policy: storage errors collapse to "absent", missing
//! elements skip the dependent feature, other DOM failures are logged.

/// Failure reported by a host capability (storage, document, events).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The persistent store could not be opened (disabled, sandboxed, private mode).
    #[error("persistent storage is unavailable")]
    StorageUnavailable,
    /// Reading a key failed after the store was opened.
    #[error("failed to read storage key {key}: {reason}")]
    StorageRead { key: String, reason: String },
    /// Writing a key failed (quota exceeded, blocked).
    #[error("failed to write storage key {key}: {reason}")]
    StorageWrite { key: String, reason: String },
    /// No element with this id (or matching this selector) exists.
    #[error("element not found: {0}")]
    MissingElement(String),
    /// Any other document or event-registration failure.
    #[error("document operation failed: {0}")]
    Dom(String),
}

impl HostError {
    /// Whether this error came from the persistent store.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageUnavailable | Self::StorageRead { .. } | Self::StorageWrite { .. })
    }
}

/// Error returned by [`crate::config::SyncConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON text could not be parsed into a config.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid config field {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}
