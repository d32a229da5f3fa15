//! Storage port: persisted user preferences.

use vitrine_domain::error::VitrineError;

/// Client-side key/value storage that survives page reloads.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Storage`] when the storage is unavailable.
    fn load(&self, key: &str) -> Result<Option<String>, VitrineError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::Storage`] when the storage is unavailable or
    /// rejects the write.
    fn store(&self, key: &str, value: &str) -> Result<(), VitrineError>;
}
