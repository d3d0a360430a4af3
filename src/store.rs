//! Persistent key/value store capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is `localStorage`, which can throw on every access
//! (private browsing, disabled storage, exceeded quota). The trait reports
//! those failures; [`read_or_absent`] and [`write_best_effort`] apply the
//! page policy of treating them as "nothing stored" and "nothing written".

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;

use crate::error::HostError;

/// String key/value storage that survives page loads.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, HostError>;

    /// Write `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError>;
}

/// Read `key`, mapping any storage failure to absent.
pub fn read_or_absent<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(_) => None,
    }
}

/// Write `key`, ignoring storage failures. Returns whether the write landed.
pub fn write_best_effort<S: PreferenceStore + ?Sized>(store: &mut S, key: &str, value: &str) -> bool {
    store.set(key, value).is_ok()
}

/// In-memory store. Can be switched to fail every access to model blocked storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every read and write fails with [`HostError::StorageUnavailable`].
    #[must_use]
    pub fn unavailable() -> Self {
        Self { entries: BTreeMap::new(), unavailable: true }
    }

    /// Builder-style seed for tests and prerendering.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Raw stored value, bypassing the availability switch.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        if self.unavailable {
            return Err(HostError::StorageUnavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        if self.unavailable {
            return Err(HostError::StorageUnavailable);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
