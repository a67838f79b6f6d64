//! Static API key registry.
//!
//! Keys listed in the `[api_keys]` table of the configuration file, each
//! mapped to an enabled flag. Loaded once at startup and never written.

use std::collections::HashMap;

/// Read-only set of statically configured API keys.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyRegistry {
    keys: HashMap<String, bool>,
}

impl ApiKeyRegistry {
    /// Create a registry from a key to enabled-flag map.
    pub fn new(keys: HashMap<String, bool>) -> Self {
        Self { keys }
    }

    /// Whether the key is listed at all, enabled or not.
    pub fn exists(&self, api_key: &str) -> bool {
        self.keys.contains_key(api_key)
    }

    /// Whether the key is listed and enabled.
    pub fn is_enabled(&self, api_key: &str) -> bool {
        self.keys.get(api_key).copied().unwrap_or(false)
    }

    /// Number of listed keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no keys are listed.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
