use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::{Theme, ThemeError};

/// Durable per-origin key/value storage for the theme preference
pub trait ThemeStore {
    /// Persisted theme under `key`, or `None` when absent, unreadable or unrecognised
    fn get(&self, key: &str) -> Option<Theme>;

    /// Overwrite the value under `key`
    fn set(&mut self, key: &str, theme: Theme) -> Result<(), ThemeError>;
}

/// `window.localStorage`, storing the bare `"light"` / `"dark"` literal
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalThemeStore;

impl LocalThemeStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ThemeStore for LocalThemeStore {
    fn get(&self, key: &str) -> Option<Theme> {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, ignoring persisted theme");
            return None;
        };
        let raw = storage.get_item(key).ok().flatten()?;
        parse_persisted(key, &raw)
    }

    fn set(&mut self, key: &str, theme: Theme) -> Result<(), ThemeError> {
        let storage = Self::storage()
            .ok_or_else(|| ThemeError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, theme.as_str())
            .map_err(|e| ThemeError::Storage(format!("{e:?}")))
    }
}

/// In-memory store. Clones share the same map, like tabs sharing one origin.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, valid or not
    pub fn with_raw(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Raw value currently stored under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn get(&self, key: &str) -> Option<Theme> {
        let raw = self.raw(key)?;
        parse_persisted(key, &raw)
    }

    fn set(&mut self, key: &str, theme: Theme) -> Result<(), ThemeError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), theme.as_str().to_string());
        Ok(())
    }
}

fn parse_persisted(key: &str, raw: &str) -> Option<Theme> {
    match raw.parse::<Theme>() {
        Ok(theme) => Some(theme),
        Err(e) => {
            log::warn!("Ignoring persisted value under '{key}': {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryThemeStore::new();
        assert_eq!(store.get("theme"), None);

        store.set("theme", Theme::Dark).unwrap();
        assert_eq!(store.get("theme"), Some(Theme::Dark));
        assert_eq!(store.raw("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryThemeStore::new();
        let mut other = store.clone();
        other.set("theme", Theme::Light).unwrap();
        assert_eq!(store.get("theme"), Some(Theme::Light));
    }

    #[test]
    fn test_unrecognised_value_reads_as_absent() {
        let store = MemoryThemeStore::new().with_raw("theme", "\"dark\"");
        assert_eq!(store.get("theme"), None);
        assert_eq!(store.raw("theme").as_deref(), Some("\"dark\""));
    }
}
