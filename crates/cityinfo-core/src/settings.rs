// crates/cityinfo-core/src/settings.rs

//! Integer settings used to pick between name variants.
//!
//! The database itself never writes settings; it only asks a
//! [`SettingsProvider`] for the integer stored under a key.

use std::collections::HashMap;
use std::sync::Arc;

/// Source of integer settings keyed by string.
///
/// Implementations must return `0` for keys they do not know.
pub trait SettingsProvider: Send + Sync {
    fn get_int(&self, key: &str) -> i32;
}

impl<T: SettingsProvider + ?Sized> SettingsProvider for Arc<T> {
    fn get_int(&self, key: &str) -> i32 {
        (**self).get_int(key)
    }
}

/// Provider used when no settings store is available: every key reads as `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSettings;

impl SettingsProvider for NoSettings {
    #[inline]
    fn get_int(&self, _key: &str) -> i32 {
        0
    }
}

/// In-memory settings store.
#[derive(Debug, Clone, Default)]
pub struct MapSettings {
    values: HashMap<String, i32>,
}

impl MapSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: i32) -> Option<i32> {
        self.values.insert(key.into(), value)
    }

    pub fn with(mut self, key: impl Into<String>, value: i32) -> Self {
        self.set(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Load a flat JSON object of `"key": integer` pairs.
    ///
    /// ```rust
    /// use cityinfo_core::settings::{MapSettings, SettingsProvider};
    ///
    /// let s = MapSettings::from_json_reader(r#"{"clock/korea": 1}"#.as_bytes()).unwrap();
    /// assert_eq!(s.get_int("clock/korea"), 1);
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json_reader(reader: impl std::io::Read) -> crate::Result<Self> {
        let values: HashMap<String, i32> = serde_json::from_reader(reader)?;
        Ok(Self { values })
    }

    #[cfg(feature = "json")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}

impl SettingsProvider for MapSettings {
    fn get_int(&self, key: &str) -> i32 {
        self.values.get(key).copied().unwrap_or(0)
    }
}

impl SettingsProvider for HashMap<String, i32> {
    fn get_int(&self, key: &str) -> i32 {
        self.get(key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_keys_read_as_zero() {
        assert_eq!(NoSettings.get_int("anything"), 0);

        let s = MapSettings::new().with("a", 3);
        assert_eq!(s.get_int("a"), 3);
        assert_eq!(s.get_int("b"), 0);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut s = MapSettings::new();
        assert_eq!(s.set("k", 1), None);
        assert_eq!(s.set("k", 2), Some(1));
        assert_eq!(s.get_int("k"), 2);
    }

    #[cfg(feature = "json")]
    #[test]
    fn rejects_non_integer_json() {
        assert!(MapSettings::from_json_reader(r#"{"k": "x"}"#.as_bytes()).is_err());
    }
}
