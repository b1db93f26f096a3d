// crates/cityinfo-core/src/catalog.rs

//! Translation catalogs.
//!
//! City and country names are stored untranslated in the backing data and
//! looked up in a [`Catalog`] under a *domain*: one for city names, one for
//! country names. Keys without a translation are returned unchanged.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// String-catalog lookup service.
pub trait Catalog: Send + Sync {
    /// Translate `key` in `domain`, or return `key` itself.
    fn translate<'a>(&'a self, domain: &str, key: &'a str) -> Cow<'a, str>;

    /// Associate a text domain with a locale catalog root.
    ///
    /// Binding is idempotent: the first call for a domain wins and later
    /// calls are ignored.
    fn bind_text_domain(&self, _domain: &str, _dir: &Path) {}
}

impl<T: Catalog + ?Sized> Catalog for Arc<T> {
    fn translate<'a>(&'a self, domain: &str, key: &'a str) -> Cow<'a, str> {
        (**self).translate(domain, key)
    }

    fn bind_text_domain(&self, domain: &str, dir: &Path) {
        (**self).bind_text_domain(domain, dir)
    }
}

/// Catalog without translations.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCatalog;

impl Catalog for IdentityCatalog {
    #[inline]
    fn translate<'a>(&'a self, _domain: &str, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}

/// In-memory catalog keyed by domain, then by message.
#[derive(Debug, Default)]
pub struct MapCatalog {
    domains: HashMap<String, HashMap<String, String>>,
    bindings: Mutex<HashMap<String, PathBuf>>,
}

impl MapCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        domain: impl Into<String>,
        key: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.domains
            .entry(domain.into())
            .or_default()
            .insert(key.into(), translation.into());
    }

    pub fn with(
        mut self,
        domain: impl Into<String>,
        key: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.insert(domain, key, translation);
        self
    }

    /// Catalog root bound to `domain`, if any.
    pub fn text_domain_dir(&self, domain: &str) -> Option<PathBuf> {
        self.bindings
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(domain)
            .cloned()
    }

    /// Load a JSON object of the shape `{ "domain": { "key": "translation" } }`.
    #[cfg(feature = "json")]
    pub fn from_json_reader(reader: impl std::io::Read) -> crate::Result<Self> {
        let domains: HashMap<String, HashMap<String, String>> = serde_json::from_reader(reader)?;
        Ok(Self {
            domains,
            bindings: Mutex::default(),
        })
    }

    #[cfg(feature = "json")]
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}

impl Catalog for MapCatalog {
    fn translate<'a>(&'a self, domain: &str, key: &'a str) -> Cow<'a, str> {
        match self.domains.get(domain).and_then(|d| d.get(key)) {
            Some(t) => Cow::Borrowed(t.as_str()),
            None => Cow::Borrowed(key),
        }
    }

    fn bind_text_domain(&self, domain: &str, dir: &Path) {
        let mut bindings = self.bindings.lock().unwrap_or_else(|e| e.into_inner());
        bindings
            .entry(domain.to_owned())
            .or_insert_with(|| dir.to_path_buf());
    }
}
