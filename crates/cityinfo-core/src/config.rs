// crates/cityinfo-core/src/config.rs
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Location of the clock database installed by the system.
pub const DEFAULT_DB_PATH: &str = "/usr/share/clock/wdb";
pub const DEFAULT_CITIES_DOMAIN: &str = "osso-cities";
pub const DEFAULT_COUNTRIES_DOMAIN: &str = "osso-countries";
pub const DEFAULT_TEXT_DOMAIN: &str = "osso-clock";
pub const DEFAULT_LOCALE_DIR: &str = "/usr/share/locale";

/// Where the backing data lives and how its names are translated.
///
/// Every field has a default, so a JSON config only needs to name what it
/// overrides:
///
/// ```rust
/// use cityinfo_core::DbConfig;
///
/// let cfg = DbConfig::from_json_reader(r#"{"path": "/tmp/wdb"}"#.as_bytes()).unwrap();
/// assert_eq!(cfg.path.to_str(), Some("/tmp/wdb"));
/// assert_eq!(cfg.cities_domain, "osso-cities");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// Backing data file. A `.gz` path is decompressed on open when the
    /// `compact` feature is enabled.
    pub path: PathBuf,
    /// Catalog domain for city names.
    pub cities_domain: String,
    /// Catalog domain for country names.
    pub countries_domain: String,
    /// Text domain bound to `locale_dir` before the first lookup.
    pub text_domain: String,
    pub locale_dir: PathBuf,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_PATH),
            cities_domain: DEFAULT_CITIES_DOMAIN.to_owned(),
            countries_domain: DEFAULT_COUNTRIES_DOMAIN.to_owned(),
            text_domain: DEFAULT_TEXT_DOMAIN.to_owned(),
            locale_dir: PathBuf::from(DEFAULT_LOCALE_DIR),
        }
    }
}

impl DbConfig {
    /// Default configuration reading from `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Directory holding the sample database shipped with this crate.
    pub fn sample_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Default configuration reading the shipped sample database.
    pub fn sample() -> Self {
        Self::new(Self::sample_data_dir().join("wdb"))
    }

    #[cfg(feature = "json")]
    pub fn from_json_reader(reader: impl std::io::Read) -> crate::Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    #[cfg(feature = "json")]
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_only_overrides_path() {
        let cfg = DbConfig::new("/data/wdb");
        assert_eq!(cfg.path, PathBuf::from("/data/wdb"));
        assert_eq!(cfg.countries_domain, DEFAULT_COUNTRIES_DOMAIN);
        assert_eq!(cfg.locale_dir, PathBuf::from(DEFAULT_LOCALE_DIR));
    }

    #[test]
    fn sample_points_at_shipped_data() {
        assert!(DbConfig::sample().path.ends_with("data/wdb"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_fills_missing_fields() {
        let cfg = DbConfig::from_json_reader(r#"{"countries_domain": "my-countries"}"#.as_bytes())
            .unwrap();
        assert_eq!(cfg.path, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(cfg.countries_domain, "my-countries");
        assert_eq!(cfg.text_domain, DEFAULT_TEXT_DOMAIN);
    }
}
