// crates/cityinfo-core/src/lib.rs

//! Read-only access to the world clock city database.
//!
//! The database is a flat text file with one `|`-separated record per line
//! (see [`model::record`]). [`CityDb`] enumerates it, looks cities up by
//! position and finds the city closest to a point of the clock's map. City
//! and country names go through an injected translation [`Catalog`], and
//! name variants are picked with an injected [`SettingsProvider`].
//!
//! ```no_run
//! use cityinfo_core::{CityDb, CitySearch};
//!
//! let db = CityDb::open("/usr/share/clock/wdb");
//! if let Some(city) = db.find_closest(0.5, 0.2)? {
//!     println!("{} ({})", city.name(), city.zone());
//! }
//! # Ok::<(), cityinfo_core::CityInfoError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod resolve;
pub mod search;
pub mod settings;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::catalog::{Catalog, IdentityCatalog, MapCatalog};
pub use crate::common::{DbStats, MAX_STR_LEN, WRONG_ID, WRONG_LAT_LNG, WRONG_POS};
pub use crate::config::DbConfig;
pub use crate::error::{CityInfoError, Result};
pub use crate::model::{City, RecordSet};
pub use crate::search::{wrap_distance, CityDb, CityDbBuilder};
pub use crate::settings::{MapSettings, NoSettings, SettingsProvider};
// Query traits
pub use crate::traits::{CityFields, CitySearch};
