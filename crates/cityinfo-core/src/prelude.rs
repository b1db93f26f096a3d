//! cityinfo prelude: bring common types and traits into scope for demos.

pub use crate::catalog::{Catalog, IdentityCatalog, MapCatalog};
pub use crate::common::{DbStats, WRONG_ID, WRONG_LAT_LNG, WRONG_POS};
pub use crate::config::DbConfig;
pub use crate::error::{CityInfoError, Result};
pub use crate::model::{City, RecordSet};
pub use crate::search::{CityDb, CityDbBuilder};
pub use crate::settings::{MapSettings, NoSettings, SettingsProvider};
pub use crate::traits::{CityFields, CitySearch};
