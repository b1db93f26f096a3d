// crates/cityinfo-core/src/common.rs

//! Sentinels and fixed limits shared by the whole crate.

use serde::{Deserialize, Serialize};

/// Id of a city that does not represent a real record.
///
/// A [`City`](crate::City) carrying this id is a placeholder: freshly
/// constructed, or the product of a failed read.
pub const WRONG_ID: i32 = -1;

/// Map positions smaller than this are meaningless.
pub const WRONG_POS: f64 = -1.0;

/// Latitude/longitude values smaller than this are meaningless.
pub const WRONG_LAT_LNG: f64 = -181.0;

/// Maximum length, in bytes, of every string held by a city.
pub const MAX_STR_LEN: usize = 512;

/// Capacity of one physical line of the backing data, terminator included.
pub const MAX_LINE_LEN: usize = 1024;

/// Field budget used by the tokenizer when none is given.
pub const DEFAULT_MAX_FIELDS: usize = 20;

/// Largest setting value accepted when selecting a name variant.
pub const MAX_VARIANT_INDEX: i32 = 18;

/// Simple aggregate statistics for the database.
///
/// Returned by [`CitySearch::stats`](crate::traits::CitySearch::stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub records: usize,
}
