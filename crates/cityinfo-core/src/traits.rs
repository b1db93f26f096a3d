// crates/cityinfo-core/src/traits.rs
use crate::common::{DbStats, WRONG_ID, WRONG_LAT_LNG, WRONG_POS};
use crate::error::Result;
use crate::model::{City, RecordSet};

/// Queries over a city database.
///
/// Every query performs its own pass over the backing data, so results
/// always reflect the data as it is when the query runs. The exception is
/// the record count behind [`CitySearch::stats`] and [`CitySearch::by_id`],
/// which may be cached by the implementation.
///
/// Out-of-range arguments are not errors: they yield `Ok(None)` without
/// touching the backing data. Errors are reserved for a source that cannot
/// be opened or read, and for the single record requested by `by_id`.
pub trait CitySearch {
    fn stats(&self) -> Result<DbStats>;

    /// Every record that maps to a city, in record order.
    ///
    /// Malformed records are skipped.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cityinfo_core::{CityDb, CitySearch};
    ///
    /// let db = CityDb::open("/usr/share/clock/wdb");
    /// for city in db.all().unwrap().iter().take(5) {
    ///     println!("- {}, {} ({})", city.name(), city.country(), city.zone());
    /// }
    /// ```
    fn all(&self) -> Result<RecordSet>;

    /// The record at position `id` (0-based), if any.
    ///
    /// Ids are positional: the `id`-th record of the data is returned, not
    /// a record whose id column equals `id`.
    fn by_id(&self, id: i32) -> Result<Option<City>>;

    /// Call `visit` for every city until it returns `false`.
    ///
    /// Each city is dropped right after its visit; clone it to keep it.
    /// Malformed records are skipped.
    fn for_each<F>(&self, visit: F) -> Result<()>
    where
        F: FnMut(&City) -> bool;

    /// The city closest to the map position `(x, y)`.
    ///
    /// Both coordinates must lie in `[0, 1]`. Distances follow
    /// [`wrap_distance`](crate::search::wrap_distance); among equally close
    /// cities the one appearing last in the data wins. The scan stops at the
    /// first malformed record.
    fn find_closest(&self, x: f64, y: f64) -> Result<Option<City>>;
}

/// Field access that also works when there is no city.
///
/// Implemented for `Option<&City>` so that lookups can be inspected
/// without unwrapping: string fields read as `None` and numeric fields
/// as their sentinel.
///
/// ```rust
/// use cityinfo_core::traits::CityFields;
/// use cityinfo_core::{City, WRONG_ID, WRONG_POS};
///
/// let none: Option<&City> = None;
/// assert_eq!(none.id(), WRONG_ID);
/// assert!(none.x() < WRONG_POS);
/// assert_eq!(none.name(), None);
/// ```
pub trait CityFields {
    fn name(&self) -> Option<&str>;
    fn code(&self) -> Option<&str>;
    fn country(&self) -> Option<&str>;
    fn zone(&self) -> Option<&str>;
    fn locale(&self) -> Option<&str>;
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn id(&self) -> i32;
}

impl CityFields for Option<&City> {
    fn name(&self) -> Option<&str> {
        self.map(City::name)
    }

    fn code(&self) -> Option<&str> {
        self.map(City::code)
    }

    fn country(&self) -> Option<&str> {
        self.map(City::country)
    }

    fn zone(&self) -> Option<&str> {
        self.map(City::zone)
    }

    fn locale(&self) -> Option<&str> {
        self.map(City::locale)
    }

    fn lat(&self) -> f64 {
        self.map_or(WRONG_LAT_LNG - 1.0, City::lat)
    }

    fn lng(&self) -> f64 {
        self.map_or(WRONG_LAT_LNG - 1.0, City::lng)
    }

    fn x(&self) -> f64 {
        self.map_or(WRONG_POS - 1.0, City::x)
    }

    fn y(&self) -> f64 {
        self.map_or(WRONG_POS - 1.0, City::y)
    }

    fn id(&self) -> i32 {
        self.map_or(WRONG_ID, City::id)
    }
}
