// crates/cityinfo-core/src/model/city.rs
use crate::common::{WRONG_ID, WRONG_LAT_LNG, WRONG_POS};
use serde::{Deserialize, Serialize};

/// A city entry of the clock database.
///
/// Every string is owned, so cloning a `City` yields a fully independent
/// copy. A city built with [`City::new`] holds sentinel values (see
/// [`City::is_valid`]) until it is populated from a record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub(crate) name: String,
    pub(crate) code: String,
    pub(crate) country: String,
    pub(crate) zone: String,
    pub(crate) locale: String,
    pub(crate) lat: f64,
    pub(crate) lng: f64,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) id: i32,
}

/// Cities returned by a bulk query, in record order.
pub type RecordSet = Vec<City>;

impl City {
    /// An unpopulated city carrying the sentinel values.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            country: String::new(),
            zone: String::new(),
            locale: String::new(),
            lat: WRONG_LAT_LNG - 1.0,
            lng: WRONG_LAT_LNG - 1.0,
            x: WRONG_POS - 1.0,
            y: WRONG_POS - 1.0,
            id: WRONG_ID,
        }
    }

    /// Display name of the city, translated.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Country code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name of the country, translated.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Timezone name, e.g. `Europe/Helsinki`.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Horizontal position on the clock's map, in `[0, 1]`.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical position on the clock's map, in `[0, 1]`.
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// `false` for placeholders that do not describe a real city.
    pub fn is_valid(&self) -> bool {
        self.id != WRONG_ID
            && self.x >= WRONG_POS
            && self.y >= WRONG_POS
            && self.lat >= WRONG_LAT_LNG
            && self.lng >= WRONG_LAT_LNG
    }
}

impl Default for City {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_city_holds_sentinels() {
        let c = City::new();
        assert_eq!(c.id(), WRONG_ID);
        assert!(c.x() < WRONG_POS);
        assert!(c.y() < WRONG_POS);
        assert!(c.lat() < WRONG_LAT_LNG);
        assert!(c.lng() < WRONG_LAT_LNG);
        assert!(c.name().is_empty());
        assert!(!c.is_valid());
        assert_eq!(City::default(), c);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = City::new();
        original.name = "Helsinki".into();
        original.country = "Finland".into();
        original.id = 7;

        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.name.push_str(" (copy)");
        copy.country = "Suomi".into();
        assert_eq!(original.name(), "Helsinki");
        assert_eq!(original.country(), "Finland");

        original.zone = "Europe/Helsinki".into();
        assert!(copy.zone().is_empty());
        assert_eq!(copy.id(), 7);
    }
}
