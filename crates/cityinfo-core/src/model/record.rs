// crates/cityinfo-core/src/model/record.rs

//! Record layout and the mapping from one database line to a [`City`].
//!
//! A record is a single line of `|`-separated columns:
//!
//! ```text
//! id|name|code|country|zone|lat|lng|x|y|locale
//! 0|Helsinki|FI|Finland|Europe/Helsinki|60.17|24.94|0.5692|0.1650|fi_FI
//! ```
//!
//! The name and country columns may hold an indirection (see
//! [`crate::resolve`]).

use super::City;
use crate::error::{CityInfoError, Result};
use crate::resolve::VariantResolver;
use crate::text::{bounded, parse_f64_lenient, parse_i32_lenient, split_fields, strip};

pub const FIELD_SEPARATOR: char = '|';
pub const FIELD_COUNT: usize = 10;

pub const COL_ID: usize = 0;
pub const COL_NAME: usize = 1;
pub const COL_CODE: usize = 2;
pub const COL_COUNTRY: usize = 3;
pub const COL_ZONE: usize = 4;
pub const COL_LAT: usize = 5;
pub const COL_LNG: usize = 6;
pub const COL_X: usize = 7;
pub const COL_Y: usize = 8;
pub const COL_LOCALE: usize = 9;

/// Builds cities from raw record lines.
#[derive(Clone, Copy)]
pub struct RecordMapper<'a> {
    resolver: VariantResolver<'a>,
    cities_domain: &'a str,
    countries_domain: &'a str,
}

impl<'a> RecordMapper<'a> {
    pub fn new(
        resolver: VariantResolver<'a>,
        cities_domain: &'a str,
        countries_domain: &'a str,
    ) -> Self {
        Self {
            resolver,
            cities_domain,
            countries_domain,
        }
    }

    /// Map one record line to a fully populated [`City`].
    ///
    /// Rows with fewer than [`FIELD_COUNT`] columns fail with
    /// [`CityInfoError::MalformedRecord`]; columns past the tenth are ignored.
    /// Numeric columns that do not parse read as zero.
    pub fn map_record(&self, row: &str) -> Result<City> {
        let fields = split_fields(row, FIELD_SEPARATOR, Some(FIELD_COUNT));
        if fields.len() < FIELD_COUNT {
            return Err(CityInfoError::MalformedRecord {
                found: fields.len(),
                expected: FIELD_COUNT,
            });
        }

        let name = self.resolver.resolve(fields[COL_NAME], self.cities_domain)?;
        let country = self
            .resolver
            .resolve(fields[COL_COUNTRY], self.countries_domain)?;

        Ok(City {
            name,
            code: bounded(fields[COL_CODE]),
            country,
            zone: bounded(fields[COL_ZONE]),
            locale: bounded(strip(fields[COL_LOCALE])),
            lat: parse_f64_lenient(fields[COL_LAT]),
            lng: parse_f64_lenient(fields[COL_LNG]),
            x: parse_f64_lenient(fields[COL_X]),
            y: parse_f64_lenient(fields[COL_Y]),
            id: parse_i32_lenient(fields[COL_ID]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{IdentityCatalog, MapCatalog};
    use crate::common::MAX_STR_LEN;
    use crate::settings::{MapSettings, NoSettings};

    fn plain_mapper() -> RecordMapper<'static> {
        RecordMapper::new(
            VariantResolver::new(&NoSettings, &IdentityCatalog),
            "osso-cities",
            "osso-countries",
        )
    }

    #[test]
    fn maps_every_column() {
        let row = "12|Helsinki|FI|Finland|Europe/Helsinki|60.17|24.94|0.5692|0.1650| fi_FI \r";
        let city = plain_mapper().map_record(row).unwrap();

        assert_eq!(city.id(), 12);
        assert_eq!(city.name(), "Helsinki");
        assert_eq!(city.code(), "FI");
        assert_eq!(city.country(), "Finland");
        assert_eq!(city.zone(), "Europe/Helsinki");
        assert_eq!(city.lat(), 60.17);
        assert_eq!(city.lng(), 24.94);
        assert_eq!(city.x(), 0.5692);
        assert_eq!(city.y(), 0.1650);
        assert_eq!(city.locale(), "fi_FI");
        assert!(city.is_valid());
    }

    #[test]
    fn short_rows_are_malformed() {
        let err = plain_mapper().map_record("1|Oslo|NO|Norway").unwrap_err();
        assert!(matches!(
            err,
            CityInfoError::MalformedRecord {
                found: 4,
                expected: FIELD_COUNT
            }
        ));
        assert!(plain_mapper().map_record("").is_err());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let row = "1|Oslo|NO|Norway|Europe/Oslo|59.9|10.7|0.52|0.15|nb_NO|extra|more";
        let city = plain_mapper().map_record(row).unwrap();
        assert_eq!(city.locale(), "nb_NO");
    }

    #[test]
    fn bad_numbers_read_as_zero() {
        let row = "abc|X|XX|Y|UTC|north|east|?|.|";
        let city = plain_mapper().map_record(row).unwrap();
        assert_eq!(city.id(), 0);
        assert_eq!(city.lat(), 0.0);
        assert_eq!(city.lng(), 0.0);
        assert_eq!(city.x(), 0.0);
        assert_eq!(city.y(), 0.0);
        assert_eq!(city.locale(), "");
    }

    #[test]
    fn long_strings_are_truncated() {
        let zone = "z".repeat(MAX_STR_LEN + 100);
        let row = format!("1|A|B|C|{zone}|0|0|0|0|en_GB");
        let city = plain_mapper().map_record(&row).unwrap();
        assert_eq!(city.zone().len(), MAX_STR_LEN);
    }

    #[test]
    fn name_and_country_use_their_own_domains() {
        let settings = MapSettings::new().with("clock/korea", 1);
        let catalog = MapCatalog::new()
            .with("osso-cities", "Seoul", "Soul")
            .with("osso-countries", "Republic of Korea", "Daehan Minguk");
        let mapper = RecordMapper::new(
            VariantResolver::new(&settings, &catalog),
            "osso-cities",
            "osso-countries",
        );

        let row = "3|Seoul|KR|/clock/korea:South Korea:Republic of Korea|Asia/Seoul|37.5|127.0|0.85|0.29|ko_KR";
        let city = mapper.map_record(row).unwrap();
        assert_eq!(city.name(), "Soul");
        assert_eq!(city.country(), "Daehan Minguk");
    }
}
