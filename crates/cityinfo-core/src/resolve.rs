// crates/cityinfo-core/src/resolve.rs

//! Display-name resolution for the name and country columns.
//!
//! A column either holds a plain message (`Helsinki`) or an *indirection*:
//! a leading `/`, a settings key and a `:`-separated list of alternatives,
//! e.g. `/clock/korea_name:Seoul:Soul`. The integer stored under the key
//! picks the alternative. Either way the result is passed through the
//! translation catalog and bounded to [`MAX_STR_LEN`](crate::common::MAX_STR_LEN).

use crate::catalog::Catalog;
use crate::common::MAX_VARIANT_INDEX;
use crate::error::{CityInfoError, Result};
use crate::settings::SettingsProvider;
use crate::text::{bounded, split_fields};

/// Marks an indirected column value.
pub const INDIRECTION_PREFIX: char = '/';
/// Separates the settings key and the alternatives of an indirection.
pub const VARIANT_SEPARATOR: char = ':';

/// Resolves column values to display strings.
#[derive(Clone, Copy)]
pub struct VariantResolver<'a> {
    settings: &'a dyn SettingsProvider,
    catalog: &'a dyn Catalog,
}

impl<'a> VariantResolver<'a> {
    pub fn new(settings: &'a dyn SettingsProvider, catalog: &'a dyn Catalog) -> Self {
        Self { settings, catalog }
    }

    /// Resolve `value` and translate it in `domain`.
    pub fn resolve(&self, value: &str, domain: &str) -> Result<String> {
        let key = match value.strip_prefix(INDIRECTION_PREFIX) {
            Some(indirection) => self.select_variant(indirection)?,
            None => value,
        };
        Ok(bounded(&self.catalog.translate(domain, key)))
    }

    /// Pick the alternative of an indirection (without its leading `/`),
    /// before translation.
    pub fn select_variant<'v>(&self, indirection: &'v str) -> Result<&'v str> {
        let parts = split_fields(indirection, VARIANT_SEPARATOR, None);
        let key = parts.first().copied().unwrap_or_default();

        let mut index = self.settings.get_int(key);
        if !(0..=MAX_VARIANT_INDEX).contains(&index) {
            log::debug!("setting '{key}' = {index} is out of range, using the first variant");
            index = 0;
        }
        // slot 0 holds the key itself
        let slot = index as usize + 1;

        if let Some(variant) = parts.get(slot).copied() {
            return Ok(variant);
        }
        match parts.get(1).copied() {
            Some(first) => {
                log::warn!("indirection '{key}' has no variant {slot}, falling back to '{first}'");
                Ok(first)
            }
            None => Err(CityInfoError::MissingVariant {
                key: key.to_owned(),
                index: slot,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{IdentityCatalog, MapCatalog};
    use crate::common::MAX_STR_LEN;
    use crate::settings::{MapSettings, NoSettings};

    #[test]
    fn setting_selects_variant() {
        let settings = MapSettings::new().with("baseKey", 1);
        let r = VariantResolver::new(&settings, &IdentityCatalog);
        assert_eq!(r.resolve("/baseKey:Default:Alt1:Alt2", "d").unwrap(), "Alt1");
    }

    #[test]
    fn unset_setting_selects_default() {
        let r = VariantResolver::new(&NoSettings, &IdentityCatalog);
        assert_eq!(r.resolve("/baseKey:Default:Alt1", "d").unwrap(), "Default");
    }

    #[test]
    fn out_of_range_setting_clamps_to_default() {
        for value in [25, 19, -1, -7] {
            let settings = MapSettings::new().with("baseKey", value);
            let r = VariantResolver::new(&settings, &IdentityCatalog);
            assert_eq!(
                r.resolve("/baseKey:Default:Alt1:Alt2", "d").unwrap(),
                "Default",
                "value {value}"
            );
        }
    }

    #[test]
    fn largest_accepted_setting_reaches_last_slot() {
        let variants: Vec<String> = (0..19).map(|i| format!("v{i}")).collect();
        let field = format!("/k:{}", variants.join(":"));
        let settings = MapSettings::new().with("k", 18);
        let r = VariantResolver::new(&settings, &IdentityCatalog);
        assert_eq!(r.resolve(&field, "d").unwrap(), "v18");
    }

    #[test]
    fn missing_variant_falls_back_then_fails() {
        let settings = MapSettings::new().with("k", 4);
        let r = VariantResolver::new(&settings, &IdentityCatalog);
        assert_eq!(r.resolve("/k:Only", "d").unwrap(), "Only");
        assert!(matches!(
            r.resolve("/k", "d"),
            Err(CityInfoError::MissingVariant { index: 5, .. })
        ));
    }

    #[test]
    fn plain_values_are_translated_in_domain() {
        let catalog = MapCatalog::new()
            .with("osso-cities", "Seoul", "Sŏul")
            .with("osso-countries", "Korea", "Hanguk");
        let settings = MapSettings::new().with("korea", 1);
        let r = VariantResolver::new(&settings, &catalog);

        assert_eq!(r.resolve("Seoul", "osso-cities").unwrap(), "Sŏul");
        assert_eq!(r.resolve("Seoul", "osso-countries").unwrap(), "Seoul");
        // the selected variant is what gets translated
        assert_eq!(
            r.resolve("/korea:South Korea:Korea", "osso-countries").unwrap(),
            "Hanguk"
        );
    }

    #[test]
    fn result_is_bounded() {
        let long = "x".repeat(MAX_STR_LEN * 2);
        let r = VariantResolver::new(&NoSettings, &IdentityCatalog);
        assert_eq!(r.resolve(&long, "d").unwrap().len(), MAX_STR_LEN);
    }
}
