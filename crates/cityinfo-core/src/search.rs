// crates/cityinfo-core/src/search.rs

//! # Query Engine
//!
//! [`CityDb`] answers every query with one sequential pass over the backing
//! data: the source is opened, scanned and closed before the query returns.
//! Only the record count outlives a query; it is computed on first use and
//! cached for the lifetime of the `CityDb`, which assumes the backing data
//! does not change underneath it.

use crate::catalog::{Catalog, IdentityCatalog};
use crate::common::DbStats;
use crate::config::DbConfig;
use crate::error::Result;
use crate::loader::{LineSource, SeekBufRead};
use crate::model::{City, RecordMapper, RecordSet};
use crate::resolve::VariantResolver;
use crate::settings::{NoSettings, SettingsProvider};
use crate::traits::CitySearch;
use once_cell::sync::OnceCell;
use std::path::Path;

/// Best distance a candidate has to beat in [`CitySearch::find_closest`].
/// Larger than any squared distance between two points of the unit square.
pub const NO_MATCH_DISTANCE: f64 = 2.0;

/// Squared distance between the query `(x, y)` and a city at `(cx, cy)` on
/// the map plane, wrapping at the edges.
///
/// This is the metric the clock has always used and it is kept bit for bit:
/// a negative difference is replaced by `-(x + cx)` rather than wrapped, so
/// the result is not the symmetric torus distance and may exceed
/// [`NO_MATCH_DISTANCE`].
pub fn wrap_distance(x: f64, y: f64, cx: f64, cy: f64) -> f64 {
    let mut dx = x - cx;
    if dx < 0.0 {
        dx = -(x + cx);
    }

    let mut dy = y - cy;
    if dy < 0.0 {
        dy = -(y + cy);
    }

    if dx > 0.5 {
        dx = 1.0 - dx;
    }
    if dy > 0.5 {
        dy = 1.0 - dy;
    }

    dx * dx + dy * dy
}

/// Read-only handle on a city database.
pub struct CityDb {
    config: DbConfig,
    settings: Box<dyn SettingsProvider>,
    catalog: Box<dyn Catalog>,
    record_count: OnceCell<usize>,
    text_domain_bound: OnceCell<()>,
}

impl CityDb {
    /// Database described by `config`, without settings or translations.
    pub fn new(config: DbConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Database at `path` with the default configuration otherwise.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::new(DbConfig::new(path))
    }

    pub fn builder() -> CityDbBuilder {
        CityDbBuilder::default()
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Number of records, computed once per `CityDb`.
    pub fn record_count(&self) -> Result<usize> {
        if let Some(count) = self.record_count.get() {
            return Ok(*count);
        }
        let mut source = self.open_source()?;
        self.count_records(&mut source)
    }

    /// Map a single record line using this database's settings and catalog.
    pub fn map_record(&self, row: &str) -> Result<City> {
        self.mapper().map_record(row)
    }

    fn open_source(&self) -> Result<LineSource<Box<dyn SeekBufRead>>> {
        LineSource::open(&self.config.path)
    }

    fn count_records(&self, source: &mut LineSource<Box<dyn SeekBufRead>>) -> Result<usize> {
        self.record_count
            .get_or_try_init(|| -> Result<usize> {
                let count = source.count_records()?;
                log::debug!("{} holds {count} records", self.config.path.display());
                Ok(count)
            })
            .copied()
    }

    fn mapper(&self) -> RecordMapper<'_> {
        self.text_domain_bound.get_or_init(|| {
            self.catalog
                .bind_text_domain(&self.config.text_domain, &self.config.locale_dir)
        });
        RecordMapper::new(
            VariantResolver::new(self.settings.as_ref(), self.catalog.as_ref()),
            &self.config.cities_domain,
            &self.config.countries_domain,
        )
    }
}

impl CitySearch for CityDb {
    fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            records: self.record_count()?,
        })
    }

    fn all(&self) -> Result<RecordSet> {
        let mut source = self.open_source()?;
        let count = self.count_records(&mut source)?;
        let mapper = self.mapper();

        let mut cities = RecordSet::with_capacity(count);
        for _ in 0..count {
            let row = match source.next_record() {
                Ok(Some(row)) => row,
                Ok(None) => break,
                Err(e) if e.is_record_local() => {
                    log::warn!("skipping record: {e}");
                    continue;
                }
                Err(e) => return Err(e),
            };
            match mapper.map_record(row) {
                Ok(city) => cities.push(city),
                Err(e) if e.is_record_local() => {
                    log::warn!("skipping line {}: {e}", source.line_no());
                }
                Err(e) => return Err(e),
            }
        }

        log::debug!("loaded {} of {count} records", cities.len());
        Ok(cities)
    }

    fn by_id(&self, id: i32) -> Result<Option<City>> {
        let Ok(position) = usize::try_from(id) else {
            return Ok(None);
        };

        let mut source = self.open_source()?;
        if position >= self.count_records(&mut source)? {
            return Ok(None);
        }

        if source.skip_records(position)? < position {
            return Ok(None);
        }
        match source.next_record()? {
            Some(row) => self.mapper().map_record(row).map(Some),
            None => Ok(None),
        }
    }

    fn for_each<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&City) -> bool,
    {
        let mut source = self.open_source()?;
        let mapper = self.mapper();

        loop {
            let row = match source.next_record() {
                Ok(Some(row)) => row,
                Ok(None) => break,
                Err(e) if e.is_record_local() => {
                    log::warn!("skipping record: {e}");
                    continue;
                }
                Err(e) => return Err(e),
            };
            let city = match mapper.map_record(row) {
                Ok(city) => city,
                Err(e) if e.is_record_local() => {
                    log::warn!("skipping line {}: {e}", source.line_no());
                    continue;
                }
                Err(e) => return Err(e),
            };
            if !visit(&city) {
                break;
            }
        }

        Ok(())
    }

    fn find_closest(&self, x: f64, y: f64) -> Result<Option<City>> {
        if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
            return Ok(None);
        }

        let mut source = self.open_source()?;
        let mapper = self.mapper();
        let mut best_distance = NO_MATCH_DISTANCE;
        let mut best: Option<City> = None;

        loop {
            // an unreadable or unmappable record ends the scan
            let row = match source.next_record() {
                Ok(Some(row)) => row,
                Ok(None) => break,
                Err(e) if e.is_record_local() => {
                    log::warn!("stopping scan: {e}");
                    break;
                }
                Err(e) => return Err(e),
            };
            let candidate = match mapper.map_record(row) {
                Ok(city) => city,
                Err(e) if e.is_record_local() => {
                    log::warn!("stopping scan at line {}: {e}", source.line_no());
                    break;
                }
                Err(e) => return Err(e),
            };

            let distance = wrap_distance(x, y, candidate.x(), candidate.y());
            // ties go to the later record
            if distance <= best_distance {
                best_distance = distance;
                best = Some(candidate);
            }
        }

        Ok(best)
    }
}

/// Assembles a [`CityDb`] from a configuration and its collaborators.
#[derive(Default)]
pub struct CityDbBuilder {
    config: DbConfig,
    settings: Option<Box<dyn SettingsProvider>>,
    catalog: Option<Box<dyn Catalog>>,
}

impl CityDbBuilder {
    pub fn config(mut self, config: DbConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the backing data path.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.path = path.as_ref().to_path_buf();
        self
    }

    pub fn settings(mut self, settings: impl SettingsProvider + 'static) -> Self {
        self.settings = Some(Box::new(settings));
        self
    }

    pub fn catalog(mut self, catalog: impl Catalog + 'static) -> Self {
        self.catalog = Some(Box::new(catalog));
        self
    }

    pub fn build(self) -> CityDb {
        CityDb {
            config: self.config,
            settings: self.settings.unwrap_or_else(|| Box::new(NoSettings)),
            catalog: self.catalog.unwrap_or_else(|| Box::new(IdentityCatalog)),
            record_count: OnceCell::new(),
            text_domain_bound: OnceCell::new(),
        }
    }
}
