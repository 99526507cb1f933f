use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::{Continent, ContinentId, Country, CountryId, Metric, Region, RegionId};
use crate::error::{AtlasError, AtlasResult};
use crate::query::CountryQuery;
use crate::snapshot::Snapshot;

/// Metadata about the catalog itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogMeta {
    /// Display name of the dataset.
    pub name: String,
    /// Free-text description of the dataset.
    pub description: String,
}

impl CatalogMeta {
    /// Metadata with a name and an empty description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }
}

/// The in-memory catalog. Owns every table and the indexes the report
/// pipeline needs to walk continent → region → country.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Dataset metadata.
    pub meta: CatalogMeta,
    continents: BTreeMap<ContinentId, Continent>,
    regions: BTreeMap<RegionId, Region>,
    countries: BTreeMap<CountryId, Country>,
    metrics: HashMap<Metric, BTreeMap<CountryId, f64>>,

    // Indexes
    regions_by_continent: BTreeMap<ContinentId, Vec<RegionId>>,
    countries_by_region: BTreeMap<RegionId, Vec<CountryId>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new(meta: CatalogMeta) -> Self {
        Self {
            meta,
            ..Self::default()
        }
    }

    /// Load and validate a JSON snapshot file.
    pub fn load(path: &Path) -> AtlasResult<Self> {
        Snapshot::load(path)?.into_catalog()
    }

    /// Parse and validate a JSON snapshot held in memory.
    pub fn from_json_str(json: &str) -> AtlasResult<Self> {
        Snapshot::from_json_str(json)?.into_catalog()
    }

    // -----------------------------------------------------------------------
    // Inserts
    // -----------------------------------------------------------------------

    /// Add a continent. Fails if the id is already taken.
    pub fn add_continent(&mut self, continent: Continent) -> AtlasResult<ContinentId> {
        let id = continent.id;
        if self.continents.contains_key(&id) {
            return Err(AtlasError::DuplicateId {
                table: "continent",
                id: id.0,
            });
        }
        self.regions_by_continent.entry(id).or_default();
        self.continents.insert(id, continent);
        Ok(id)
    }

    /// Add a region. Its continent must already exist.
    pub fn add_region(&mut self, region: Region) -> AtlasResult<RegionId> {
        let id = region.id;
        if self.regions.contains_key(&id) {
            return Err(AtlasError::DuplicateId {
                table: "region",
                id: id.0,
            });
        }
        let Some(siblings) = self.regions_by_continent.get_mut(&region.continent_id) else {
            return Err(AtlasError::DanglingReference {
                table: "region",
                id: id.0,
                target_table: "continent",
                target: region.continent_id.0,
            });
        };
        siblings.push(id);
        self.countries_by_region.entry(id).or_default();
        self.regions.insert(id, region);
        Ok(id)
    }

    /// Add a country. Its region must already exist.
    pub fn add_country(&mut self, country: Country) -> AtlasResult<CountryId> {
        let id = country.id;
        if self.countries.contains_key(&id) {
            return Err(AtlasError::DuplicateId {
                table: "country",
                id: id.0,
            });
        }
        let Some(siblings) = self.countries_by_region.get_mut(&country.region_id) else {
            return Err(AtlasError::DanglingReference {
                table: "country",
                id: id.0,
                target_table: "region",
                target: country.region_id.0,
            });
        };
        siblings.push(id);
        self.countries.insert(id, country);
        Ok(id)
    }

    /// Record a country's value in one metric table.
    ///
    /// Each table holds at most one row per country, and values must be finite.
    pub fn set_metric(&mut self, metric: Metric, country: CountryId, value: f64) -> AtlasResult<()> {
        if !self.countries.contains_key(&country) {
            return Err(AtlasError::DanglingReference {
                table: metric.table_name(),
                id: country.0,
                target_table: "country",
                target: country.0,
            });
        }
        if !value.is_finite() {
            return Err(AtlasError::InvalidMetricValue {
                metric,
                country,
                value,
            });
        }
        let table = self.metrics.entry(metric).or_default();
        if table.contains_key(&country) {
            return Err(AtlasError::DuplicateMetric { metric, country });
        }
        table.insert(country, value);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    /// Get a continent by id.
    pub fn continent(&self, id: ContinentId) -> Option<&Continent> {
        self.continents.get(&id)
    }

    /// Get a region by id.
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    /// Get a country by id.
    pub fn country(&self, id: CountryId) -> Option<&Country> {
        self.countries.get(&id)
    }

    /// Find a continent by numeric id or by name (case-insensitive).
    /// When names collide the lowest id wins.
    pub fn find_continent(&self, key: &str) -> Option<&Continent> {
        if let Ok(raw) = key.parse::<u32>()
            && let Some(continent) = self.continents.get(&ContinentId(raw))
        {
            return Some(continent);
        }
        let key_lower = key.to_lowercase();
        self.continents
            .values()
            .find(|c| c.name.to_lowercase() == key_lower)
    }

    /// A country's value in one metric table, if it has a row there.
    pub fn metric_value(&self, metric: Metric, country: CountryId) -> Option<f64> {
        self.metrics
            .get(&metric)
            .and_then(|table| table.get(&country))
            .copied()
    }

    /// The continent a country belongs to, via its region.
    pub fn continent_of(&self, country: CountryId) -> Option<ContinentId> {
        let country = self.countries.get(&country)?;
        self.regions
            .get(&country.region_id)
            .map(|region| region.continent_id)
    }

    /// Region ids of a continent, in insertion order.
    pub fn regions_in(&self, continent: ContinentId) -> Option<&[RegionId]> {
        self.regions_by_continent.get(&continent).map(Vec::as_slice)
    }

    /// Country ids of a region, in insertion order.
    pub fn countries_in(&self, region: RegionId) -> Option<&[CountryId]> {
        self.countries_by_region.get(&region).map(Vec::as_slice)
    }

    /// All continents in ascending id order.
    pub fn continents(&self) -> impl Iterator<Item = &Continent> {
        self.continents.values()
    }

    /// All regions in ascending id order.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    /// All countries in ascending id order.
    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }

    /// Start building a country query.
    pub fn query(&self) -> CountryQuery<'_> {
        CountryQuery::new(self)
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Number of continents.
    pub fn continent_count(&self) -> usize {
        self.continents.len()
    }

    /// Number of regions.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Number of countries.
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Number of rows in one metric table.
    pub fn metric_count(&self, metric: Metric) -> usize {
        self.metrics.get(&metric).map_or(0, BTreeMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> Catalog {
        let mut catalog = Catalog::new(CatalogMeta::new("Test"));
        catalog.add_continent(Continent::new(1, "Europa")).unwrap();
        catalog.add_continent(Continent::new(2, "Noland")).unwrap();
        catalog.add_region(Region::new(10, "Western Europa", 1)).unwrap();
        catalog.add_region(Region::new(11, "Eastern Europa", 1)).unwrap();
        catalog.add_country(Country::new(100, "Xland", 10)).unwrap();
        catalog.add_country(Country::new(101, "Yland", 11)).unwrap();
        catalog
    }

    #[test]
    fn add_and_get_rows() {
        let catalog = test_catalog();
        assert_eq!(catalog.continent(ContinentId(1)).unwrap().name, "Europa");
        assert_eq!(catalog.region(RegionId(11)).unwrap().continent_id, ContinentId(1));
        assert_eq!(catalog.country(CountryId(100)).unwrap().name, "Xland");
        assert!(catalog.country(CountryId(999)).is_none());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut catalog = test_catalog();
        let err = catalog.add_continent(Continent::new(1, "Again")).unwrap_err();
        assert!(matches!(err, AtlasError::DuplicateId { table: "continent", id: 1 }));

        let err = catalog.add_country(Country::new(100, "Again", 10)).unwrap_err();
        assert!(matches!(err, AtlasError::DuplicateId { table: "country", .. }));
    }

    #[test]
    fn dangling_parents_rejected() {
        let mut catalog = test_catalog();
        let err = catalog.add_region(Region::new(12, "Lost", 9)).unwrap_err();
        assert!(matches!(
            err,
            AtlasError::DanglingReference { target_table: "continent", target: 9, .. }
        ));

        let err = catalog.add_country(Country::new(102, "Lost", 99)).unwrap_err();
        assert!(matches!(
            err,
            AtlasError::DanglingReference { target_table: "region", target: 99, .. }
        ));
    }

    #[test]
    fn metrics_are_sparse() {
        let mut catalog = test_catalog();
        catalog.set_metric(Metric::NetExports, CountryId(100), 100.0).unwrap();

        assert_eq!(catalog.metric_value(Metric::NetExports, CountryId(100)), Some(100.0));
        assert_eq!(catalog.metric_value(Metric::QualityOfLife, CountryId(100)), None);
        assert_eq!(catalog.metric_value(Metric::NetExports, CountryId(101)), None);
        assert_eq!(catalog.metric_count(Metric::NetExports), 1);
        assert_eq!(catalog.metric_count(Metric::GovernmentSpending), 0);
    }

    #[test]
    fn metric_rows_validated() {
        let mut catalog = test_catalog();
        catalog.set_metric(Metric::QualityOfLife, CountryId(100), 90.0).unwrap();

        let err = catalog
            .set_metric(Metric::QualityOfLife, CountryId(100), 91.0)
            .unwrap_err();
        assert!(matches!(err, AtlasError::DuplicateMetric { .. }));

        let err = catalog
            .set_metric(Metric::QualityOfLife, CountryId(101), f64::NAN)
            .unwrap_err();
        assert!(matches!(err, AtlasError::InvalidMetricValue { .. }));

        let err = catalog
            .set_metric(Metric::NetExports, CountryId(555), 1.0)
            .unwrap_err();
        assert!(matches!(err, AtlasError::DanglingReference { .. }));
    }

    #[test]
    fn hierarchy_indexes() {
        let catalog = test_catalog();
        assert_eq!(
            catalog.regions_in(ContinentId(1)).unwrap(),
            &[RegionId(10), RegionId(11)]
        );
        assert!(catalog.regions_in(ContinentId(2)).unwrap().is_empty());
        assert!(catalog.regions_in(ContinentId(3)).is_none());
        assert_eq!(catalog.countries_in(RegionId(11)).unwrap(), &[CountryId(101)]);
        assert_eq!(catalog.continent_of(CountryId(101)), Some(ContinentId(1)));
    }

    #[test]
    fn find_continent_by_id_or_name() {
        let catalog = test_catalog();
        assert_eq!(catalog.find_continent("2").unwrap().name, "Noland");
        assert_eq!(catalog.find_continent("EUROPA").unwrap().id, ContinentId(1));
        assert!(catalog.find_continent("Atlantis").is_none());
    }

    #[test]
    fn continents_iterate_in_id_order() {
        let mut catalog = Catalog::new(CatalogMeta::new("Order"));
        catalog.add_continent(Continent::new(5, "E")).unwrap();
        catalog.add_continent(Continent::new(2, "B")).unwrap();
        catalog.add_continent(Continent::new(9, "I")).unwrap();
        let ids: Vec<u32> = catalog.continents().map(|c| c.id.0).collect();
        assert_eq!(ids, [2, 5, 9]);
    }
}
