use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogMeta};
use crate::entity::{Continent, Country, CountryId, Metric, Region};
use crate::error::{AtlasError, AtlasResult};

/// One row of a sparse metric table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    /// The country the value belongs to.
    pub country_id: CountryId,
    /// The metric value.
    pub value: f64,
}

impl MetricRow {
    /// Create a metric row.
    pub fn new(country_id: impl Into<CountryId>, value: f64) -> Self {
        Self {
            country_id: country_id.into(),
            value,
        }
    }
}

/// The on-disk JSON form of a catalog: every table as a flat list of rows.
///
/// Missing tables deserialize as empty. Nothing is checked until
/// [`Snapshot::into_catalog`] runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Dataset name.
    pub name: String,
    /// Dataset description.
    pub description: String,
    /// The continents table.
    pub continents: Vec<Continent>,
    /// The regions table.
    pub regions: Vec<Region>,
    /// The countries table.
    pub countries: Vec<Country>,
    /// The net-exports table.
    pub net_exports: Vec<MetricRow>,
    /// The government-spending table.
    pub government_spending: Vec<MetricRow>,
    /// The quality-of-life table.
    pub quality_of_life: Vec<MetricRow>,
}

impl Snapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json_str(json: &str) -> AtlasResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file.
    pub fn load(path: &Path) -> AtlasResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| AtlasError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Write the snapshot as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> AtlasResult<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|source| AtlasError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> AtlasResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the snapshot and build a catalog from it.
    ///
    /// Tables are inserted parents first, so any row pointing at a missing
    /// parent, any repeated id, and any repeated or non-finite metric row
    /// is reported as an error.
    pub fn into_catalog(self) -> AtlasResult<Catalog> {
        let mut catalog = Catalog::new(CatalogMeta {
            name: self.name,
            description: self.description,
        });

        for continent in self.continents {
            catalog.add_continent(continent)?;
        }
        for region in self.regions {
            catalog.add_region(region)?;
        }
        for country in self.countries {
            catalog.add_country(country)?;
        }

        let tables = [
            (Metric::NetExports, self.net_exports),
            (Metric::GovernmentSpending, self.government_spending),
            (Metric::QualityOfLife, self.quality_of_life),
        ];
        for (metric, rows) in tables {
            for row in rows {
                catalog.set_metric(metric, row.country_id, row.value)?;
            }
        }

        Ok(catalog)
    }

    /// A small example dataset exercising every aggregation path:
    /// a continent with one incomplete country, a continent with no
    /// complete country at all, and one spread over two regions.
    pub fn sample() -> Self {
        Self {
            name: "Sample Atlas".to_string(),
            description: "Example dataset generated by `atlas init`".to_string(),
            continents: vec![
                Continent::new(1, "Europa"),
                Continent::new(2, "Noland"),
                Continent::new(3, "Mixed"),
            ],
            regions: vec![
                Region::new(10, "Western Europa", 1),
                Region::new(20, "Nowhere", 2),
                Region::new(30, "East Mixed", 3),
                Region::new(31, "West Mixed", 3),
            ],
            countries: vec![
                Country::new(100, "Xland", 10),
                Country::new(101, "Yland", 10),
                Country::new(200, "Zland", 20),
                Country::new(201, "Wland", 20),
                Country::new(300, "Alpha", 30),
                Country::new(301, "Beta", 30),
                Country::new(302, "Gamma", 31),
            ],
            net_exports: vec![
                MetricRow::new(100, 100.0),
                MetricRow::new(101, 40.0),
                MetricRow::new(200, 10.0),
                MetricRow::new(300, 10.0),
                MetricRow::new(301, -5.0),
                MetricRow::new(302, 20.0),
            ],
            government_spending: vec![
                MetricRow::new(100, 50.0),
                MetricRow::new(201, 5.0),
                MetricRow::new(300, 20.0),
                MetricRow::new(301, 30.0),
                MetricRow::new(302, 40.0),
            ],
            quality_of_life: vec![
                MetricRow::new(100, 90.0),
                MetricRow::new(101, 85.0),
                MetricRow::new(201, 60.0),
                MetricRow::new(300, 70.0),
                MetricRow::new(301, 75.0),
                MetricRow::new(302, 85.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{ContinentId, RegionId};

    #[test]
    fn missing_tables_default_to_empty() {
        let snapshot = Snapshot::from_json_str(
            r#"{ "name": "Tiny", "continents": [{ "id": 1, "name": "Solo" }] }"#,
        )
        .unwrap();
        assert_eq!(snapshot.continents.len(), 1);
        assert!(snapshot.regions.is_empty());
        assert!(snapshot.quality_of_life.is_empty());

        let catalog = snapshot.into_catalog().unwrap();
        assert_eq!(catalog.meta.name, "Tiny");
        assert_eq!(catalog.continent_count(), 1);
    }

    #[test]
    fn sample_is_valid() {
        let catalog = Snapshot::sample().into_catalog().unwrap();
        assert_eq!(catalog.continent_count(), 3);
        assert_eq!(catalog.region_count(), 4);
        assert_eq!(catalog.country_count(), 7);
        assert_eq!(catalog.metric_count(Metric::GovernmentSpending), 5);
    }

    #[test]
    fn dangling_region_rejected() {
        let json = r#"{
            "continents": [{ "id": 1, "name": "A" }],
            "regions": [{ "id": 10, "name": "R", "continent_id": 2 }]
        }"#;
        let err = Catalog::from_json_str(json).unwrap_err();
        assert_eq!(err.to_string(), "region 10 references unknown continent 2");
    }

    #[test]
    fn metric_for_unknown_country_rejected() {
        let mut snapshot = Snapshot::sample();
        snapshot.quality_of_life.push(MetricRow::new(999, 50.0));
        let err = snapshot.into_catalog().unwrap_err();
        assert!(matches!(err, AtlasError::DanglingReference { target: 999, .. }));
    }

    #[test]
    fn duplicate_metric_row_rejected() {
        let mut snapshot = Snapshot::sample();
        snapshot.net_exports.push(MetricRow::new(100, 1.0));
        let err = snapshot.into_catalog().unwrap_err();
        assert!(matches!(
            err,
            AtlasError::DuplicateMetric { metric: Metric::NetExports, .. }
        ));
    }

    #[test]
    fn malformed_json_reported() {
        let err = Snapshot::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, AtlasError::Json(_)));
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("atlas.json");
        Snapshot::sample().save(&path).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.meta.name, "Sample Atlas");
        assert_eq!(catalog.continent_of(CountryId(302)), Some(ContinentId(3)));
        assert_eq!(catalog.region(RegionId(31)).unwrap().name, "West Mixed");
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = Catalog::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
