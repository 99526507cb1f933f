//! Shared fixtures for unit tests.

use atlas_core::{
    AtlasError, AtlasResult, Catalog, CatalogMeta, Continent, ContinentId, Country, CountryId,
    DataSource, Metric, Region, RegionId,
};

/// Continents, in id order:
///
/// 1. Europa: one complete country, one missing spending
/// 2. Noland: countries, none complete
/// 3. Mixed: three complete countries over two regions, qol 70/75/85
/// 4. Faulty: two complete countries (targets for injected faults)
/// 5. Empty: no regions
/// 6. Barren: one region, no countries
/// 7. Tail: one complete country
pub fn scenario_catalog() -> Catalog {
    let mut catalog = Catalog::new(CatalogMeta::new("Scenarios"));
    let continents = [
        (1, "Europa"),
        (2, "Noland"),
        (3, "Mixed"),
        (4, "Faulty"),
        (5, "Empty"),
        (6, "Barren"),
        (7, "Tail"),
    ];
    for (id, name) in continents {
        catalog.add_continent(Continent::new(id, name)).unwrap();
    }

    let regions = [
        (10, 1),
        (20, 2),
        (30, 3),
        (31, 3),
        (40, 4),
        (60, 6),
        (70, 7),
    ];
    for (id, continent) in regions {
        catalog
            .add_region(Region::new(id, format!("Region {id}"), continent))
            .unwrap();
    }

    // (id, region, net exports, spending, qol)
    let countries: [(u32, u32, Option<f64>, Option<f64>, Option<f64>); 11] = [
        (100, 10, Some(100.0), Some(50.0), Some(90.0)),
        (101, 10, Some(40.0), None, Some(85.0)),
        (200, 20, Some(10.0), None, None),
        (201, 20, None, Some(5.0), Some(60.0)),
        (300, 30, Some(10.0), Some(20.0), Some(70.0)),
        (301, 30, Some(-5.0), Some(30.0), Some(75.0)),
        (302, 31, Some(20.0), Some(40.0), Some(85.0)),
        (400, 40, Some(1.0), Some(2.0), Some(95.0)),
        (401, 40, Some(3.0), Some(4.0), Some(88.0)),
        (700, 70, Some(5.0), Some(6.0), Some(81.0)),
        (701, 70, None, None, None),
    ];
    for (id, region, ne, gs, qol) in countries {
        catalog
            .add_country(Country::new(id, format!("Country {id}"), region))
            .unwrap();
        for (metric, value) in [
            (Metric::NetExports, ne),
            (Metric::GovernmentSpending, gs),
            (Metric::QualityOfLife, qol),
        ] {
            if let Some(value) = value {
                catalog.set_metric(metric, CountryId(id), value).unwrap();
            }
        }
    }
    catalog
}

/// Which lookup a [`FailingSource`] breaks.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    /// `list_continents` fails.
    Continents,
    /// `regions_of` fails for this continent.
    Regions(ContinentId),
    /// `metric` fails for this table and country.
    Metric(Metric, CountryId),
}

/// Wraps a catalog and injects an access fault into one lookup.
#[derive(Debug)]
pub struct FailingSource<'c> {
    inner: &'c Catalog,
    failure: Failure,
}

impl<'c> FailingSource<'c> {
    pub fn new(inner: &'c Catalog, failure: Failure) -> Self {
        Self { inner, failure }
    }
}

fn injected(what: &str) -> AtlasError {
    AtlasError::Access(format!("injected failure in {what}"))
}

impl DataSource for FailingSource<'_> {
    fn list_continents(&self) -> AtlasResult<Vec<Continent>> {
        if let Failure::Continents = self.failure {
            return Err(injected("list_continents"));
        }
        self.inner.list_continents()
    }

    fn regions_of(&self, continent: ContinentId) -> AtlasResult<Vec<RegionId>> {
        if let Failure::Regions(target) = self.failure
            && target == continent
        {
            return Err(injected("regions_of"));
        }
        self.inner.regions_of(continent)
    }

    fn countries_of(&self, region: RegionId) -> AtlasResult<Vec<CountryId>> {
        self.inner.countries_of(region)
    }

    fn metric(&self, metric: Metric, country: CountryId) -> AtlasResult<Option<f64>> {
        if let Failure::Metric(target_metric, target_country) = self.failure
            && target_metric == metric
            && target_country == country
        {
            return Err(injected("metric"));
        }
        self.inner.metric(metric, country)
    }
}

/// Wraps a catalog but lists continents in descending id order.
#[derive(Debug)]
pub struct ReversedSource<'c>(pub &'c Catalog);

impl DataSource for ReversedSource<'_> {
    fn list_continents(&self) -> AtlasResult<Vec<Continent>> {
        let mut continents = self.0.list_continents()?;
        continents.reverse();
        Ok(continents)
    }

    fn regions_of(&self, continent: ContinentId) -> AtlasResult<Vec<RegionId>> {
        self.0.regions_of(continent)
    }

    fn countries_of(&self, region: RegionId) -> AtlasResult<Vec<CountryId>> {
        self.0.countries_of(region)
    }

    fn metric(&self, metric: Metric, country: CountryId) -> AtlasResult<Option<f64>> {
        self.0.metric(metric, country)
    }
}
