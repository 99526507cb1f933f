use crate::catalog::Catalog;
use crate::entity::{Continent, ContinentId, CountryId, Metric, RegionId};
use crate::error::{AtlasError, AtlasResult};

/// Read-only access to the six tables the report pipeline needs.
///
/// Absence and failure are kept apart: a metric lookup that finds no row
/// returns `Ok(None)`, while `Err` means the lookup itself could not be
/// answered (a fault, not a missing value).
pub trait DataSource {
    /// All continents, in ascending id order.
    fn list_continents(&self) -> AtlasResult<Vec<Continent>>;

    /// Ids of the regions belonging to a continent.
    fn regions_of(&self, continent: ContinentId) -> AtlasResult<Vec<RegionId>>;

    /// Ids of the countries belonging to a region.
    fn countries_of(&self, region: RegionId) -> AtlasResult<Vec<CountryId>>;

    /// A country's value in one metric table, or `None` when it has no row.
    fn metric(&self, metric: Metric, country: CountryId) -> AtlasResult<Option<f64>>;
}

impl<T: DataSource + ?Sized> DataSource for &T {
    fn list_continents(&self) -> AtlasResult<Vec<Continent>> {
        (**self).list_continents()
    }

    fn regions_of(&self, continent: ContinentId) -> AtlasResult<Vec<RegionId>> {
        (**self).regions_of(continent)
    }

    fn countries_of(&self, region: RegionId) -> AtlasResult<Vec<CountryId>> {
        (**self).countries_of(region)
    }

    fn metric(&self, metric: Metric, country: CountryId) -> AtlasResult<Option<f64>> {
        (**self).metric(metric, country)
    }
}

impl DataSource for Catalog {
    fn list_continents(&self) -> AtlasResult<Vec<Continent>> {
        Ok(self.continents().cloned().collect())
    }

    fn regions_of(&self, continent: ContinentId) -> AtlasResult<Vec<RegionId>> {
        self.regions_in(continent)
            .map(<[RegionId]>::to_vec)
            .ok_or(AtlasError::ContinentNotFound(continent))
    }

    fn countries_of(&self, region: RegionId) -> AtlasResult<Vec<CountryId>> {
        self.countries_in(region)
            .map(<[CountryId]>::to_vec)
            .ok_or(AtlasError::RegionNotFound(region))
    }

    fn metric(&self, metric: Metric, country: CountryId) -> AtlasResult<Option<f64>> {
        if self.country(country).is_none() {
            return Err(AtlasError::CountryNotFound(country));
        }
        Ok(self.metric_value(metric, country))
    }
}
