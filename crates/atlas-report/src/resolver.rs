use std::collections::BTreeSet;

use atlas_core::{AtlasResult, ContinentId, CountryId, DataSource};

/// Collect every country on a continent by walking its regions.
///
/// A continent without regions, or whose regions hold no countries, yields
/// an empty set. Lookup failures are returned as errors.
pub fn resolve_countries<S>(source: &S, continent: ContinentId) -> AtlasResult<BTreeSet<CountryId>>
where
    S: DataSource + ?Sized,
{
    let mut countries = BTreeSet::new();
    for region in source.regions_of(continent)? {
        countries.extend(source.countries_of(region)?);
    }
    Ok(countries)
}
