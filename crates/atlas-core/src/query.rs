use crate::catalog::Catalog;
use crate::entity::{ContinentId, Country, Metric};

/// A builder for filtering countries in a catalog.
pub struct CountryQuery<'c> {
    catalog: &'c Catalog,
    continent: Option<ContinentId>,
    missing: Vec<Metric>,
    complete: Option<bool>,
}

impl<'c> CountryQuery<'c> {
    /// Start an unfiltered query over every country.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            continent: None,
            missing: Vec::new(),
            complete: None,
        }
    }

    /// Filter to countries on a continent (via their region).
    pub fn continent(mut self, id: ContinentId) -> Self {
        self.continent = Some(id);
        self
    }

    /// Filter to countries with no row in the given metric table.
    pub fn missing(mut self, metric: Metric) -> Self {
        self.missing.push(metric);
        self
    }

    /// Filter to countries that have (`true`) or lack (`false`) a row in
    /// all three metric tables.
    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }

    /// Execute the query and return matching countries in ascending id order.
    pub fn execute(self) -> Vec<&'c Country> {
        self.catalog
            .countries()
            .filter(|c| self.matches(c))
            .collect()
    }

    /// Count matching countries without collecting them.
    pub fn count(self) -> usize {
        self.catalog
            .countries()
            .filter(|c| self.matches(c))
            .count()
    }

    fn matches(&self, country: &Country) -> bool {
        if let Some(continent) = self.continent
            && self.catalog.continent_of(country.id) != Some(continent)
        {
            return false;
        }

        for metric in &self.missing {
            if self.catalog.metric_value(*metric, country.id).is_some() {
                return false;
            }
        }

        if let Some(complete) = self.complete {
            let has_all = Metric::ALL
                .iter()
                .all(|m| self.catalog.metric_value(*m, country.id).is_some());
            if has_all != complete {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;

    fn names(countries: Vec<&Country>) -> Vec<&str> {
        countries.into_iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn query_by_continent() {
        let catalog = Snapshot::sample().into_catalog().unwrap();
        let results = catalog.query().continent(ContinentId(3)).execute();
        assert_eq!(names(results), ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn query_missing_metric() {
        let catalog = Snapshot::sample().into_catalog().unwrap();
        let results = catalog
            .query()
            .missing(Metric::GovernmentSpending)
            .execute();
        assert_eq!(names(results), ["Yland", "Zland"]);
    }

    #[test]
    fn query_complete_and_incomplete() {
        let catalog = Snapshot::sample().into_catalog().unwrap();
        assert_eq!(catalog.query().complete(true).count(), 4);
        let incomplete = catalog.query().complete(false).execute();
        assert_eq!(names(incomplete), ["Yland", "Zland", "Wland"]);
    }

    #[test]
    fn filters_combine() {
        let catalog = Snapshot::sample().into_catalog().unwrap();
        let results = catalog
            .query()
            .continent(ContinentId(1))
            .missing(Metric::GovernmentSpending)
            .execute();
        assert_eq!(names(results), ["Yland"]);
        assert_eq!(catalog.query().continent(ContinentId(3)).complete(true).count(), 3);
    }
}
