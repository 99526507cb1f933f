use atlas_core::{AtlasResult, CountryId, DataSource, Metric};

/// The three metric values of an eligible country.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryMetrics {
    /// Value from the net-exports table.
    pub net_exports: f64,
    /// Value from the government-spending table.
    pub gov_spending: f64,
    /// Value from the quality-of-life table.
    pub qol: f64,
}

/// Result of looking up one country's metrics.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// All three tables have a row for the country.
    Eligible(CountryMetrics),
    /// At least one table has no row; lists every missing table.
    Missing(Vec<Metric>),
}

/// Look up all three metrics for a country.
///
/// Each table is queried independently. A missing row is a normal outcome
/// reported as [`FetchOutcome::Missing`]; only a failed lookup is an error.
pub fn fetch_metrics<S>(source: &S, country: CountryId) -> AtlasResult<FetchOutcome>
where
    S: DataSource + ?Sized,
{
    let net_exports = source.metric(Metric::NetExports, country)?;
    let gov_spending = source.metric(Metric::GovernmentSpending, country)?;
    let qol = source.metric(Metric::QualityOfLife, country)?;

    let outcome = match (net_exports, gov_spending, qol) {
        (Some(net_exports), Some(gov_spending), Some(qol)) => {
            FetchOutcome::Eligible(CountryMetrics {
                net_exports,
                gov_spending,
                qol,
            })
        }
        (net_exports, gov_spending, qol) => {
            let missing = [
                (Metric::NetExports, net_exports),
                (Metric::GovernmentSpending, gov_spending),
                (Metric::QualityOfLife, qol),
            ]
            .into_iter()
            .filter_map(|(metric, value)| value.is_none().then_some(metric))
            .collect();
            FetchOutcome::Missing(missing)
        }
    };
    Ok(outcome)
}
