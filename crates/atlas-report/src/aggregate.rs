use std::fmt;

use atlas_core::{AtlasError, AtlasResult, Continent, ContinentId, DataSource};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::fetch::{CountryMetrics, FetchOutcome, fetch_metrics};
use crate::resolver::resolve_countries;

/// Aggregated statistics for one continent.
///
/// Only built for continents with at least one eligible country, so
/// `country_count >= 1` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContinentSummary {
    /// The continent the summary belongs to.
    pub continent_id: ContinentId,
    /// The continent's display name.
    pub continent_name: String,
    /// Sum of net exports over eligible countries.
    pub total_net_exports: f64,
    /// Sum of government spending over eligible countries.
    pub total_gov_spending: f64,
    /// Sum of quality-of-life indexes over eligible countries.
    pub qol_sum: f64,
    /// `qol_sum / country_count`, unrounded.
    pub avg_qol: f64,
    /// Number of eligible countries.
    pub country_count: usize,
}

#[derive(Debug, Default)]
struct Totals {
    net_exports: f64,
    gov_spending: f64,
    qol: f64,
    count: usize,
}

impl Totals {
    fn add(&mut self, metrics: CountryMetrics) {
        self.net_exports += metrics.net_exports;
        self.gov_spending += metrics.gov_spending;
        self.qol += metrics.qol;
        self.count += 1;
    }

    fn into_summary(self, continent: &Continent) -> Option<ContinentSummary> {
        if self.count == 0 {
            return None;
        }
        Some(ContinentSummary {
            continent_id: continent.id,
            continent_name: continent.name.clone(),
            total_net_exports: self.net_exports,
            total_gov_spending: self.gov_spending,
            qol_sum: self.qol,
            avg_qol: self.qol / self.count as f64,
            country_count: self.count,
        })
    }
}

/// Where in the run a fault was caught.
#[derive(Debug, Clone, PartialEq)]
pub enum FaultScope {
    /// Listing the continents failed; nothing could be aggregated.
    Enumeration,
    /// Processing one continent failed; that continent was dropped.
    Continent {
        /// The failing continent's id.
        id: ContinentId,
        /// The failing continent's name.
        name: String,
    },
}

impl fmt::Display for FaultScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enumeration => write!(f, "continent enumeration"),
            Self::Continent { id, name } => write!(f, "continent \"{name}\" ({id})"),
        }
    }
}

/// An unexpected failure captured at continent (or enumeration) scope.
#[derive(Debug, thiserror::Error)]
#[error("{scope}: {cause}")]
pub struct RunFault {
    /// Where the failure was caught.
    pub scope: FaultScope,
    /// The underlying error.
    #[source]
    pub cause: AtlasError,
}

/// Everything an aggregation run produced.
#[derive(Debug, Default)]
pub struct AggregateRun {
    /// Summaries in ascending continent-id order.
    pub summaries: Vec<ContinentSummary>,
    /// Faults caught along the way, in the order they occurred.
    pub faults: Vec<RunFault>,
}

impl AggregateRun {
    fn absorb(&mut self, continent: &Continent, outcome: AtlasResult<Option<ContinentSummary>>) {
        match outcome {
            Ok(Some(summary)) => self.summaries.push(summary),
            Ok(None) => {
                debug!(continent = %continent.name, "no eligible countries, continent dropped");
            }
            Err(cause) => {
                warn!(continent = %continent.name, error = %cause, "continent skipped");
                self.faults.push(RunFault {
                    scope: FaultScope::Continent {
                        id: continent.id,
                        name: continent.name.clone(),
                    },
                    cause,
                });
            }
        }
    }

    fn enumeration_failed(cause: AtlasError) -> Self {
        warn!(error = %cause, "cannot list continents, report is empty");
        Self {
            summaries: Vec::new(),
            faults: vec![RunFault {
                scope: FaultScope::Enumeration,
                cause,
            }],
        }
    }
}

/// Aggregate one continent.
///
/// Returns `Ok(None)` when no country on the continent has all three
/// metrics. A country missing any metric contributes nothing at all.
pub fn aggregate_continent<S>(
    source: &S,
    continent: &Continent,
) -> AtlasResult<Option<ContinentSummary>>
where
    S: DataSource + ?Sized,
{
    let mut totals = Totals::default();
    for country in resolve_countries(source, continent.id)? {
        match fetch_metrics(source, country)? {
            FetchOutcome::Eligible(metrics) => totals.add(metrics),
            FetchOutcome::Missing(missing) => {
                trace!(%country, ?missing, "country skipped");
            }
        }
    }
    Ok(totals.into_summary(continent))
}

fn sorted_continents<S>(source: &S) -> AtlasResult<Vec<Continent>>
where
    S: DataSource + ?Sized,
{
    let mut continents = source.list_continents()?;
    continents.sort_by_key(|c| c.id);
    Ok(continents)
}

/// Aggregate every continent, one after another, in ascending id order.
///
/// A failure on one continent is recorded as a [`RunFault`] and the run
/// moves on; nothing here returns an error.
pub fn aggregate<S>(source: &S) -> AggregateRun
where
    S: DataSource + ?Sized,
{
    let continents = match sorted_continents(source) {
        Ok(continents) => continents,
        Err(cause) => return AggregateRun::enumeration_failed(cause),
    };

    let mut run = AggregateRun::default();
    for continent in &continents {
        run.absorb(continent, aggregate_continent(source, continent));
    }
    run
}

/// Like [`aggregate`], but continents are processed on the rayon pool.
/// Results are merged back in ascending id order, so the output matches
/// the sequential run.
pub fn aggregate_parallel<S>(source: &S) -> AggregateRun
where
    S: DataSource + Sync + ?Sized,
{
    let continents = match sorted_continents(source) {
        Ok(continents) => continents,
        Err(cause) => return AggregateRun::enumeration_failed(cause),
    };

    let outcomes: Vec<_> = continents
        .par_iter()
        .map(|continent| aggregate_continent(source, continent))
        .collect();

    let mut run = AggregateRun::default();
    for (continent, outcome) in continents.iter().zip(outcomes) {
        run.absorb(continent, outcome);
    }
    run
}
