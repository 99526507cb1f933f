//! Per-continent aggregation and report rendering for Atlas.
//!
//! The pipeline runs against any [`atlas_core::DataSource`]: continents are
//! enumerated in id order, each continent's countries are resolved through
//! its regions, countries missing any of the three metrics are skipped, and
//! the surviving totals are rendered with a quality-of-life label. Faults
//! are caught per continent and reported alongside the result.

/// Continent aggregation, summaries, and fault capture.
pub mod aggregate;
/// Report configuration (threshold and precision).
pub mod config;
/// Per-country metric lookup.
pub mod fetch;
/// Summary rendering and labelling.
pub mod render;
/// Top-level report entry point.
pub mod report;
/// Continent → country resolution through regions.
pub mod resolver;

#[cfg(test)]
mod test_support;

/// Re-exports of the aggregation types.
pub use aggregate::{
    AggregateRun, ContinentSummary, FaultScope, RunFault, aggregate, aggregate_continent,
    aggregate_parallel,
};
/// Re-export of [`config::ReportConfig`].
pub use config::ReportConfig;
/// Re-exports of the fetch types.
pub use fetch::{CountryMetrics, FetchOutcome, fetch_metrics};
/// Re-exports of the rendering types.
pub use render::{QolLabel, ReportLine, render, round_to};
/// Re-exports of the report entry point.
pub use report::{Report, generate_report, generate_report_parallel};
/// Re-export of [`resolver::resolve_countries`].
pub use resolver::resolve_countries;
