use atlas_core::DataSource;
use chrono::{DateTime, Utc};
use tracing::{info, info_span};

use crate::aggregate::{AggregateRun, ContinentSummary, RunFault, aggregate, aggregate_parallel};
use crate::config::ReportConfig;
use crate::render::{ReportLine, render};

/// A finished report: rendered lines, the summaries behind them, and the
/// faults caught while aggregating.
#[derive(Debug)]
pub struct Report {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The configuration the report was rendered with.
    pub config: ReportConfig,
    /// Rendered rows, in ascending continent-id order.
    pub lines: Vec<ReportLine>,
    /// Unrounded summaries, parallel to `lines`.
    pub summaries: Vec<ContinentSummary>,
    /// Continent-level fault notices.
    pub faults: Vec<RunFault>,
}

impl Report {
    /// Render an aggregation run.
    pub fn from_run(run: AggregateRun, config: &ReportConfig) -> Self {
        let lines = render(&run.summaries, config);
        Self {
            generated_at: Utc::now(),
            config: config.clone(),
            lines,
            summaries: run.summaries,
            faults: run.faults,
        }
    }

    /// True when no continent produced a summary.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rendered rows as plain text, one per continent.
    pub fn text_lines(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }
}

/// Run the whole pipeline: aggregate every continent in turn, then render.
///
/// Never fails; the worst outcome is an empty report with faults attached.
pub fn generate_report<S>(source: &S, config: &ReportConfig) -> Report
where
    S: DataSource + ?Sized,
{
    let _span = info_span!("report").entered();
    finish(aggregate(source), config, false)
}

/// Like [`generate_report`], but continents are aggregated on the rayon
/// pool. The report is identical to the sequential one.
pub fn generate_report_parallel<S>(source: &S, config: &ReportConfig) -> Report
where
    S: DataSource + Sync + ?Sized,
{
    let _span = info_span!("report").entered();
    finish(aggregate_parallel(source), config, true)
}

fn finish(run: AggregateRun, config: &ReportConfig, parallel: bool) -> Report {
    info!(
        continents = run.summaries.len(),
        faults = run.faults.len(),
        parallel,
        "aggregation finished"
    );
    Report::from_run(run, config)
}
