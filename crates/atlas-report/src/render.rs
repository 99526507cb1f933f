use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregate::ContinentSummary;
use crate::config::ReportConfig;

/// Qualitative quality-of-life label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QolLabel {
    /// Average at or above the threshold.
    #[serde(rename = "GOOD")]
    Good,
    /// Average below the threshold.
    #[serde(rename = "below threshold")]
    BelowThreshold,
}

impl QolLabel {
    /// Classify an unrounded average against a threshold.
    pub fn classify(avg_qol: f64, threshold: f64) -> Self {
        if avg_qol >= threshold {
            Self::Good
        } else {
            Self::BelowThreshold
        }
    }
}

impl fmt::Display for QolLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => f.write_str("GOOD"),
            Self::BelowThreshold => f.write_str("below threshold"),
        }
    }
}

/// Round half away from zero to `decimals` places.
///
/// Values too large to carry that many fractional digits are returned
/// unchanged.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }
    scaled.round() / factor
}

/// 2^53: beyond this every `f64` is already an integer.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// One rendered report row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    /// Continent name.
    pub continent: String,
    /// Total net exports, rounded.
    pub total_net_exports: f64,
    /// Total government spending, rounded.
    pub total_gov_spending: f64,
    /// Average quality-of-life index, rounded.
    pub avg_qol: f64,
    /// Number of eligible countries behind the figures.
    pub country_count: usize,
    /// Quality-of-life label.
    pub label: QolLabel,
    /// Decimal places the values were rounded to.
    pub precision: usize,
}

impl ReportLine {
    /// Project a summary through the configured precision and threshold.
    pub fn from_summary(summary: &ContinentSummary, config: &ReportConfig) -> Self {
        let decimals = config.rounding_precision;
        Self {
            continent: summary.continent_name.clone(),
            total_net_exports: round_to(summary.total_net_exports, decimals),
            total_gov_spending: round_to(summary.total_gov_spending, decimals),
            avg_qol: round_to(summary.avg_qol, decimals),
            country_count: summary.country_count,
            label: QolLabel::classify(summary.avg_qol, config.good_qol_threshold),
            precision: decimals,
        }
    }

    /// Format a value of this line with its precision, e.g. `90.00`.
    pub fn fixed(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: net exports {}, government spending {}, avg QoL {} ({})",
            self.continent,
            self.fixed(self.total_net_exports),
            self.fixed(self.total_gov_spending),
            self.fixed(self.avg_qol),
            self.label,
        )
    }
}

/// Render summaries in the order given.
pub fn render(summaries: &[ContinentSummary], config: &ReportConfig) -> Vec<ReportLine> {
    summaries
        .iter()
        .map(|summary| ReportLine::from_summary(summary, config))
        .collect()
}
