//! Configuration for a report run.

/// Average quality-of-life index at or above which a continent is labelled good.
pub const DEFAULT_GOOD_QOL_THRESHOLD: f64 = 80.0;

/// Decimal places shown for rendered values.
pub const DEFAULT_ROUNDING_PRECISION: usize = 2;

/// Upper bound for the rounding precision; beyond this `f64` has no digits left to show.
pub const MAX_ROUNDING_PRECISION: usize = 12;

/// Configuration for a report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Threshold for the "GOOD" label, compared against the unrounded average.
    pub good_qol_threshold: f64,
    /// Decimal places for rendered values (0-12).
    pub rounding_precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            good_qol_threshold: DEFAULT_GOOD_QOL_THRESHOLD,
            rounding_precision: DEFAULT_ROUNDING_PRECISION,
        }
    }
}

impl ReportConfig {
    /// Set the good quality-of-life threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.good_qol_threshold = threshold;
        self
    }

    /// Set the rounding precision (clamped to 0-12).
    pub fn with_precision(mut self, decimals: usize) -> Self {
        self.rounding_precision = decimals.min(MAX_ROUNDING_PRECISION);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ReportConfig::default();
        assert!((cfg.good_qol_threshold - 80.0).abs() < f64::EPSILON);
        assert_eq!(cfg.rounding_precision, 2);
    }

    #[test]
    fn builder_methods() {
        let cfg = ReportConfig::default()
            .with_threshold(65.5)
            .with_precision(4);
        assert!((cfg.good_qol_threshold - 65.5).abs() < f64::EPSILON);
        assert_eq!(cfg.rounding_precision, 4);
    }

    #[test]
    fn precision_clamped() {
        let cfg = ReportConfig::default().with_precision(40);
        assert_eq!(cfg.rounding_precision, MAX_ROUNDING_PRECISION);
        let cfg = ReportConfig::default().with_precision(0);
        assert_eq!(cfg.rounding_precision, 0);
    }
}
