use std::path::PathBuf;

use crate::entity::{ContinentId, CountryId, Metric, RegionId};

/// Alias for `Result<T, AtlasError>`.
pub type AtlasResult<T> = Result<T, AtlasError>;

/// Errors that can occur when building, loading, or querying a catalog.
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    /// The requested continent ID does not exist in the catalog.
    #[error("continent not found: {0}")]
    ContinentNotFound(ContinentId),

    /// The requested region ID does not exist in the catalog.
    #[error("region not found: {0}")]
    RegionNotFound(RegionId),

    /// The requested country ID does not exist in the catalog.
    #[error("country not found: {0}")]
    CountryNotFound(CountryId),

    /// Two rows of the same table share a primary key.
    #[error("duplicate {table} id: {id}")]
    DuplicateId {
        /// The table containing the duplicate.
        table: &'static str,
        /// The repeated id.
        id: u32,
    },

    /// A row references a parent that does not exist.
    #[error("{table} {id} references unknown {target_table} {target}")]
    DanglingReference {
        /// The table containing the referencing row.
        table: &'static str,
        /// The referencing row's id.
        id: u32,
        /// The table the reference points into.
        target_table: &'static str,
        /// The missing id.
        target: u32,
    },

    /// A metric table holds more than one row for the same country.
    #[error("duplicate {metric} row for country {country}")]
    DuplicateMetric {
        /// The metric table.
        metric: Metric,
        /// The country with more than one row.
        country: CountryId,
    },

    /// A metric value is NaN or infinite.
    #[error("invalid {metric} value for country {country}: {value}")]
    InvalidMetricValue {
        /// The metric table.
        metric: Metric,
        /// The country the value belongs to.
        country: CountryId,
        /// The rejected value.
        value: f64,
    },

    /// A metric name could not be parsed.
    #[error("unknown metric: \"{0}\" (expected net_exports, government_spending, or quality_of_life)")]
    UnknownMetric(String),

    /// A snapshot file could not be read or written.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A snapshot could not be parsed or serialized.
    #[error("invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// The data-access layer failed for a reason other than absence.
    #[error("data access failed: {0}")]
    Access(String),
}
