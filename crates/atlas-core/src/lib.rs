//! Core types for Atlas: continents, regions, countries, and metric tables.
//!
//! This crate defines the read-only data model the report pipeline queries.
//! It is independent of the aggregation logic: build a [`Catalog`]
//! programmatically or load one from a JSON [`Snapshot`].

/// The in-memory catalog that owns all tables and their indexes.
pub mod catalog;
/// Entity types, identifiers, and the metric tables.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Query builder for filtering countries.
pub mod query;
/// JSON snapshot format and validation into a catalog.
pub mod snapshot;
/// The read-only data-access interface consumed by the report pipeline.
pub mod source;

/// Re-export the catalog types.
pub use catalog::{Catalog, CatalogMeta};
/// Re-export core entity types.
pub use entity::{Continent, ContinentId, Country, CountryId, Metric, Region, RegionId};
/// Re-export error types.
pub use error::{AtlasError, AtlasResult};
/// Re-export the snapshot types.
pub use snapshot::{MetricRow, Snapshot};
/// Re-export the data-access trait.
pub use source::DataSource;
