pub mod check;
pub mod init;
pub mod list;
pub mod report;
pub mod show;

use std::path::Path;

use atlas_core::{Catalog, Continent, Metric};
use tracing::info;

/// Load and validate a snapshot file.
fn load_catalog(path: &Path) -> Result<Catalog, String> {
    let catalog = Catalog::load(path).map_err(|e| e.to_string())?;
    info!(
        path = %path.display(),
        continents = catalog.continent_count(),
        regions = catalog.region_count(),
        countries = catalog.country_count(),
        "snapshot loaded"
    );
    Ok(catalog)
}

/// Resolve a continent given by id or name.
fn find_continent<'c>(catalog: &'c Catalog, key: &str) -> Result<&'c Continent, String> {
    catalog
        .find_continent(key)
        .ok_or_else(|| format!("continent not found: \"{key}\""))
}

fn parse_metric(name: &str) -> Result<Metric, String> {
    name.parse::<Metric>().map_err(|e| e.to_string())
}

/// A metric cell: the value, or a dash when the row is missing.
fn availability(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "—".to_string(),
    }
}
