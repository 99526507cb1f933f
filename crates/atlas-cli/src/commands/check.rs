use std::path::Path;

use atlas_core::Metric;

pub fn run(data: &Path) -> Result<(), String> {
    let catalog = super::load_catalog(data)?;

    println!("  All checks passed for '{}'.", catalog.meta.name);
    println!(
        "  {} continents, {} regions, {} countries",
        catalog.continent_count(),
        catalog.region_count(),
        catalog.country_count()
    );
    for metric in Metric::ALL {
        println!("  {:<20} {} rows", metric.to_string(), catalog.metric_count(metric));
    }
    println!(
        "  {} countries have all three metrics",
        catalog.query().complete(true).count()
    );

    Ok(())
}
