use std::path::Path;

use atlas_core::Metric;
use atlas_report::{FetchOutcome, fetch_metrics};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(data: &Path, key: &str) -> Result<(), String> {
    let catalog = super::load_catalog(data)?;
    let continent = super::find_continent(&catalog, key)?;

    println!("  {} [continent {}]", continent.name.bold(), continent.id.to_string().dimmed());
    println!();

    let regions = catalog.regions_in(continent.id).unwrap_or_default();
    if regions.is_empty() {
        println!("  No regions.");
        return Ok(());
    }

    let mut eligible = 0usize;
    let mut total = 0usize;

    for region_id in regions {
        let Some(region) = catalog.region(*region_id) else {
            continue;
        };
        println!("  {} {}", "Region".dimmed(), region.name.bold());

        let countries = catalog.countries_in(region.id).unwrap_or_default();
        if countries.is_empty() {
            println!("    no countries");
            println!();
            continue;
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        let mut header = vec!["Country"];
        header.extend(Metric::ALL.iter().map(|m| m.table_name()));
        header.push("Eligible");
        table.set_header(header);

        for country_id in countries {
            let name = catalog
                .country(*country_id)
                .map_or_else(|| country_id.to_string(), |c| c.name.clone());
            let outcome = fetch_metrics(&catalog, *country_id).map_err(|e| e.to_string())?;
            let status = match outcome {
                FetchOutcome::Eligible(_) => {
                    eligible += 1;
                    "yes".green().to_string()
                }
                FetchOutcome::Missing(_) => "no".red().to_string(),
            };
            total += 1;

            let mut row = vec![name];
            row.extend(
                Metric::ALL
                    .iter()
                    .map(|m| super::availability(catalog.metric_value(*m, *country_id))),
            );
            row.push(status);
            table.add_row(row);
        }

        println!("{table}");
        println!();
    }

    println!("  {eligible} of {total} countries have all three metrics");

    Ok(())
}
