use std::path::Path;

use atlas_core::{Catalog, ContinentId, Metric};
use comfy_table::{ContentArrangement, Table};

use crate::ListTarget;

pub fn run(
    data: &Path,
    target: ListTarget,
    continent: Option<&str>,
    missing: Option<&str>,
    complete: bool,
) -> Result<(), String> {
    if !matches!(target, ListTarget::Countries) && (missing.is_some() || complete) {
        return Err("--missing and --complete only apply to `list countries`".to_string());
    }

    let catalog = super::load_catalog(data)?;

    let continent = continent
        .map(|key| super::find_continent(&catalog, key).map(|c| c.id))
        .transpose()?;

    match target {
        ListTarget::Continents => list_continents(&catalog),
        ListTarget::Regions => list_regions(&catalog, continent),
        ListTarget::Countries => list_countries(&catalog, continent, missing, complete)?,
    }

    Ok(())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn list_continents(catalog: &Catalog) {
    if catalog.continent_count() == 0 {
        println!("  No continents found.");
        return;
    }

    let mut table = new_table(vec!["Id", "Name", "Regions", "Countries"]);
    for continent in catalog.continents() {
        let regions = catalog.regions_in(continent.id).unwrap_or_default();
        let countries = catalog.query().continent(continent.id).count();
        table.add_row(vec![
            continent.id.to_string(),
            continent.name.clone(),
            regions.len().to_string(),
            countries.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} continents", catalog.continent_count());
}

fn list_regions(catalog: &Catalog, continent: Option<ContinentId>) {
    let regions: Vec<_> = catalog
        .regions()
        .filter(|r| continent.is_none_or(|id| r.continent_id == id))
        .collect();

    if regions.is_empty() {
        println!("  No regions found.");
        return;
    }

    let mut table = new_table(vec!["Id", "Name", "Continent", "Countries"]);
    for region in &regions {
        let continent_name = catalog
            .continent(region.continent_id)
            .map_or("?", |c| c.name.as_str());
        let countries = catalog.countries_in(region.id).unwrap_or_default();
        table.add_row(vec![
            region.id.to_string(),
            region.name.clone(),
            continent_name.to_string(),
            countries.len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} regions", regions.len());
}

fn list_countries(
    catalog: &Catalog,
    continent: Option<ContinentId>,
    missing: Option<&str>,
    complete: bool,
) -> Result<(), String> {
    let mut query = catalog.query();

    if let Some(id) = continent {
        query = query.continent(id);
    }

    if let Some(name) = missing {
        query = query.missing(super::parse_metric(name)?);
    }

    if complete {
        query = query.complete(true);
    }

    let results = query.execute();

    if results.is_empty() {
        println!("  No countries found.");
        return Ok(());
    }

    let mut header = vec!["Id", "Name", "Region"];
    header.extend(Metric::ALL.iter().map(|m| m.table_name()));
    let mut table = new_table(header);

    for country in &results {
        let region_name = catalog
            .region(country.region_id)
            .map_or("?", |r| r.name.as_str());
        let mut row = vec![
            country.id.to_string(),
            country.name.clone(),
            region_name.to_string(),
        ];
        row.extend(
            Metric::ALL
                .iter()
                .map(|m| super::availability(catalog.metric_value(*m, country.id))),
        );
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  {} countries", results.len());

    Ok(())
}
