use std::path::Path;

use atlas_core::Snapshot;

pub fn run(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!("'{}' already exists", path.display()));
    }

    let snapshot = Snapshot::sample();
    snapshot.save(path).map_err(|e| e.to_string())?;

    println!("  Created snapshot '{}'", path.display());
    println!(
        "  {} continents, {} regions, {} countries",
        snapshot.continents.len(),
        snapshot.regions.len(),
        snapshot.countries.len()
    );
    println!();
    println!("  Next steps:");
    println!("    atlas check -d {}", path.display());
    println!("    atlas report -d {}", path.display());

    Ok(())
}
