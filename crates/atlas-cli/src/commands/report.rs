use std::path::Path;

use atlas_report::{
    QolLabel, Report, ReportConfig, generate_report, generate_report_parallel,
};
use colored::Colorize;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use crate::ReportFormat;

pub fn run(
    data: &Path,
    threshold: Option<f64>,
    decimals: Option<usize>,
    format: ReportFormat,
    parallel: bool,
) -> Result<(), String> {
    let catalog = super::load_catalog(data)?;

    let mut config = ReportConfig::default();
    if let Some(threshold) = threshold {
        if !threshold.is_finite() {
            return Err(format!("invalid threshold: {threshold}"));
        }
        config = config.with_threshold(threshold);
    }
    if let Some(decimals) = decimals {
        config = config.with_precision(decimals);
    }

    let report = if parallel {
        generate_report_parallel(&catalog, &config)
    } else {
        generate_report(&catalog, &config)
    };

    match format {
        ReportFormat::Table => print_table(&report),
        ReportFormat::Text => print_text(&report),
        ReportFormat::Json => print_json(&report, &catalog.meta.name)?,
    }

    if !matches!(format, ReportFormat::Json) {
        print_faults(&report);
    }

    Ok(())
}

fn print_table(report: &Report) {
    if report.is_empty() {
        println!("  No continent has a country with all three metrics.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Continent",
        "Net exports",
        "Gov. spending",
        "Avg QoL",
        "Countries",
        "QoL",
    ]);
    for index in 1..=4 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    for line in &report.lines {
        let label = match line.label {
            QolLabel::Good => line.label.to_string().green().bold().to_string(),
            QolLabel::BelowThreshold => line.label.to_string().yellow().to_string(),
        };
        table.add_row(vec![
            line.continent.clone(),
            line.fixed(line.total_net_exports),
            line.fixed(line.total_gov_spending),
            line.fixed(line.avg_qol),
            line.country_count.to_string(),
            label,
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} continents, GOOD at avg QoL >= {}",
        report.lines.len(),
        report.config.good_qol_threshold
    );
}

fn print_text(report: &Report) {
    for line in report.text_lines() {
        println!("{line}");
    }
}

fn print_json(report: &Report, dataset: &str) -> Result<(), String> {
    let faults: Vec<String> = report.faults.iter().map(ToString::to_string).collect();
    let export = serde_json::json!({
        "dataset": dataset,
        "generated_at": report.generated_at.to_rfc3339(),
        "config": {
            "good_qol_threshold": report.config.good_qol_threshold,
            "rounding_precision": report.config.rounding_precision,
        },
        "continents": report.lines,
        "faults": faults,
    });

    let json = serde_json::to_string_pretty(&export)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{json}");
    Ok(())
}

fn print_faults(report: &Report) {
    if report.faults.is_empty() {
        return;
    }
    eprintln!(
        "  {} skipped after a fault:",
        if report.faults.len() == 1 {
            "1 continent".to_string()
        } else {
            format!("{} continents", report.faults.len())
        }
    );
    for fault in &report.faults {
        eprintln!("    {fault}");
    }
}
