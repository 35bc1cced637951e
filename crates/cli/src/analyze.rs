//! `ongap analyze` — join demographics with services, write the results table.

use std::path::{Path, PathBuf};

use ongap_config::DataLayout;
use ongap_gap::loader::{DEMOGRAPHICS_TABLE, SERVICES_TABLE};
use ongap_gap::GapStatus;
use ongap_io::read::read_table_as_utf8;

use crate::CliError;

pub fn cmd_analyze(
    layout: &DataLayout,
    root: &Path,
    demographics: Option<PathBuf>,
    services: Option<PathBuf>,
    output: Option<PathBuf>,
    json_output: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let demo_path = demographics.unwrap_or_else(|| layout.demographics_path(root));
    let services_path = services.unwrap_or_else(|| layout.services_path(root));
    let output_path = output.unwrap_or_else(|| layout.results_path(root));

    // Load both inputs fully before touching the output file, so a bad
    // input never leaves a partial results file behind.
    let demo_data = read_table_as_utf8(DEMOGRAPHICS_TABLE, &demo_path).map_err(CliError::gap)?;
    let services_data =
        read_table_as_utf8(SERVICES_TABLE, &services_path).map_err(CliError::gap)?;

    let regions = ongap_gap::load_region_rows(&demo_data).map_err(CliError::gap)?;
    let service_rows = ongap_gap::load_service_rows(&services_data).map_err(CliError::gap)?;

    let report = ongap_gap::run(&regions, &service_rows);

    ongap_io::write::write_report(&report.rows, &output_path).map_err(CliError::gap)?;

    if json_output {
        let json_str = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::error(format!("JSON serialization error: {e}")))?;
        println!("{json_str}");
    }

    // Human summary to stderr
    if !quiet {
        let s = &report.summary;
        eprintln!(
            "gap analysis: {} regions — {} high gap, {} ok ({} services counted, {} dropped)",
            s.total_regions, s.high_gap, s.ok, s.services_counted, s.services_dropped,
        );
        for row in report.rows.iter().filter(|r| r.gap_status == GapStatus::HighGap) {
            eprintln!(
                "  {}: {} seniors, only {} service(s)",
                row.region, row.seniors, row.service_count,
            );
        }
        if s.high_gap == 0 {
            eprintln!("  no high gaps found");
        }
        eprintln!("wrote {}", output_path.display());
    }

    Ok(())
}
