use std::path::Path;

use ongap_gap::{GapError, RegionRecord, ServiceRecord};

pub const SAMPLE_DEMOGRAPHICS_FILE: &str = "sample_demographics.csv";
pub const SAMPLE_SERVICES_FILE: &str = "sample_services.csv";

/// Fixture demographics: five Ontario regions spanning dense urban cores,
/// suburbs, and sparse rural FSAs.
pub fn sample_regions() -> Vec<RegionRecord> {
    let rows = [
        ("M5V", "Toronto-Downtown", 15000, 3000, 4500, 2000),
        ("K1A", "Ottawa-Central", 12000, 2400, 3000, 1500),
        ("L5B", "Mississauga", 18000, 3600, 5400, 1800),
        ("P0L", "Northern-Ontario", 5000, 1500, 2000, 200),
        ("N0L", "Southwest-Rural", 3000, 900, 1200, 100),
    ];

    rows.iter()
        .map(|&(postal_code, region, population, seniors, low_income, newcomers)| {
            RegionRecord {
                postal_code: postal_code.into(),
                region: region.into(),
                population,
                seniors,
                low_income,
                newcomers,
            }
        })
        .collect()
}

/// Fixture service directory matching the sample regions.
pub fn sample_services() -> Vec<ServiceRecord> {
    let rows = [
        (1, "Senior Center A", "senior_services", "M5V", "Toronto-Downtown"),
        (2, "Food Bank B", "food_bank", "K1A", "Ottawa-Central"),
        (3, "Health Clinic C", "health", "L5B", "Mississauga"),
        (4, "Newcomer Center D", "newcomer_services", "M5V", "Toronto-Downtown"),
        (5, "Community Hub E", "general", "N0L", "Southwest-Rural"),
    ];

    rows.iter()
        .map(|&(service_id, service_name, service_type, postal_code, region)| {
            ServiceRecord {
                service_id,
                service_name: service_name.into(),
                service_type: service_type.into(),
                postal_code: postal_code.into(),
                region: region.into(),
            }
        })
        .collect()
}

/// Write both sample tables into `dir`, creating it if absent. Overwrites
/// existing files, so re-running always yields the same fixtures.
pub fn write_sample_data(dir: &Path) -> Result<(), GapError> {
    std::fs::create_dir_all(dir).map_err(|e| GapError::Io(e.to_string()))?;

    write_table(&sample_regions(), &dir.join(SAMPLE_DEMOGRAPHICS_FILE))?;
    write_table(&sample_services(), &dir.join(SAMPLE_SERVICES_FILE))?;

    Ok(())
}

fn write_table<T: serde::Serialize>(rows: &[T], path: &Path) -> Result<(), GapError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| GapError::Io(e.to_string()))?;
    for row in rows {
        writer.serialize(row).map_err(|e| GapError::Io(e.to_string()))?;
    }
    writer.flush().map_err(|e| GapError::Io(e.to_string()))?;
    Ok(())
}
