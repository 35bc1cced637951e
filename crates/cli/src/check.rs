//! `ongap check` — report which expected raw data files are present.

use std::path::Path;

use ongap_config::DataLayout;

use crate::CliError;

pub fn cmd_check(layout: &DataLayout, root: &Path) -> Result<(), CliError> {
    eprintln!("checking for data files under {}", layout.raw_dir(root).display());

    let mut missing = 0usize;
    for path in layout.expected_raw_files(root) {
        if path.exists() {
            eprintln!("  found:   {}", path.display());
        } else {
            eprintln!("  missing: {}", path.display());
            missing += 1;
        }
    }

    // Missing raw data is expected on a fresh checkout; report, don't fail.
    if missing > 0 {
        eprintln!("note: raw data can be sourced from:");
        eprintln!("  1. Statistics Canada census data");
        eprintln!("  2. 211 Ontario service directory");
        eprintln!("  3. Postal code boundaries");
    }

    Ok(())
}
