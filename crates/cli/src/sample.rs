//! `ongap sample` — write the sample demographics and services fixtures.

use std::path::Path;

use ongap_config::DataLayout;

use crate::CliError;

pub fn cmd_sample(layout: &DataLayout, root: &Path) -> Result<(), CliError> {
    let dir = layout.clean_dir(root);
    ongap_io::sample::write_sample_data(&dir).map_err(CliError::gap)?;
    eprintln!("wrote sample data to {}", dir.display());
    Ok(())
}
