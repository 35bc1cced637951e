use std::path::Path;

use ongap_gap::{GapError, GapRow};

/// Write the per-region results table. Creates the parent directory if
/// absent (idempotent) and overwrites any previous run's file. Given
/// identical rows, the written bytes are identical across runs.
pub fn write_report(rows: &[GapRow], path: &Path) -> Result<(), GapError> {
    ensure_parent_dir(path)?;

    let mut writer = csv::Writer::from_path(path).map_err(|e| GapError::Io(e.to_string()))?;
    for row in rows {
        writer.serialize(row).map_err(|e| GapError::Io(e.to_string()))?;
    }
    writer.flush().map_err(|e| GapError::Io(e.to_string()))?;

    Ok(())
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), GapError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| GapError::Io(e.to_string()))?;
        }
    }
    Ok(())
}
