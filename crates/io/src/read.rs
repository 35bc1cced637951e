use std::io::Read;
use std::path::Path;

use ongap_gap::GapError;

/// Read an input table and convert to UTF-8 if needed (handles Windows-1252,
/// Latin-1, etc. — common for Excel-exported CSVs).
pub fn read_table_as_utf8(table: &str, path: &Path) -> Result<String, GapError> {
    let mut file = std::fs::File::open(path).map_err(|e| unavailable(table, path, &e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| unavailable(table, path, &e))?;

    // Try UTF-8 first; on failure, recover the buffer from the error
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

fn unavailable(table: &str, path: &Path, err: &std::io::Error) -> GapError {
    GapError::DataUnavailable {
        table: table.into(),
        reason: format!("{}: {err}", path.display()),
    }
}
