//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of
//! the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args)               |
//! | 10-19   | analyze          | Input loading / output writing codes     |

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing subcommand.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Analyze (10-19)
// =============================================================================

/// A required input file is missing, unreadable, or unparseable as CSV.
pub const EXIT_DATA_UNAVAILABLE: u8 = 10;

/// An expected column is absent from an input header row.
pub const EXIT_SCHEMA_MISMATCH: u8 = 11;

/// A count field failed to parse as a non-negative integer.
pub const EXIT_COUNT_PARSE: u8 = 12;

/// The results file could not be written.
pub const EXIT_WRITE: u8 = 13;

// =============================================================================
// Error mapping
// =============================================================================

use ongap_gap::GapError;

/// Map a GapError to its exit code.
pub fn gap_exit_code(err: &GapError) -> u8 {
    match err {
        GapError::DataUnavailable { .. } => EXIT_DATA_UNAVAILABLE,
        GapError::SchemaMismatch { .. } => EXIT_SCHEMA_MISMATCH,
        GapError::CountParse { .. } => EXIT_COUNT_PARSE,
        GapError::Io(_) => EXIT_WRITE,
    }
}
