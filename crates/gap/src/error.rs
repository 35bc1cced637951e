use std::fmt;

#[derive(Debug)]
pub enum GapError {
    /// A required input is missing, unreadable, or not parseable as CSV.
    DataUnavailable { table: String, reason: String },
    /// An expected column is absent from an input's header row.
    SchemaMismatch { table: String, column: String },
    /// A count field holds something other than a non-negative integer.
    CountParse { table: String, row: usize, column: String, value: String },
    /// IO error (output write, etc.).
    Io(String),
}

impl fmt::Display for GapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataUnavailable { table, reason } => {
                write!(f, "table '{table}': data unavailable: {reason}")
            }
            Self::SchemaMismatch { table, column } => {
                write!(f, "table '{table}': missing column '{column}'")
            }
            Self::CountParse { table, row, column, value } => {
                write!(f, "table '{table}', row {row}: cannot parse '{value}' in column '{column}'")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for GapError {}
