use crate::store::StoreError;

/// Errors that can occur during an export run
///
/// Any error leaves the output in an unspecified state; callers should
/// discard what was written.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// I/O error writing the table
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A record could not be fetched from the store
    #[error("Lookup error: {0}")]
    StoreError(#[from] StoreError),

    /// The parent protein key does not exist
    #[error("Unknown parent protein: {0}")]
    UnknownParent(String),

    /// The export configuration is inconsistent
    #[error("Invalid export configuration: {0}")]
    InvalidConfig(String),

    /// The table writer was driven out of order
    #[error("Invalid table writer state: {0}")]
    InvalidState(&'static str),

    /// The progress sink requested cancellation
    #[error("Export cancelled after {rows} rows")]
    Cancelled {
        /// Rows written before the run stopped
        rows: usize,
    },
}

impl ExportError {
    /// Whether the error was raised before any row was written
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::UnknownParent(_) | Self::InvalidConfig(_))
    }
}
