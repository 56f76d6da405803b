use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::features::RecordType;

/// Statistics from a completed export
#[derive(Debug, Clone)]
pub struct ExportStats {
    /// Kind of table exported
    pub record_type: RecordType,
    /// Number of data rows written
    pub rows_written: usize,
    /// Number of columns per row, index column excluded
    pub columns: usize,
    /// Match snapshots fetched from the store
    pub match_fetches: usize,
    /// Validation parameters fetched from the store
    pub parameter_fetches: usize,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

impl ExportStats {
    /// Rows written per second
    pub fn rows_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.rows_written as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for ExportStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exported {} {} rows x {} columns ({} match / {} parameter fetches) in {:.2?}",
            self.rows_written,
            self.record_type,
            self.columns,
            self.match_fetches,
            self.parameter_fetches,
            self.elapsed
        )
    }
}
