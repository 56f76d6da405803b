//! # Table Export
//!
//! Streams peptide and PSM tables to any `std::io::Write`.
//!
//! ## Architecture
//!
//! An export run goes through four stages:
//!
//! 1. **Resolution**: the row keys are taken from the configuration, from a
//!    parent protein match, or from the store's listing (PSMs grouped by
//!    spectrum file).
//! 2. **Header**: feature titles, written when the layout asks for them.
//! 3. **Rows**: a [`ColumnEvaluator`] turns each (key, feature) pair into cell
//!    text, caching the current row's match and parameter.
//! 4. **Finish**: the output is flushed and [`ExportStats`] are returned.
//!
//! Cell text is produced by an [`Extractor`] looked up in a [`FeatureTable`].
//! The standard table covers every feature; removing an entry makes the
//! column render as [`NOT_IMPLEMENTED`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use mzreport::export::{ExportConfig, NoProgress, PeptideExporter, TableFormat};
//! use mzreport::features::PeptideFeature;
//! use mzreport::store::InMemoryStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::from_json_file("project.json")?;
//! let config = ExportConfig::new(vec![PeptideFeature::Accessions, PeptideFeature::Decoy])
//!     .with_format(TableFormat::csv());
//!
//! let mut out = Vec::new();
//! let stats = PeptideExporter::new(&store).export(&config, &mut out, &mut NoProgress)?;
//! println!("{stats}");
//! # Ok(())
//! # }
//! ```

mod cells;
mod config;
mod error;
mod evaluator;
mod exporter;
mod peptide;
mod progress;
mod psm;
mod resolver;
mod slot;
mod stats;
mod table;
mod writer;

#[cfg(test)]
mod tests;

pub use config::{ExportConfig, TableFormat};
pub use error::ExportError;
pub use evaluator::{ColumnEvaluator, NOT_IMPLEMENTED};
pub use exporter::{PeptideExporter, PsmExporter, TableExporter};
pub use progress::{CancelFlag, Cancellable, LogProgress, NoProgress, ProgressSink};
pub use resolver::partition_by_file;
pub use slot::MemoSlot;
pub use stats::ExportStats;
pub use table::{ExportRecord, Extractor, FeatureTable, PeptideTable, PsmTable, RowContext};
pub use writer::TableWriter;
