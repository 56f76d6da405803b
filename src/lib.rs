//! # mzreport - Identification Report Export
//!
//! `mzreport` writes the peptide and peptide-spectrum match (PSM) tables of a
//! proteomics identification project as delimited text, column by column in
//! the order the caller asks for.
//!
//! ## Key Features
//!
//! - **Closed feature sets**: every column of the peptide and PSM tables is a
//!   typed feature with a stable identifier and header title.
//!
//! - **Streaming output**: rows are written to any `std::io::Write` as they
//!   are computed; only the current row's records are held in memory.
//!
//! - **Pluggable backends**: records come from an [`store::IdentificationStore`],
//!   protein sequences from a [`store::SequenceStore`]. JSON projects and
//!   FASTA files are supported out of the box.
//!
//! - **Legacy layout**: no quoting, optional index column and trailing
//!   delimiter, legacy labels kept verbatim for downstream parsers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mzreport::prelude::*;
//!
//! let store = InMemoryStore::from_json_file("project.json")?;
//! let sequences = ProteinSequences::from_fasta_file("proteins.fasta")?;
//!
//! let config = ExportConfig::new(vec![
//!     PeptideFeature::Accessions,
//!     PeptideFeature::Sequence,
//!     PeptideFeature::AaBefore,
//!     PeptideFeature::Validated,
//! ]);
//!
//! let mut out = std::io::stdout().lock();
//! let stats = PeptideExporter::new(&store)
//!     .with_sequences(&sequences)
//!     .export(&config, &mut out, &mut NoProgress)?;
//! eprintln!("{stats}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`identification`]: read-only protein, peptide and spectrum match records
//! - [`store`]: lookup traits plus in-memory and FASTA-backed implementations
//! - [`features`]: the peptide and PSM column sets
//! - [`export`]: row resolution, cell evaluation and the table writer

#![warn(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod export;
pub mod features;
pub mod identification;
pub mod store;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::export::{
        CancelFlag, Cancellable, ExportConfig, ExportError, ExportStats, LogProgress, NoProgress,
        PeptideExporter, ProgressSink, PsmExporter, TableFormat,
    };
    pub use crate::features::{parse_features, ExportFeature, PeptideFeature, PsmFeature};
    pub use crate::identification::{
        MatchParameter, Peptide, PeptideMatch, ProteinMatch, SpectrumMatch,
    };
    pub use crate::store::{
        IdentificationStore, InMemoryStore, ProteinSequences, SequenceStore, StoreError,
    };
}
