//! # Identification Stores
//!
//! The exporter reads everything through two traits:
//!
//! - [`IdentificationStore`]: random access to protein, peptide and spectrum
//!   matches and to their validation parameters, plus the stored key listings.
//! - [`SequenceStore`]: protein sequences, used for peptide positions and
//!   flanking residues.
//!
//! Implementations may be disk-backed and slow; the exporter takes care of
//! not fetching the same record twice for one table row. All methods take
//! `&self` so one store can serve concurrent exports.
//!
//! [`InMemoryStore`] and [`ProteinSequences`] are the bundled implementations,
//! loaded from a JSON project file and a FASTA file respectively.

mod error;
mod memory;
mod sequences;


use std::collections::BTreeMap;

use crate::identification::{MatchParameter, PeptideMatch, ProteinMatch, SpectrumMatch};

pub use error::{RecordKind, StoreError};
pub use memory::{InMemoryStore, PeptideEntry, ProjectFile, SpectrumEntry};
pub use sequences::{parse_accession, ProteinSequences};

/// Random-access view of an identification project
pub trait IdentificationStore {
    /// Protein match by key
    fn protein_match(&self, key: &str) -> Result<ProteinMatch, StoreError>;

    /// Peptide match by key
    fn peptide_match(&self, key: &str) -> Result<PeptideMatch, StoreError>;

    /// Validation parameter of a peptide match
    fn peptide_parameter(&self, key: &str) -> Result<MatchParameter, StoreError>;

    /// Spectrum match by key
    fn spectrum_match(&self, key: &str) -> Result<SpectrumMatch, StoreError>;

    /// Validation parameter of a spectrum match
    fn spectrum_parameter(&self, key: &str) -> Result<MatchParameter, StoreError>;

    /// All peptide match keys, in stored order
    fn peptide_keys(&self) -> Result<Vec<String>, StoreError>;

    /// All spectrum match keys, in stored order
    fn spectrum_keys(&self) -> Result<Vec<String>, StoreError>;

    /// Peptide match keys owned by a protein match, in stored order
    fn peptide_keys_for_protein(&self, protein_key: &str) -> Result<Vec<String>, StoreError> {
        self.protein_match(protein_key).map(|protein| protein.peptide_keys)
    }
}

/// Residues surrounding one occurrence of a peptide in a protein
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flanks {
    /// Residues before the peptide (N-terminal side)
    pub before: String,
    /// Residues after the peptide (C-terminal side)
    pub after: String,
}

/// Access to protein sequences
pub trait SequenceStore {
    /// Flanking residues of every occurrence of `peptide` in the protein,
    /// keyed by the 1-based start position of the occurrence
    fn surrounding_residues(
        &self,
        accession: &str,
        peptide: &str,
        flank_width: usize,
    ) -> Result<BTreeMap<usize, Flanks>, StoreError>;
}
