use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::identification::{MatchParameter, PeptideMatch, ProteinMatch, SpectrumMatch};

use super::error::{RecordKind, StoreError};
use super::IdentificationStore;

/// A peptide match together with its validation parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeptideEntry {
    /// The peptide match
    #[serde(flatten)]
    pub peptide_match: PeptideMatch,
    /// Its validation parameter
    #[serde(default)]
    pub parameter: MatchParameter,
}

/// A spectrum match together with its validation parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectrumEntry {
    /// The spectrum match
    #[serde(flatten)]
    pub spectrum_match: SpectrumMatch,
    /// Its validation parameter
    #[serde(default)]
    pub parameter: MatchParameter,
}

/// On-disk layout of a JSON project file
///
/// ```json
/// {
///   "proteins": [{ "key": "P1", "accessions": ["P1"], "peptide_keys": ["PEPTIDEK"] }],
///   "peptides": [{ "key": "PEPTIDEK", "peptide": { "sequence": "PEPTIDEK" }, "parameter": { "validated": true } }],
///   "spectra": []
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Protein matches
    #[serde(default)]
    pub proteins: Vec<ProteinMatch>,
    /// Peptide matches, in export order
    #[serde(default)]
    pub peptides: Vec<PeptideEntry>,
    /// Spectrum matches, in export order
    #[serde(default)]
    pub spectra: Vec<SpectrumEntry>,
}

/// Identification store holding a whole project in memory
///
/// Key listings come back in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    proteins: HashMap<String, ProteinMatch>,
    peptides: HashMap<String, PeptideMatch>,
    peptide_parameters: HashMap<String, MatchParameter>,
    peptide_order: Vec<String>,
    spectra: HashMap<String, SpectrumMatch>,
    spectrum_parameters: HashMap<String, MatchParameter>,
    spectrum_order: Vec<String>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a parsed project file
    pub fn from_project(project: ProjectFile) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for protein in project.proteins {
            store.add_protein(protein)?;
        }
        for entry in project.peptides {
            store.add_peptide(entry.peptide_match, entry.parameter)?;
        }
        for entry in project.spectra {
            store.add_spectrum(entry.spectrum_match, entry.parameter)?;
        }
        debug!(
            "Loaded project: {} proteins, {} peptides, {} spectra",
            store.proteins.len(),
            store.peptides.len(),
            store.spectra.len()
        );
        Ok(store)
    }

    /// Parse a JSON project from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        let project: ProjectFile = serde_json::from_reader(reader)?;
        Self::from_project(project)
    }

    /// Load a JSON project file, gzip-compressed when the name ends in `.gz`
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let compressed = path.extension().is_some_and(|ext| ext == "gz");

        if compressed {
            #[cfg(feature = "gzip")]
            {
                return Self::from_reader(flate2::read::GzDecoder::new(reader));
            }
            #[cfg(not(feature = "gzip"))]
            {
                return Err(StoreError::Backend(format!(
                    "{} is compressed but gzip support is disabled",
                    path.display()
                )));
            }
        }
        Self::from_reader(reader)
    }

    /// Add a protein match
    pub fn add_protein(&mut self, protein: ProteinMatch) -> Result<(), StoreError> {
        check_key(RecordKind::Protein, &protein.key, self.proteins.contains_key(&protein.key))?;
        self.proteins.insert(protein.key.clone(), protein);
        Ok(())
    }

    /// Add a peptide match and its parameter
    pub fn add_peptide(
        &mut self,
        peptide_match: PeptideMatch,
        parameter: MatchParameter,
    ) -> Result<(), StoreError> {
        let key = peptide_match.key.clone();
        check_key(RecordKind::Peptide, &key, self.peptides.contains_key(&key))?;
        self.peptides.insert(key.clone(), peptide_match);
        self.peptide_parameters.insert(key.clone(), parameter);
        self.peptide_order.push(key);
        Ok(())
    }

    /// Add a spectrum match and its parameter
    pub fn add_spectrum(
        &mut self,
        spectrum_match: SpectrumMatch,
        parameter: MatchParameter,
    ) -> Result<(), StoreError> {
        let key = spectrum_match.key.clone();
        check_key(RecordKind::Spectrum, &key, self.spectra.contains_key(&key))?;
        self.spectra.insert(key.clone(), spectrum_match);
        self.spectrum_parameters.insert(key.clone(), parameter);
        self.spectrum_order.push(key);
        Ok(())
    }

    /// Number of protein matches
    pub fn protein_count(&self) -> usize {
        self.proteins.len()
    }

    /// Number of peptide matches
    pub fn peptide_count(&self) -> usize {
        self.peptides.len()
    }

    /// Number of spectrum matches
    pub fn spectrum_count(&self) -> usize {
        self.spectra.len()
    }
}

fn check_key(kind: RecordKind, key: &str, exists: bool) -> Result<(), StoreError> {
    if key.is_empty() {
        return Err(StoreError::Backend(format!("empty {kind} key")));
    }
    if exists {
        return Err(StoreError::DuplicateKey {
            kind,
            key: key.to_string(),
        });
    }
    Ok(())
}

fn lookup<T: Clone>(
    map: &HashMap<String, T>,
    kind: RecordKind,
    key: &str,
) -> Result<T, StoreError> {
    map.get(key)
        .cloned()
        .ok_or_else(|| StoreError::not_found(kind, key))
}

impl IdentificationStore for InMemoryStore {
    fn protein_match(&self, key: &str) -> Result<ProteinMatch, StoreError> {
        lookup(&self.proteins, RecordKind::Protein, key)
    }

    fn peptide_match(&self, key: &str) -> Result<PeptideMatch, StoreError> {
        lookup(&self.peptides, RecordKind::Peptide, key)
    }

    fn peptide_parameter(&self, key: &str) -> Result<MatchParameter, StoreError> {
        lookup(&self.peptide_parameters, RecordKind::PeptideParameter, key)
    }

    fn spectrum_match(&self, key: &str) -> Result<SpectrumMatch, StoreError> {
        lookup(&self.spectra, RecordKind::Spectrum, key)
    }

    fn spectrum_parameter(&self, key: &str) -> Result<MatchParameter, StoreError> {
        lookup(&self.spectrum_parameters, RecordKind::SpectrumParameter, key)
    }

    fn peptide_keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.peptide_order.clone())
    }

    fn spectrum_keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.spectrum_order.clone())
    }
}
