use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::error::{RecordKind, StoreError};
use super::{Flanks, SequenceStore};

/// Protein sequences indexed by accession
#[derive(Debug, Clone, Default)]
pub struct ProteinSequences {
    sequences: HashMap<String, String>,
}

impl ProteinSequences {
    /// Create an empty sequence store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a protein sequence
    pub fn insert(&mut self, accession: impl Into<String>, sequence: &str) {
        self.sequences
            .insert(accession.into(), sequence.to_ascii_uppercase());
    }

    /// Sequence of a protein
    pub fn get(&self, accession: &str) -> Option<&str> {
        self.sequences.get(accession).map(String::as_str)
    }

    /// Number of proteins
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Whether no sequence is loaded
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Load a FASTA file
    pub fn from_fasta_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let file = File::open(path)?;
        Self::from_fasta_reader(BufReader::new(file))
    }

    /// Parse FASTA content
    ///
    /// Accessions are taken from the header, see [`parse_accession`].
    /// Whitespace and a terminal `*` are stripped from sequence lines.
    pub fn from_fasta_reader<R: BufRead>(reader: R) -> Result<Self, StoreError> {
        let mut store = Self::new();
        let mut current: Option<(String, String)> = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            if let Some(header) = line.strip_prefix('>') {
                if let Some((accession, sequence)) = current.take() {
                    store.push(accession, sequence)?;
                }
                let accession = parse_accession(header);
                if accession.is_empty() {
                    return Err(StoreError::InvalidFasta {
                        line: line_number,
                        message: "empty header".to_string(),
                    });
                }
                current = Some((accession.to_string(), String::new()));
                continue;
            }

            let Some((_, sequence)) = current.as_mut() else {
                return Err(StoreError::InvalidFasta {
                    line: line_number,
                    message: "sequence before the first header".to_string(),
                });
            };
            for residue in line.chars().filter(|c| !c.is_whitespace() && *c != '*') {
                if !residue.is_ascii_alphabetic() {
                    return Err(StoreError::InvalidFasta {
                        line: line_number,
                        message: format!("'{residue}' is not an amino acid"),
                    });
                }
                sequence.push(residue.to_ascii_uppercase());
            }
        }
        if let Some((accession, sequence)) = current {
            store.push(accession, sequence)?;
        }

        debug!("Loaded {} protein sequences", store.len());
        Ok(store)
    }

    fn push(&mut self, accession: String, sequence: String) -> Result<(), StoreError> {
        if self.sequences.contains_key(&accession) {
            return Err(StoreError::DuplicateKey {
                kind: RecordKind::Sequence,
                key: accession,
            });
        }
        self.sequences.insert(accession, sequence);
        Ok(())
    }
}

/// Accession of a FASTA header (without the leading `>`)
///
/// UniProt headers (`sp|P12345|NAME_HUMAN ...`, `tr|...`) yield the middle
/// field, anything else the first whitespace-separated token.
pub fn parse_accession(header: &str) -> &str {
    let token = header.split_whitespace().next().unwrap_or("");
    let mut fields = token.split('|');
    match (fields.next(), fields.next()) {
        (Some("sp" | "tr"), Some(accession)) if !accession.is_empty() => accession,
        _ => token,
    }
}

impl SequenceStore for ProteinSequences {
    fn surrounding_residues(
        &self,
        accession: &str,
        peptide: &str,
        flank_width: usize,
    ) -> Result<BTreeMap<usize, Flanks>, StoreError> {
        let protein = self
            .get(accession)
            .ok_or_else(|| StoreError::not_found(RecordKind::Sequence, accession))?
            .as_bytes();
        let peptide = peptide.to_ascii_uppercase();
        let peptide = peptide.as_bytes();

        let mut occurrences = BTreeMap::new();
        if peptide.is_empty() || peptide.len() > protein.len() {
            return Ok(occurrences);
        }

        // overlapping occurrences count separately
        for (start, window) in protein.windows(peptide.len()).enumerate() {
            if window != peptide {
                continue;
            }
            let end = start + peptide.len();
            let before = &protein[start.saturating_sub(flank_width)..start];
            let after = &protein[end..end.saturating_add(flank_width).min(protein.len())];
            occurrences.insert(
                start + 1,
                Flanks {
                    before: String::from_utf8_lossy(before).into_owned(),
                    after: String::from_utf8_lossy(after).into_owned(),
                },
            );
        }
        Ok(occurrences)
    }
}
