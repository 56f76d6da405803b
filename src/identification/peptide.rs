use serde::{Deserialize, Serialize};

use super::scoring::PtmScores;
use super::site_map::ModificationSiteMap;

/// A modification placed on a peptide sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModificationMatch {
    /// Name of the theoretic modification (e.g., "Oxidation of M")
    pub name: String,

    /// Whether the modification was searched as variable (fixed ones are not reported)
    #[serde(default = "default_variable")]
    pub variable: bool,

    /// 1-based position on the peptide sequence
    pub site: usize,
}

fn default_variable() -> bool {
    true
}

impl ModificationMatch {
    /// Create a variable modification at the given 1-based site
    pub fn variable(name: impl Into<String>, site: usize) -> Self {
        Self {
            name: name.into(),
            variable: true,
            site,
        }
    }

    /// Create a fixed modification at the given 1-based site
    pub fn fixed(name: impl Into<String>, site: usize) -> Self {
        Self {
            name: name.into(),
            variable: false,
            site,
        }
    }
}

/// A theoretic peptide
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Peptide {
    /// Amino acid sequence
    pub sequence: String,

    /// Accessions of the proteins this peptide maps to, in stored order
    #[serde(default)]
    pub parent_proteins: Vec<String>,

    /// Modification occurrences
    #[serde(default)]
    pub modifications: Vec<ModificationMatch>,

    /// Theoretical neutral mass in Da
    #[serde(default)]
    pub mass: f64,
}

impl Peptide {
    /// Create an unmodified peptide
    pub fn new(sequence: impl Into<String>) -> Self {
        Self {
            sequence: sequence.into(),
            ..Default::default()
        }
    }

    /// Parent protein accessions sorted ascending
    pub fn sorted_accessions(&self) -> Vec<&str> {
        let mut accessions: Vec<&str> = self.parent_proteins.iter().map(String::as_str).collect();
        accessions.sort_unstable();
        accessions
    }

    /// Sites of the variable modifications, grouped by modification name
    pub fn site_map(&self) -> ModificationSiteMap {
        ModificationSiteMap::from_modifications(&self.modifications)
    }
}

/// A peptide identified by one or more spectrum matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeptideMatch {
    /// Record key
    pub key: String,

    /// The identified peptide
    pub peptide: Peptide,

    /// Whether the peptide comes from a decoy sequence
    #[serde(default)]
    pub decoy: bool,

    /// Keys of the spectrum matches supporting this peptide
    #[serde(default)]
    pub spectrum_keys: Vec<String>,

    /// PTM localization scores, when they were computed
    #[serde(default)]
    pub ptm_scores: Option<PtmScores>,
}

impl PeptideMatch {
    /// Create a peptide match without supporting spectra
    pub fn new(key: impl Into<String>, peptide: Peptide) -> Self {
        Self {
            key: key.into(),
            peptide,
            decoy: false,
            spectrum_keys: Vec::new(),
            ptm_scores: None,
        }
    }

    /// Number of spectra supporting this peptide
    pub fn spectrum_count(&self) -> usize {
        self.spectrum_keys.len()
    }
}

/// A protein group and the peptides it owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinMatch {
    /// Record key
    pub key: String,

    /// Accessions of the proteins in the group
    pub accessions: Vec<String>,

    /// Keys of the peptide matches of this group, in stored order
    #[serde(default)]
    pub peptide_keys: Vec<String>,
}

impl ProteinMatch {
    /// Whether the accession belongs to this protein group
    pub fn contains(&self, accession: &str) -> bool {
        self.accessions.iter().any(|a| a == accession)
    }
}
