use std::fmt;

/// Kind of record a lookup was made for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Protein match
    Protein,
    /// Peptide match
    Peptide,
    /// Peptide match parameter
    PeptideParameter,
    /// Spectrum match
    Spectrum,
    /// Spectrum match parameter
    SpectrumParameter,
    /// Protein sequence
    Sequence,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Protein => "protein match",
            Self::Peptide => "peptide match",
            Self::PeptideParameter => "peptide parameter",
            Self::Spectrum => "spectrum match",
            Self::SpectrumParameter => "spectrum parameter",
            Self::Sequence => "protein sequence",
        };
        f.write_str(name)
    }
}

/// Errors raised by identification and sequence stores
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key does not exist in the store
    #[error("{kind} not found: {key}")]
    NotFound {
        /// Kind of record looked up
        kind: RecordKind,
        /// The missing key
        key: String,
    },

    /// The backend failed to serve a request
    #[error("Store backend error: {0}")]
    Backend(String),

    /// I/O error while loading store content
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error deserializing a project file
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid FASTA content
    #[error("Invalid FASTA at line {line}: {message}")]
    InvalidFasta {
        /// 1-based line number
        line: usize,
        /// What is wrong with it
        message: String,
    },

    /// The same key is defined twice
    #[error("Duplicate {kind} key: {key}")]
    DuplicateKey {
        /// Kind of record
        kind: RecordKind,
        /// The duplicated key
        key: String,
    },
}

impl StoreError {
    /// Create a not-found error
    pub fn not_found(kind: RecordKind, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// Whether the error means the key does not exist, as opposed to a backend failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
