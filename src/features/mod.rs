//! # Export Features
//!
//! The closed set of columns each table kind can carry. A feature has a
//! stable snake_case identifier (used in configuration files and on the
//! command line) and a human-readable title (used in the header row).
//!
//! The registry imposes no column order: tables list their columns in the
//! order the caller requested them.

mod peptide;
mod psm;


use std::fmt;
use std::hash::Hash;

pub use peptide::PeptideFeature;
pub use psm::PsmFeature;

/// Kind of record a table row represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// One row per peptide match
    Peptide,
    /// One row per spectrum match
    Psm,
}

impl RecordType {
    /// Whether `id` names a feature of this record type
    pub fn has_feature(self, id: &str) -> bool {
        match self {
            Self::Peptide => PeptideFeature::from_id(id).is_some(),
            Self::Psm => PsmFeature::from_id(id).is_some(),
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Peptide => Self::Psm,
            Self::Psm => Self::Peptide,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Peptide => f.write_str("peptide"),
            Self::Psm => f.write_str("PSM"),
        }
    }
}

/// A named column kind of one record type
pub trait ExportFeature: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Record type the feature belongs to
    const RECORD_TYPE: RecordType;

    /// Every feature of the set
    const ALL: &'static [Self];

    /// Stable snake_case identifier
    fn id(self) -> &'static str;

    /// Column title
    fn title(self) -> &'static str;

    /// Whether the column is computed from protein sequences
    fn requires_sequences(self) -> bool {
        false
    }

    /// Look a feature up by identifier
    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|feature| feature.id() == id)
    }
}

/// Errors raised while turning feature names into features
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
    /// The name is not a feature of any record type
    #[error("Unknown {record_type} feature: {name}")]
    Unknown {
        /// The requested name
        name: String,
        /// Record type of the table being configured
        record_type: RecordType,
    },

    /// The name is a feature of the other record type
    #[error("'{name}' is a {found} feature and cannot be exported in a {expected} table")]
    WrongRecordType {
        /// The requested name
        name: String,
        /// Record type of the table being configured
        expected: RecordType,
        /// Record type the name belongs to
        found: RecordType,
    },
}

/// Parse feature identifiers for one record type, keeping their order
pub fn parse_features<F, S>(names: &[S]) -> Result<Vec<F>, FeatureError>
where
    F: ExportFeature,
    S: AsRef<str>,
{
    names
        .iter()
        .map(|name| {
            let name = name.as_ref().trim();
            F::from_id(name).ok_or_else(|| {
                let other = F::RECORD_TYPE.other();
                if other.has_feature(name) {
                    FeatureError::WrongRecordType {
                        name: name.to_string(),
                        expected: F::RECORD_TYPE,
                        found: other,
                    }
                } else {
                    FeatureError::Unknown {
                        name: name.to_string(),
                        record_type: F::RECORD_TYPE,
                    }
                }
            })
        })
        .collect()
}
