use std::fmt;

use serde::{Deserialize, Serialize};

/// Protein inference class of a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProteinInference {
    /// Not inferred yet
    #[default]
    NotSet,
    /// Maps to a single protein
    Single,
    /// Maps to related proteins only
    Related,
    /// Maps to related and unrelated proteins
    RelatedAndUnrelated,
    /// Maps to unrelated proteins
    Unrelated,
}

impl ProteinInference {
    /// Label used in exported tables
    pub fn label(self) -> &'static str {
        match self {
            Self::NotSet => "Not Set",
            Self::Single => "Single Protein",
            Self::Related => "Related Proteins",
            Self::RelatedAndUnrelated => "Related and Unrelated Proteins",
            Self::Unrelated => "Unrelated Proteins",
        }
    }
}

impl fmt::Display for ProteinInference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation and scoring state of a peptide or spectrum match
///
/// Kept apart from the match itself: stores serve it from a separate
/// parameter table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchParameter {
    /// Passed validation
    pub validated: bool,
    /// Starred by the user
    pub starred: bool,
    /// Hidden by the user
    pub hidden: bool,
    /// Protein inference class
    pub inference: ProteinInference,
    /// Confidence in percent
    pub confidence: f64,
    /// Probabilistic score
    pub score: f64,
}

impl MatchParameter {
    /// A validated match with the given confidence and score
    pub fn validated(confidence: f64, score: f64) -> Self {
        Self {
            validated: true,
            confidence,
            score,
            ..Default::default()
        }
    }
}
