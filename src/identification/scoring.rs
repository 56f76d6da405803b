use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Confidence in the localization of a modification site
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteConfidence {
    /// No localization score available
    #[default]
    NotScored,
    /// Localization is no better than random
    Random,
    /// Localization is doubtful
    Doubtful,
    /// Localization is confident
    Confident,
    /// Localization is very confident
    VeryConfident,
}

impl SiteConfidence {
    /// Label used in exported tables
    pub fn label(self) -> &'static str {
        match self {
            Self::NotScored => "Not Scored",
            Self::Random => "Random",
            // legacy spelling, downstream parsers match on it
            Self::Doubtful => "Doubtfull",
            Self::Confident => "Confident",
            Self::VeryConfident => "Very Confident",
        }
    }
}

impl fmt::Display for SiteConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Best-scoring site combination for one modification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLocations {
    /// 1-based sites
    pub sites: Vec<usize>,
    /// Score of this site combination
    pub score: f64,
}

impl ScoredLocations {
    /// Create a scored site combination
    pub fn new(sites: Vec<usize>, score: f64) -> Self {
        Self { sites, score }
    }

    /// Sites sorted ascending
    pub fn sorted_sites(&self) -> Vec<usize> {
        let mut sites = self.sites.clone();
        sites.sort_unstable();
        sites
    }
}

/// Localization scoring of one modification on one match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModificationScoring {
    /// Site confidence classification
    #[serde(default)]
    pub site_confidence: SiteConfidence,

    /// Best A-score site combination
    #[serde(default)]
    pub a_score: Option<ScoredLocations>,

    /// Best delta-score site combination
    #[serde(default)]
    pub delta_score: Option<ScoredLocations>,
}

impl ModificationScoring {
    /// Scoring with only a site confidence
    pub fn with_confidence(site_confidence: SiteConfidence) -> Self {
        Self {
            site_confidence,
            ..Default::default()
        }
    }
}

/// PTM scoring annotation attached to a peptide or spectrum match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PtmScores {
    scorings: BTreeMap<String, ModificationScoring>,
}

impl PtmScores {
    /// Create an empty annotation
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the scoring of a modification
    pub fn insert(&mut self, modification: impl Into<String>, scoring: ModificationScoring) {
        self.scorings.insert(modification.into(), scoring);
    }

    /// Scoring of a modification, if it was scored
    pub fn scoring(&self, modification: &str) -> Option<&ModificationScoring> {
        self.scorings.get(modification)
    }

    /// Site confidence of a modification, `NotScored` when absent
    pub fn site_confidence(&self, modification: &str) -> SiteConfidence {
        self.scoring(modification)
            .map(|s| s.site_confidence)
            .unwrap_or_default()
    }
}
