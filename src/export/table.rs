use std::collections::HashMap;
use std::fmt;

use crate::features::{ExportFeature, PeptideFeature, PsmFeature};
use crate::identification::{MatchParameter, PeptideMatch, ProteinMatch, SpectrumMatch};
use crate::store::{IdentificationStore, SequenceStore, StoreError};

use super::error::ExportError;
use super::{peptide, psm, resolver};

/// Collaborators shared by every cell of a run
#[derive(Clone, Copy)]
pub struct RowContext<'a> {
    /// Identification lookups
    pub store: &'a dyn IdentificationStore,

    /// Protein sequences for position and flanking columns
    pub sequences: Option<&'a dyn SequenceStore>,

    /// Residues reported on each side of a peptide
    pub flank_width: usize,

    /// Parent protein match of a protein-scoped peptide export
    pub protein: Option<&'a ProteinMatch>,
}

impl<'a> RowContext<'a> {
    /// The sequence store, or a configuration error when none was given
    pub fn sequences(&self) -> Result<&'a dyn SequenceStore, ExportError> {
        self.sequences.ok_or_else(|| {
            ExportError::InvalidConfig("column requires protein sequences".to_string())
        })
    }
}

impl fmt::Debug for RowContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowContext")
            .field("sequences", &self.sequences.is_some())
            .field("flank_width", &self.flank_width)
            .field("protein", &self.protein.map(|p| p.key.as_str()))
            .finish()
    }
}

/// How a column derives its cell text
///
/// `Key` needs nothing but the record key, `Match` the match snapshot and
/// `Parameter` the validation parameter. The evaluator only fetches what the
/// requested extractor needs.
pub enum Extractor<M> {
    /// Derived from the record key alone
    Key(fn(&str, &RowContext<'_>) -> Result<String, ExportError>),
    /// Derived from the match snapshot
    Match(fn(&M, &RowContext<'_>) -> Result<String, ExportError>),
    /// Derived from the validation parameter
    Parameter(fn(&MatchParameter) -> String),
}

impl<M> Clone for Extractor<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Extractor<M> {}

impl<M> fmt::Debug for Extractor<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(_) => f.write_str("Extractor::Key"),
            Self::Match(_) => f.write_str("Extractor::Match"),
            Self::Parameter(_) => f.write_str("Extractor::Parameter"),
        }
    }
}

/// A table kind: its features, its match snapshot and how rows are found
pub trait ExportRecord {
    /// Column set of the table
    type Feature: ExportFeature;

    /// Match snapshot a row is derived from
    type Match;

    /// Whether rows can be scoped to a parent protein match
    const SUPPORTS_PARENT: bool;

    /// Fetch the match snapshot of a row
    fn fetch_match(store: &dyn IdentificationStore, key: &str) -> Result<Self::Match, StoreError>;

    /// Fetch the validation parameter of a row
    fn fetch_parameter(
        store: &dyn IdentificationStore,
        key: &str,
    ) -> Result<MatchParameter, StoreError>;

    /// Row keys to export, in output order, when no explicit keys are given
    fn default_rows(
        store: &dyn IdentificationStore,
        parent: Option<&ProteinMatch>,
    ) -> Result<Vec<String>, ExportError>;

    /// Built-in extraction rule of a feature
    fn extractor(feature: Self::Feature) -> Extractor<Self::Match>;
}

/// Peptide table: one row per peptide match
#[derive(Debug, Clone, Copy)]
pub struct PeptideTable;

/// PSM table: one row per spectrum match
#[derive(Debug, Clone, Copy)]
pub struct PsmTable;

impl ExportRecord for PeptideTable {
    type Feature = PeptideFeature;
    type Match = PeptideMatch;

    const SUPPORTS_PARENT: bool = true;

    fn fetch_match(store: &dyn IdentificationStore, key: &str) -> Result<PeptideMatch, StoreError> {
        store.peptide_match(key)
    }

    fn fetch_parameter(
        store: &dyn IdentificationStore,
        key: &str,
    ) -> Result<MatchParameter, StoreError> {
        store.peptide_parameter(key)
    }

    fn default_rows(
        store: &dyn IdentificationStore,
        parent: Option<&ProteinMatch>,
    ) -> Result<Vec<String>, ExportError> {
        resolver::peptide_rows(store, parent)
    }

    fn extractor(feature: PeptideFeature) -> Extractor<PeptideMatch> {
        peptide::extractor(feature)
    }
}

impl ExportRecord for PsmTable {
    type Feature = PsmFeature;
    type Match = SpectrumMatch;

    const SUPPORTS_PARENT: bool = false;

    fn fetch_match(store: &dyn IdentificationStore, key: &str) -> Result<SpectrumMatch, StoreError> {
        store.spectrum_match(key)
    }

    fn fetch_parameter(
        store: &dyn IdentificationStore,
        key: &str,
    ) -> Result<MatchParameter, StoreError> {
        store.spectrum_parameter(key)
    }

    fn default_rows(
        store: &dyn IdentificationStore,
        _parent: Option<&ProteinMatch>,
    ) -> Result<Vec<String>, ExportError> {
        resolver::psm_rows(store)
    }

    fn extractor(feature: PsmFeature) -> Extractor<SpectrumMatch> {
        psm::extractor(feature)
    }
}

/// Extraction rules of a table, by feature
///
/// A feature without a rule is exported as a placeholder cell.
pub struct FeatureTable<R: ExportRecord> {
    extractors: HashMap<R::Feature, Extractor<R::Match>>,
}

impl<R: ExportRecord> FeatureTable<R> {
    /// Every feature mapped to its built-in rule
    pub fn standard() -> Self {
        let extractors = <R::Feature as ExportFeature>::ALL
            .iter()
            .map(|&feature| (feature, R::extractor(feature)))
            .collect();
        Self { extractors }
    }

    /// A table without any rule
    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Replace the rule of a feature
    pub fn with(mut self, feature: R::Feature, extractor: Extractor<R::Match>) -> Self {
        self.extractors.insert(feature, extractor);
        self
    }

    /// Remove the rule of a feature
    pub fn without(mut self, feature: R::Feature) -> Self {
        self.extractors.remove(&feature);
        self
    }

    /// Rule of a feature
    pub fn get(&self, feature: R::Feature) -> Option<Extractor<R::Match>> {
        self.extractors.get(&feature).copied()
    }

    /// Number of features with a rule
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Whether no feature has a rule
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl<R: ExportRecord> Default for FeatureTable<R> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<R: ExportRecord> fmt::Debug for FeatureTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.extractors.keys().map(|feature| feature.id()).collect();
        ids.sort_unstable();
        f.debug_struct("FeatureTable").field("features", &ids).finish()
    }
}
