//! # Identification Data Model
//!
//! Read-only views of the records an identification project is made of:
//! protein matches own peptide matches, peptide matches own spectrum matches
//! (PSMs). The exporter never mutates these; they are snapshots handed out by
//! an [`IdentificationStore`](crate::store::IdentificationStore).
//!
//! ## Record Keys
//!
//! Every record is addressed by an opaque, non-empty string key. Spectrum-match
//! keys additionally encode the spectrum file and spectrum title, see
//! [`spectrum_key`].

mod parameter;
mod peptide;
mod scoring;
mod site_map;
mod spectrum;
pub mod spectrum_key;


pub use parameter::{MatchParameter, ProteinInference};
pub use peptide::{ModificationMatch, Peptide, PeptideMatch, ProteinMatch};
pub use scoring::{ModificationScoring, PtmScores, ScoredLocations, SiteConfidence};
pub use site_map::ModificationSiteMap;
pub use spectrum::{
    Charge, PeptideAssumption, Precursor, SpectrumMatch, C13_MASS_DIFFERENCE, PROTON_MASS,
};
