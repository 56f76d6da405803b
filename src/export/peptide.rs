use crate::features::PeptideFeature;
use crate::identification::{MatchParameter, PeptideMatch};

use super::cells;
use super::error::ExportError;
use super::table::{Extractor, RowContext};

/// Built-in extraction rule of a peptide column
pub(super) fn extractor(feature: PeptideFeature) -> Extractor<PeptideMatch> {
    use PeptideFeature as F;

    match feature {
        F::Accessions => Extractor::Match(accessions),
        F::Confidence => Extractor::Parameter(|p| p.confidence.to_string()),
        F::Decoy => Extractor::Match(decoy),
        F::Hidden => Extractor::Parameter(|p| cells::flag(p.hidden)),
        F::LocalizationConfidence => Extractor::Match(localization_confidence),
        F::ProteinInference => Extractor::Parameter(protein_inference),
        F::Position => Extractor::Match(position),
        F::Psms => Extractor::Match(psm_count),
        F::Ptms => Extractor::Match(modifications),
        F::Score => Extractor::Parameter(|p| p.score.to_string()),
        F::Sequence => Extractor::Match(sequence),
        F::Starred => Extractor::Parameter(|p| cells::flag(p.starred)),
        F::AaBefore => Extractor::Match(residues_before),
        F::AaAfter => Extractor::Match(residues_after),
        F::Unique => Extractor::Match(unique),
        F::Validated => Extractor::Parameter(|p| cells::flag(p.validated)),
        F::ValidatedPsms => Extractor::Match(validated_psms),
    }
}

fn accessions(m: &PeptideMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(cells::accessions(&m.peptide))
}

fn decoy(m: &PeptideMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(cells::flag(m.decoy))
}

// Segments are concatenated without a separator in legacy peptide reports.
fn localization_confidence(m: &PeptideMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    let segments = cells::localization_segments(&m.peptide.site_map(), m.ptm_scores.as_ref());
    Ok(segments.concat())
}

fn protein_inference(p: &MatchParameter) -> String {
    p.inference.to_string()
}

fn position(m: &PeptideMatch, context: &RowContext<'_>) -> Result<String, ExportError> {
    cells::positions(&m.peptide, context)
}

fn psm_count(m: &PeptideMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(m.spectrum_count().to_string())
}

fn modifications(m: &PeptideMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(cells::modification_summary(&m.peptide.site_map()))
}

fn sequence(m: &PeptideMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(m.peptide.sequence.clone())
}

fn residues_before(m: &PeptideMatch, context: &RowContext<'_>) -> Result<String, ExportError> {
    cells::flanking(&m.peptide, context, true)
}

fn residues_after(m: &PeptideMatch, context: &RowContext<'_>) -> Result<String, ExportError> {
    cells::flanking(&m.peptide, context, false)
}

/// Unique to the parent protein group, or to a single protein without one
fn unique(m: &PeptideMatch, context: &RowContext<'_>) -> Result<String, ExportError> {
    let mut accessions = m.peptide.sorted_accessions();
    accessions.dedup();

    let unique = match context.protein {
        Some(protein) => {
            !accessions.is_empty() && accessions.iter().all(|accession| protein.contains(accession))
        }
        None => accessions.len() == 1,
    };
    Ok(cells::flag(unique))
}

fn validated_psms(m: &PeptideMatch, context: &RowContext<'_>) -> Result<String, ExportError> {
    let mut validated = 0usize;
    for key in &m.spectrum_keys {
        if context.store.spectrum_parameter(key)?.validated {
            validated += 1;
        }
    }
    Ok(validated.to_string())
}
