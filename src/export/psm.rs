use crate::features::PsmFeature;
use crate::identification::{spectrum_key, ModificationScoring, ScoredLocations, SpectrumMatch};

use super::cells;
use super::error::ExportError;
use super::table::{Extractor, RowContext};

/// Built-in extraction rule of a PSM column
pub(super) fn extractor(feature: PsmFeature) -> Extractor<SpectrumMatch> {
    use PsmFeature as F;

    match feature {
        F::Ptms => Extractor::Match(modifications),
        F::AScore => Extractor::Match(a_score),
        F::DScore => Extractor::Match(d_score),
        F::Accessions => Extractor::Match(accessions),
        F::Confidence => Extractor::Parameter(|p| p.confidence.to_string()),
        F::Decoy => Extractor::Match(decoy),
        F::Hidden => Extractor::Parameter(|p| cells::flag(p.hidden)),
        F::IdentificationCharge => Extractor::Match(identification_charge),
        F::Isotope => Extractor::Match(isotope),
        F::LocalizationConfidence => Extractor::Match(localization_confidence),
        F::Mz => Extractor::Match(precursor_mz),
        F::MzError => Extractor::Match(mz_error),
        F::Rt => Extractor::Match(retention_time),
        F::Score => Extractor::Parameter(|p| p.score.to_string()),
        F::Sequence => Extractor::Match(sequence),
        F::SpectrumCharge => Extractor::Match(spectrum_charge),
        F::SpectrumFile => Extractor::Key(spectrum_file),
        F::SpectrumNumber => Extractor::Match(scan_number),
        F::SpectrumTitle => Extractor::Key(spectrum_title),
        F::Starred => Extractor::Parameter(|p| cells::flag(p.starred)),
        F::TheoreticalMass => Extractor::Match(theoretical_mass),
        F::Validated => Extractor::Parameter(|p| cells::flag(p.validated)),
    }
}

fn modifications(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(cells::modification_summary(&m.best_assumption.peptide.site_map()))
}

fn a_score_locations(scoring: &ModificationScoring) -> Option<&ScoredLocations> {
    scoring.a_score.as_ref()
}

fn delta_score_locations(scoring: &ModificationScoring) -> Option<&ScoredLocations> {
    scoring.delta_score.as_ref()
}

fn a_score(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(cells::site_score_summary(
        &m.best_assumption.peptide.site_map(),
        m.ptm_scores.as_ref(),
        a_score_locations,
    ))
}

fn d_score(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(cells::site_score_summary(
        &m.best_assumption.peptide.site_map(),
        m.ptm_scores.as_ref(),
        delta_score_locations,
    ))
}

fn accessions(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(cells::accessions(&m.best_assumption.peptide))
}

fn decoy(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(cells::flag(m.best_assumption.decoy))
}

fn identification_charge(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(m.best_assumption.charge.to_string())
}

fn isotope(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(m.best_assumption.isotope_number(m.precursor.mz).to_string())
}

fn localization_confidence(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    let segments = cells::localization_segments(
        &m.best_assumption.peptide.site_map(),
        m.ptm_scores.as_ref(),
    );
    Ok(segments.join(", "))
}

fn precursor_mz(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(m.precursor.mz.to_string())
}

fn mz_error(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(m.best_assumption.mz_error_ppm(m.precursor.mz).to_string())
}

fn retention_time(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(m.precursor.rt.to_string())
}

fn sequence(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(m.best_assumption.peptide.sequence.clone())
}

fn spectrum_charge(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(m.precursor.possible_charges_string())
}

fn spectrum_file(key: &str, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(spectrum_key::file(key).to_string())
}

fn scan_number(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(m.scan_number.clone())
}

fn spectrum_title(key: &str, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(spectrum_key::title(key).to_string())
}

fn theoretical_mass(m: &SpectrumMatch, _: &RowContext<'_>) -> Result<String, ExportError> {
    Ok(m.best_assumption.peptide.mass.to_string())
}
