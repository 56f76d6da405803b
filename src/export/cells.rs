//! Rendering shared by the peptide and PSM columns

use crate::identification::{
    ModificationScoring, ModificationSiteMap, Peptide, PtmScores, ScoredLocations,
};
use crate::store::Flanks;

use super::error::ExportError;
use super::table::RowContext;

pub(super) fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

pub(super) fn accessions(peptide: &Peptide) -> String {
    peptide.sorted_accessions().join(", ")
}

/// `name` or `name (count)` per variable modification, sorted by name
pub(super) fn modification_summary(sites: &ModificationSiteMap) -> String {
    sites
        .iter()
        .map(|(name, positions)| match positions.len() {
            0 | 1 => name.to_string(),
            count => format!("{name} ({count})"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// One `" (<label>)"` segment per variable modification, sorted by name
pub(super) fn localization_segments(
    sites: &ModificationSiteMap,
    scores: Option<&PtmScores>,
) -> Vec<String> {
    sites
        .names()
        .map(|name| {
            let confidence = scores
                .map(|scores| scores.site_confidence(name))
                .unwrap_or_default();
            format!(" ({confidence})")
        })
        .collect()
}

/// `name (<sites>: <score>)` per variable modification, empty without scores
pub(super) fn site_score_summary(
    sites: &ModificationSiteMap,
    scores: Option<&PtmScores>,
    pick: fn(&ModificationScoring) -> Option<&ScoredLocations>,
) -> String {
    let Some(scores) = scores else {
        return String::new();
    };

    sites
        .names()
        .map(|name| match scores.scoring(name).and_then(pick) {
            Some(locations) => {
                let positions = locations
                    .sorted_sites()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{name} ({positions}: {})", locations.score)
            }
            None => format!("{name} (Not Scored)"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Occurrences of the peptide in each of its proteins, sorted by accession
fn occurrences<T>(
    peptide: &Peptide,
    context: &RowContext<'_>,
    render: impl Fn(usize, &Flanks) -> T,
) -> Result<Vec<Vec<T>>, ExportError> {
    let sequences = context.sequences()?;
    peptide
        .sorted_accessions()
        .into_iter()
        .map(|accession| -> Result<Vec<T>, ExportError> {
            let found = sequences.surrounding_residues(
                accession,
                &peptide.sequence,
                context.flank_width,
            )?;
            Ok(found
                .iter()
                .map(|(&start, flanks)| render(start, flanks))
                .collect())
        })
        .collect()
}

/// Start positions per protein, each group closed by `"; "`: `1, 40; 12; `
pub(super) fn positions(peptide: &Peptide, context: &RowContext<'_>) -> Result<String, ExportError> {
    let groups = occurrences(peptide, context, |start, _| start.to_string())?;
    let mut cell = String::new();
    for starts in &groups {
        cell.push_str(&starts.join(", "));
        cell.push_str("; ");
    }
    Ok(cell)
}

/// Flanking residues per protein: `K|R;M`
pub(super) fn flanking(
    peptide: &Peptide,
    context: &RowContext<'_>,
    before: bool,
) -> Result<String, ExportError> {
    let groups = occurrences(peptide, context, |_, flanks| {
        if before {
            flanks.before.clone()
        } else {
            flanks.after.clone()
        }
    })?;
    Ok(groups
        .iter()
        .map(|windows| windows.join("|"))
        .collect::<Vec<_>>()
        .join(";"))
}
