use super::*;
use crate::features::{PeptideFeature, PsmFeature};
use crate::identification::{
    Charge, MatchParameter, ModificationMatch, ModificationScoring, Peptide, PeptideAssumption,
    PeptideMatch, ProteinMatch, PtmScores, ScoredLocations, SiteConfidence, SpectrumMatch,
    C13_MASS_DIFFERENCE, PROTON_MASS,
};
use crate::store::{IdentificationStore, InMemoryStore, ProteinSequences, StoreError};
use std::cell::Cell;

// ============================================================================
// Fixtures
// ============================================================================

fn peptide(key: &str, accessions: &[&str], decoy: bool) -> PeptideMatch {
    let mut peptide = Peptide::new(key);
    peptide.parent_proteins = accessions.iter().map(|a| a.to_string()).collect();
    let mut peptide_match = PeptideMatch::new(key, peptide);
    peptide_match.decoy = decoy;
    peptide_match
}

fn spectrum(key: &str, sequence: &str) -> SpectrumMatch {
    let mut peptide = Peptide::new(sequence);
    peptide.parent_proteins = vec!["P1".to_string()];
    peptide.mass = 1000.0;
    SpectrumMatch::new(
        key,
        PeptideAssumption {
            peptide,
            charge: Charge(2),
            decoy: false,
        },
    )
}

/// Two peptides: `A2, Q1` target and `B3` decoy
fn two_peptide_store() -> InMemoryStore {
    let mut store = InMemoryStore::new();
    store
        .add_peptide(peptide("p1", &["Q1", "A2"], false), MatchParameter::validated(99.0, 0.1))
        .unwrap();
    store
        .add_peptide(peptide("p2", &["B3"], true), MatchParameter::default())
        .unwrap();
    store
}

fn psm_store(keys: &[&str]) -> InMemoryStore {
    let mut store = InMemoryStore::new();
    for key in keys {
        store
            .add_spectrum(spectrum(key, "PEPK"), MatchParameter::default())
            .unwrap();
    }
    store
}

fn export_peptides(
    store: &dyn IdentificationStore,
    config: &ExportConfig<PeptideFeature>,
) -> Result<String, ExportError> {
    let mut out = Vec::new();
    PeptideExporter::new(store).export(config, &mut out, &mut NoProgress)?;
    Ok(String::from_utf8(out).unwrap())
}

fn export_psms(
    store: &dyn IdentificationStore,
    config: &ExportConfig<PsmFeature>,
) -> Result<String, ExportError> {
    let mut out = Vec::new();
    PsmExporter::new(store).export(config, &mut out, &mut NoProgress)?;
    Ok(String::from_utf8(out).unwrap())
}

/// Counts store fetches of matches and parameters
struct CountingStore {
    inner: InMemoryStore,
    matches: Cell<usize>,
    parameters: Cell<usize>,
}

impl CountingStore {
    fn new(inner: InMemoryStore) -> Self {
        Self {
            inner,
            matches: Cell::new(0),
            parameters: Cell::new(0),
        }
    }
}

impl IdentificationStore for CountingStore {
    fn protein_match(&self, key: &str) -> Result<ProteinMatch, StoreError> {
        self.inner.protein_match(key)
    }

    fn peptide_match(&self, key: &str) -> Result<PeptideMatch, StoreError> {
        self.matches.set(self.matches.get() + 1);
        self.inner.peptide_match(key)
    }

    fn peptide_parameter(&self, key: &str) -> Result<MatchParameter, StoreError> {
        self.parameters.set(self.parameters.get() + 1);
        self.inner.peptide_parameter(key)
    }

    fn spectrum_match(&self, key: &str) -> Result<SpectrumMatch, StoreError> {
        self.matches.set(self.matches.get() + 1);
        self.inner.spectrum_match(key)
    }

    fn spectrum_parameter(&self, key: &str) -> Result<MatchParameter, StoreError> {
        self.parameters.set(self.parameters.get() + 1);
        self.inner.spectrum_parameter(key)
    }

    fn peptide_keys(&self) -> Result<Vec<String>, StoreError> {
        self.inner.peptide_keys()
    }

    fn spectrum_keys(&self) -> Result<Vec<String>, StoreError> {
        self.inner.spectrum_keys()
    }
}

/// Records every progress call; optionally cancels after `cancel_after` rows
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
    advanced: usize,
    cancel_after: Option<usize>,
}

impl ProgressSink for Recorder {
    fn set_indeterminate(&mut self, indeterminate: bool) {
        self.events.push(format!("indeterminate={indeterminate}"));
    }

    fn set_total(&mut self, total: usize) {
        self.events.push(format!("total={total}"));
    }

    fn advance(&mut self) {
        self.advanced += 1;
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_after.is_some_and(|rows| self.advanced >= rows)
    }
}

// ============================================================================
// Table layout
// ============================================================================

#[test]
fn test_accession_decoy_csv() {
    let store = two_peptide_store();
    let mut format = TableFormat::csv();
    format.trailing_delimiter = false;
    let config = ExportConfig::new(vec![PeptideFeature::Accessions, PeptideFeature::Decoy])
        .with_format(format);

    let table = export_peptides(&store, &config).unwrap();
    assert_eq!(table, "Accession,Decoy\nA2, Q1,0\nB3,1\n");
}

#[test]
fn test_legacy_trailing_delimiter() {
    let store = two_peptide_store();
    let config = ExportConfig::new(vec![PeptideFeature::Accessions, PeptideFeature::Decoy])
        .with_format(TableFormat::csv());

    let table = export_peptides(&store, &config).unwrap();
    assert_eq!(table, "Accession,Decoy\nA2, Q1,0,\nB3,1,\n");
}

#[test]
fn test_index_column() {
    let store = two_peptide_store();
    let mut format = TableFormat::tsv();
    format.include_index = true;
    format.trailing_delimiter = false;
    let config = ExportConfig::new(vec![PeptideFeature::Sequence, PeptideFeature::Validated])
        .with_format(format);

    let table = export_peptides(&store, &config).unwrap();
    assert_eq!(table, "\tSequence\tValidated\n1\tp1\t1\n2\tp2\t0\n");

    let header_cells = table.lines().next().unwrap().split('\t').count();
    assert_eq!(header_cells, config.features.len() + 1);
}

#[test]
fn test_no_header_custom_terminator() {
    let store = two_peptide_store();
    let mut format = TableFormat::csv();
    format.include_header = false;
    format.trailing_delimiter = false;
    format.line_terminator = "\r\n".to_string();
    let config = ExportConfig::new(vec![PeptideFeature::Decoy]).with_format(format);

    let table = export_peptides(&store, &config).unwrap();
    assert_eq!(table, "0\r\n1\r\n");
}

#[test]
fn test_invalid_format() {
    let store = two_peptide_store();
    let mut format = TableFormat::csv();
    format.delimiter = String::new();
    let config = ExportConfig::new(vec![PeptideFeature::Decoy]).with_format(format);

    let err = export_peptides(&store, &config).unwrap_err();
    assert!(matches!(err, ExportError::InvalidConfig(_)));
    assert!(err.is_config_error());
}

#[test]
fn test_writer_state_machine() {
    let format = TableFormat::csv();
    let mut out = Vec::new();
    let mut writer = TableWriter::new(&mut out, &format);

    assert!(matches!(
        writer.write_row(&["a"]),
        Err(ExportError::InvalidState(_))
    ));
    writer.write_header(["A", "B"]).unwrap();
    assert!(writer.write_header(["A"]).is_err());
    writer.write_row(&["1", "2"]).unwrap();
    assert_eq!(writer.finish().unwrap(), 1);
    assert!(writer.write_row(&["3", "4"]).is_err());
    assert!(writer.finish().is_err());

    assert_eq!(String::from_utf8(out).unwrap(), "A,B\n1,2,\n");
}

// ============================================================================
// Row resolution
// ============================================================================

#[test]
fn test_explicit_keys_verbatim() {
    let store = two_peptide_store();
    let mut format = TableFormat::csv();
    format.include_header = false;
    format.trailing_delimiter = false;
    let config = ExportConfig::new(vec![PeptideFeature::Sequence])
        .with_format(format)
        .with_keys(vec!["p2".to_string(), "p1".to_string(), "p2".to_string()]);

    let table = export_peptides(&store, &config).unwrap();
    assert_eq!(table, "p2\np1\np2\n");
}

#[test]
fn test_empty_explicit_key() {
    let store = two_peptide_store();
    let config = ExportConfig::new(vec![PeptideFeature::Sequence])
        .with_keys(vec!["p1".to_string(), String::new()]);

    let mut out = Vec::new();
    let err = PeptideExporter::new(&store)
        .export(&config, &mut out, &mut NoProgress)
        .unwrap_err();
    assert!(matches!(err, ExportError::InvalidConfig(_)));
    assert!(out.is_empty());
}

#[test]
fn test_parent_protein_scope() {
    let mut store = two_peptide_store();
    store
        .add_peptide(peptide("p3", &["Q1"], false), MatchParameter::default())
        .unwrap();
    store
        .add_protein(ProteinMatch {
            key: "Q1".to_string(),
            accessions: vec!["Q1".to_string()],
            peptide_keys: vec!["p3".to_string(), "p1".to_string()],
        })
        .unwrap();

    let mut format = TableFormat::csv();
    format.trailing_delimiter = false;
    let config = ExportConfig::new(vec![PeptideFeature::Sequence, PeptideFeature::Unique])
        .with_format(format)
        .with_parent("Q1");

    let table = export_peptides(&store, &config).unwrap();
    // p1 also maps to A2, outside the group
    assert_eq!(table, "Sequence,Unique\np3,1\np1,0\n");
}

#[test]
fn test_unknown_parent() {
    let store = two_peptide_store();
    let config = ExportConfig::new(vec![PeptideFeature::Sequence]).with_parent("nope");

    let mut out = Vec::new();
    let err = PeptideExporter::new(&store)
        .export(&config, &mut out, &mut NoProgress)
        .unwrap_err();
    assert!(matches!(err, ExportError::UnknownParent(ref key) if key == "nope"));
    assert!(out.is_empty());
}

#[test]
fn test_parent_rejected_for_psms() {
    let store = psm_store(&["a.mgf_cus_1"]);
    let config = ExportConfig::new(vec![PsmFeature::SpectrumTitle]).with_parent("P1");

    let err = export_psms(&store, &config).unwrap_err();
    assert!(matches!(err, ExportError::InvalidConfig(_)));
}

#[test]
fn test_psm_rows_grouped_by_file() {
    let store = psm_store(&["a.mgf_cus_1", "a.mgf_cus_2", "b.mgf_cus_1", "a.mgf_cus_3"]);
    let mut format = TableFormat::csv();
    format.include_header = false;
    format.trailing_delimiter = false;
    let config = ExportConfig::new(vec![PsmFeature::SpectrumFile, PsmFeature::SpectrumTitle])
        .with_format(format);

    let table = export_psms(&store, &config).unwrap();
    assert_eq!(table, "a.mgf,1\na.mgf,2\na.mgf,3\nb.mgf,1\n");
}

#[test]
fn test_partition_by_file() {
    let keys = ["f2_cus_x", "f1_cus_a", "f2_cus_y", "f1_cus_b", "nofile"]
        .iter()
        .map(|k| k.to_string())
        .collect();
    assert_eq!(
        partition_by_file(keys),
        vec!["f2_cus_x", "f2_cus_y", "f1_cus_a", "f1_cus_b", "nofile"]
    );
}

#[test]
fn test_missing_record_aborts() {
    let store = two_peptide_store();
    let config = ExportConfig::new(vec![PeptideFeature::Sequence])
        .with_keys(vec!["p1".to_string(), "missing".to_string()]);

    let err = export_peptides(&store, &config).unwrap_err();
    match err {
        ExportError::StoreError(e) => assert!(e.is_not_found()),
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn test_row_fetches_memoized() {
    let store = CountingStore::new(two_peptide_store());
    let config = ExportConfig::new(vec![
        PeptideFeature::Accessions,
        PeptideFeature::Score,
        PeptideFeature::Decoy,
        PeptideFeature::Confidence,
        PeptideFeature::Sequence,
        PeptideFeature::Validated,
    ]);

    let mut out = Vec::new();
    let stats = PeptideExporter::new(&store)
        .export(&config, &mut out, &mut NoProgress)
        .unwrap();

    assert_eq!(store.matches.get(), 2);
    assert_eq!(store.parameters.get(), 2);
    assert_eq!(stats.rows_written, 2);
    assert_eq!(stats.match_fetches, 2);
    assert_eq!(stats.parameter_fetches, 2);
    assert_eq!(stats.columns, 6);
}

#[test]
fn test_parameter_only_columns_skip_match_fetch() {
    let store = CountingStore::new(two_peptide_store());
    let config = ExportConfig::new(vec![PeptideFeature::Confidence, PeptideFeature::Hidden]);

    export_peptides(&store, &config).unwrap();
    assert_eq!(store.matches.get(), 0);
    assert_eq!(store.parameters.get(), 2);
}

#[test]
fn test_missing_rule_placeholder() {
    let store = two_peptide_store();
    let table = FeatureTable::<PeptideTable>::standard().without(PeptideFeature::Decoy);
    let mut format = TableFormat::csv();
    format.trailing_delimiter = false;
    let config = ExportConfig::new(vec![PeptideFeature::Sequence, PeptideFeature::Decoy])
        .with_format(format);

    let mut out = Vec::new();
    PeptideExporter::new(&store)
        .with_feature_table(table)
        .export(&config, &mut out, &mut NoProgress)
        .unwrap();

    let table = String::from_utf8(out).unwrap();
    assert_eq!(
        table,
        format!("Sequence,Decoy\np1,{NOT_IMPLEMENTED}\np2,{NOT_IMPLEMENTED}\n")
    );
}

#[test]
fn test_custom_rule() {
    let store = two_peptide_store();
    let table = FeatureTable::<PeptideTable>::standard().with(
        PeptideFeature::Sequence,
        Extractor::Key(|key, _| Ok(key.to_uppercase())),
    );
    let mut format = TableFormat::csv();
    format.include_header = false;
    format.trailing_delimiter = false;
    let config = ExportConfig::new(vec![PeptideFeature::Sequence]).with_format(format);

    let mut out = Vec::new();
    PeptideExporter::new(&store)
        .with_feature_table(table)
        .export(&config, &mut out, &mut NoProgress)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "P1\nP2\n");
}

#[test]
fn test_standard_table_is_complete() {
    assert_eq!(
        FeatureTable::<PeptideTable>::standard().len(),
        <PeptideFeature as crate::features::ExportFeature>::ALL.len()
    );
    assert_eq!(
        FeatureTable::<PsmTable>::standard().len(),
        <PsmFeature as crate::features::ExportFeature>::ALL.len()
    );
    assert!(FeatureTable::<PsmTable>::empty().is_empty());
}

fn modified_peptide(key: &str, modifications: Vec<ModificationMatch>) -> PeptideMatch {
    let mut peptide_match = peptide(key, &["P1"], false);
    peptide_match.peptide.modifications = modifications;
    peptide_match
}

fn evaluate_peptide(
    store: &dyn IdentificationStore,
    key: &str,
    feature: PeptideFeature,
) -> Result<String, ExportError> {
    let table = FeatureTable::<PeptideTable>::standard();
    let context = RowContext {
        store,
        sequences: None,
        flank_width: 1,
        protein: None,
    };
    ColumnEvaluator::new(context, &table).evaluate(key, feature)
}

#[test]
fn test_modification_summary_order_independent() {
    let forward = vec![
        ModificationMatch::variable("Phospho", 3),
        ModificationMatch::variable("Oxidation", 1),
        ModificationMatch::variable("Phospho", 5),
        ModificationMatch::fixed("Carbamidomethyl", 2),
    ];
    let mut backward = forward.clone();
    backward.reverse();

    let mut store = InMemoryStore::new();
    store
        .add_peptide(modified_peptide("fwd", forward), MatchParameter::default())
        .unwrap();
    store
        .add_peptide(modified_peptide("bwd", backward), MatchParameter::default())
        .unwrap();

    let fwd = evaluate_peptide(&store, "fwd", PeptideFeature::Ptms).unwrap();
    let bwd = evaluate_peptide(&store, "bwd", PeptideFeature::Ptms).unwrap();
    assert_eq!(fwd, "Oxidation, Phospho (2)");
    assert_eq!(fwd, bwd);
}

#[test]
fn test_peptide_localization_confidence() {
    let mut peptide_match = modified_peptide(
        "pep",
        vec![
            ModificationMatch::variable("Phospho", 3),
            ModificationMatch::variable("Oxidation", 1),
        ],
    );
    let mut scores = PtmScores::new();
    scores.insert("Phospho", ModificationScoring::with_confidence(SiteConfidence::Doubtful));
    peptide_match.ptm_scores = Some(scores);

    let mut store = InMemoryStore::new();
    store
        .add_peptide(peptide_match, MatchParameter::default())
        .unwrap();
    store
        .add_peptide(modified_peptide("bare", vec![]), MatchParameter::default())
        .unwrap();

    let cell = evaluate_peptide(&store, "pep", PeptideFeature::LocalizationConfidence).unwrap();
    assert_eq!(cell, " (Not Scored) (Doubtfull)");

    let cell = evaluate_peptide(&store, "bare", PeptideFeature::LocalizationConfidence).unwrap();
    assert_eq!(cell, "");
}

#[test]
fn test_unique_without_parent() {
    let store = two_peptide_store();
    assert_eq!(evaluate_peptide(&store, "p1", PeptideFeature::Unique).unwrap(), "0");
    assert_eq!(evaluate_peptide(&store, "p2", PeptideFeature::Unique).unwrap(), "1");
}

#[test]
fn test_psm_counts() {
    let mut store = psm_store(&["a.mgf_cus_1", "a.mgf_cus_2"]);
    store
        .add_spectrum(spectrum("a.mgf_cus_3", "PEPK"), MatchParameter::validated(100.0, 0.0))
        .unwrap();
    let mut peptide_match = peptide("PEPK", &["P1"], false);
    peptide_match.spectrum_keys = vec![
        "a.mgf_cus_1".to_string(),
        "a.mgf_cus_2".to_string(),
        "a.mgf_cus_3".to_string(),
    ];
    store
        .add_peptide(peptide_match, MatchParameter::default())
        .unwrap();

    assert_eq!(evaluate_peptide(&store, "PEPK", PeptideFeature::Psms).unwrap(), "3");
    assert_eq!(
        evaluate_peptide(&store, "PEPK", PeptideFeature::ValidatedPsms).unwrap(),
        "1"
    );
}

#[test]
fn test_positions_and_flanking_residues() {
    let mut sequences = ProteinSequences::new();
    sequences.insert("P1", "MAKPEPKAPEPKR");
    sequences.insert("P2", "PEPKSS");

    let mut store = InMemoryStore::new();
    store
        .add_peptide(peptide("PEPK", &["P2", "P1"], false), MatchParameter::default())
        .unwrap();

    let mut format = TableFormat::tsv();
    format.include_header = false;
    format.trailing_delimiter = false;
    let config = ExportConfig::new(vec![
        PeptideFeature::Position,
        PeptideFeature::AaBefore,
        PeptideFeature::AaAfter,
    ])
    .with_format(format);

    let mut out = Vec::new();
    PeptideExporter::new(&store)
        .with_sequences(&sequences)
        .export(&config, &mut out, &mut NoProgress)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "4, 9; 1; \tK|A;\tA|R;S\n");

    let wide = config.clone().with_flank_width(2);
    let mut out = Vec::new();
    PeptideExporter::new(&store)
        .with_sequences(&sequences)
        .export(&wide, &mut out, &mut NoProgress)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "4, 9; 1; \tAK|KA;\tAP|R;SS\n");
}

#[test]
fn test_flanking_without_sequences() {
    let store = two_peptide_store();
    let config = ExportConfig::new(vec![PeptideFeature::Sequence, PeptideFeature::AaAfter]);

    let mut out = Vec::new();
    let err = PeptideExporter::new(&store)
        .export(&config, &mut out, &mut NoProgress)
        .unwrap_err();
    assert!(matches!(err, ExportError::InvalidConfig(_)));
    assert!(out.is_empty());
}

fn scored_spectrum(key: &str) -> SpectrumMatch {
    let mut spectrum_match = spectrum(key, "SEQSK");
    spectrum_match.best_assumption.peptide.modifications = vec![
        ModificationMatch::variable("Phospho", 5),
        ModificationMatch::variable("Phospho", 1),
        ModificationMatch::variable("Oxidation", 2),
    ];
    let mut scores = PtmScores::new();
    scores.insert(
        "Phospho",
        ModificationScoring {
            site_confidence: SiteConfidence::VeryConfident,
            a_score: Some(ScoredLocations::new(vec![5, 1], 42.5)),
            delta_score: Some(ScoredLocations::new(vec![1], 7.0)),
        },
    );
    spectrum_match.ptm_scores = Some(scores);
    spectrum_match
}

fn evaluate_psm(
    store: &dyn IdentificationStore,
    key: &str,
    feature: PsmFeature,
) -> Result<String, ExportError> {
    let table = FeatureTable::<PsmTable>::standard();
    let context = RowContext {
        store,
        sequences: None,
        flank_width: 1,
        protein: None,
    };
    ColumnEvaluator::new(context, &table).evaluate(key, feature)
}

#[test]
fn test_psm_site_scores() {
    let mut store = InMemoryStore::new();
    store
        .add_spectrum(scored_spectrum("f_cus_1"), MatchParameter::default())
        .unwrap();
    store
        .add_spectrum(spectrum("f_cus_2", "PEPK"), MatchParameter::default())
        .unwrap();

    assert_eq!(
        evaluate_psm(&store, "f_cus_1", PsmFeature::AScore).unwrap(),
        "Oxidation (Not Scored), Phospho (1, 5: 42.5)"
    );
    assert_eq!(
        evaluate_psm(&store, "f_cus_1", PsmFeature::DScore).unwrap(),
        "Oxidation (Not Scored), Phospho (1: 7)"
    );
    assert_eq!(
        evaluate_psm(&store, "f_cus_1", PsmFeature::LocalizationConfidence).unwrap(),
        " (Not Scored),  (Very Confident)"
    );
    assert_eq!(
        evaluate_psm(&store, "f_cus_1", PsmFeature::Ptms).unwrap(),
        "Oxidation, Phospho (2)"
    );
    assert_eq!(evaluate_psm(&store, "f_cus_2", PsmFeature::AScore).unwrap(), "");
}

#[test]
fn test_psm_precursor_columns() {
    let mut spectrum_match = spectrum("run.mgf_cus_scan 7", "PEPK");
    let z = 2.0;
    spectrum_match.precursor.mz = (1000.0 + C13_MASS_DIFFERENCE + z * PROTON_MASS) / z;
    spectrum_match.precursor.rt = 61.5;
    spectrum_match.precursor.possible_charges = vec![Charge(2), Charge(3)];
    spectrum_match.scan_number = "7".to_string();

    let mut store = InMemoryStore::new();
    store
        .add_spectrum(spectrum_match, MatchParameter::default())
        .unwrap();
    let key = "run.mgf_cus_scan 7";

    assert_eq!(evaluate_psm(&store, key, PsmFeature::Isotope).unwrap(), "1");
    let error: f64 = evaluate_psm(&store, key, PsmFeature::MzError)
        .unwrap()
        .parse()
        .unwrap();
    assert!(error.abs() < 1e-6);
    assert_eq!(evaluate_psm(&store, key, PsmFeature::IdentificationCharge).unwrap(), "2+");
    assert_eq!(evaluate_psm(&store, key, PsmFeature::SpectrumCharge).unwrap(), "2+, 3+");
    assert_eq!(evaluate_psm(&store, key, PsmFeature::Rt).unwrap(), "61.5");
    assert_eq!(evaluate_psm(&store, key, PsmFeature::SpectrumNumber).unwrap(), "7");
    assert_eq!(evaluate_psm(&store, key, PsmFeature::SpectrumFile).unwrap(), "run.mgf");
    assert_eq!(evaluate_psm(&store, key, PsmFeature::SpectrumTitle).unwrap(), "scan 7");
    assert_eq!(evaluate_psm(&store, key, PsmFeature::TheoreticalMass).unwrap(), "1000");
    assert_eq!(evaluate_psm(&store, key, PsmFeature::Accessions).unwrap(), "P1");
}

// ============================================================================
// Progress and cancellation
// ============================================================================

#[test]
fn test_progress_events() {
    let store = two_peptide_store();
    let config = ExportConfig::new(vec![PeptideFeature::Sequence]);
    let mut recorder = Recorder::default();

    let mut out = Vec::new();
    PeptideExporter::new(&store)
        .export(&config, &mut out, &mut recorder)
        .unwrap();

    assert_eq!(
        recorder.events,
        vec!["indeterminate=true", "indeterminate=false", "total=2"]
    );
    assert_eq!(recorder.advanced, 2);
}

#[test]
fn test_zero_rows_still_reports_total() {
    let store = InMemoryStore::new();
    let config = ExportConfig::new(vec![PeptideFeature::Sequence, PeptideFeature::Decoy]);
    let mut recorder = Recorder::default();

    let mut out = Vec::new();
    let stats = PeptideExporter::new(&store)
        .export(&config, &mut out, &mut recorder)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Sequence\tDecoy\n");
    assert!(recorder.events.contains(&"total=0".to_string()));
    assert_eq!(recorder.advanced, 0);
    assert_eq!(stats.rows_written, 0);
}

#[test]
fn test_cancel_between_rows() {
    let store = psm_store(&["a_cus_1", "a_cus_2", "a_cus_3"]);
    let config = ExportConfig::new(vec![PsmFeature::SpectrumTitle]);
    let mut recorder = Recorder {
        cancel_after: Some(1),
        ..Recorder::default()
    };

    let mut out = Vec::new();
    let err = PsmExporter::new(&store)
        .export(&config, &mut out, &mut recorder)
        .unwrap_err();
    assert!(matches!(err, ExportError::Cancelled { rows: 1 }));
    assert!(!err.is_config_error());
}

#[test]
fn test_cancel_flag() {
    let store = psm_store(&["a_cus_1"]);
    let config = ExportConfig::new(vec![PsmFeature::SpectrumTitle]);
    let flag = CancelFlag::new();
    let mut progress = Cancellable::new(NoProgress, flag.clone());

    flag.cancel();
    let mut out = Vec::new();
    let err = PsmExporter::new(&store)
        .export(&config, &mut out, &mut progress)
        .unwrap_err();
    assert!(matches!(err, ExportError::Cancelled { rows: 0 }));
}

#[test]
fn test_log_progress_counts_rows() {
    let store = two_peptide_store();
    let config = ExportConfig::new(vec![PeptideFeature::Sequence]);
    let mut progress = LogProgress::new("peptides");

    let mut out = Vec::new();
    PeptideExporter::new(&store)
        .export(&config, &mut out, &mut progress)
        .unwrap();
    assert_eq!(progress.done(), 2);
}

#[test]
fn test_stats_display() {
    let store = two_peptide_store();
    let config = ExportConfig::new(vec![PeptideFeature::Sequence]);
    let mut out = Vec::new();
    let stats = PeptideExporter::new(&store)
        .export(&config, &mut out, &mut NoProgress)
        .unwrap();

    let summary = stats.to_string();
    assert!(summary.starts_with("Exported 2 peptide rows x 1 columns"));
}
