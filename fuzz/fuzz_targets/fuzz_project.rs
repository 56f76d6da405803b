#![no_main]

use libfuzzer_sys::fuzz_target;
use mzreport::export::{ExportConfig, NoProgress, PeptideExporter, PsmExporter};
use mzreport::features::{ExportFeature, PeptideFeature, PsmFeature};
use mzreport::store::InMemoryStore;

fuzz_target!(|data: &[u8]| {
    let Ok(store) = InMemoryStore::from_reader(data) else {
        return;
    };

    // Every column of every record must render without panicking
    let peptides: Vec<PeptideFeature> = PeptideFeature::ALL
        .iter()
        .copied()
        .filter(|f| !f.requires_sequences())
        .collect();
    let mut out = Vec::new();
    let _ = PeptideExporter::new(&store).export(&ExportConfig::new(peptides), &mut out, &mut NoProgress);

    let mut out = Vec::new();
    let _ = PsmExporter::new(&store).export(
        &ExportConfig::new(PsmFeature::ALL.to_vec()),
        &mut out,
        &mut NoProgress,
    );
});
