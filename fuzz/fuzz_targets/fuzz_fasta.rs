#![no_main]

use libfuzzer_sys::fuzz_target;
use mzreport::store::{ProteinSequences, SequenceStore};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Parsing must either succeed or fail with an error, never panic
    let Ok(sequences) = ProteinSequences::from_fasta_reader(Cursor::new(data)) else {
        return;
    };

    // Search a short prefix of the input in every protein it parsed
    let probe = String::from_utf8_lossy(&data[..data.len().min(4)]).into_owned();
    for line in String::from_utf8_lossy(data).lines() {
        if let Some(header) = line.strip_prefix('>') {
            let accession = mzreport::store::parse_accession(header);
            for flank_width in 0..3 {
                let _ = sequences.surrounding_residues(accession, &probe, flank_width);
            }
        }
    }
});
