use std::collections::HashMap;

use log::debug;

use crate::identification::{spectrum_key, ProteinMatch};
use crate::store::IdentificationStore;

use super::error::ExportError;

/// Peptide rows: the parent protein's peptides, or every peptide
pub(super) fn peptide_rows(
    store: &dyn IdentificationStore,
    parent: Option<&ProteinMatch>,
) -> Result<Vec<String>, ExportError> {
    match parent {
        Some(protein) => Ok(protein.peptide_keys.clone()),
        None => Ok(store.peptide_keys()?),
    }
}

/// PSM rows: every spectrum match, grouped by spectrum file
pub(super) fn psm_rows(store: &dyn IdentificationStore) -> Result<Vec<String>, ExportError> {
    Ok(partition_by_file(store.spectrum_keys()?))
}

/// Group spectrum keys by file, keeping first-seen file order and the key
/// order within each file
pub fn partition_by_file(keys: Vec<String>) -> Vec<String> {
    let mut files: Vec<Vec<String>> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for key in keys {
        let file = spectrum_key::file(&key).to_string();
        let slot = *slots.entry(file).or_insert_with(|| {
            files.push(Vec::new());
            files.len() - 1
        });
        files[slot].push(key);
    }

    debug!("Partitioned spectrum keys across {} files", files.len());
    files.into_iter().flatten().collect()
}
