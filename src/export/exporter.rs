use std::io::Write;
use std::time::Instant;

use log::{debug, info};

use crate::features::ExportFeature;
use crate::identification::ProteinMatch;
use crate::store::{IdentificationStore, SequenceStore};

use super::config::ExportConfig;
use super::error::ExportError;
use super::evaluator::ColumnEvaluator;
use super::progress::ProgressSink;
use super::stats::ExportStats;
use super::table::{ExportRecord, FeatureTable, PeptideTable, PsmTable, RowContext};
use super::writer::TableWriter;

/// Exports one kind of table from an identification store
pub struct TableExporter<'a, R: ExportRecord> {
    store: &'a dyn IdentificationStore,
    sequences: Option<&'a dyn SequenceStore>,
    table: FeatureTable<R>,
}

/// Peptide table exporter
pub type PeptideExporter<'a> = TableExporter<'a, PeptideTable>;

/// PSM table exporter
pub type PsmExporter<'a> = TableExporter<'a, PsmTable>;

impl<'a, R: ExportRecord> TableExporter<'a, R> {
    /// Create an exporter with the built-in extraction rules
    pub fn new(store: &'a dyn IdentificationStore) -> Self {
        Self {
            store,
            sequences: None,
            table: FeatureTable::standard(),
        }
    }

    /// Provide protein sequences for position and flanking columns
    pub fn with_sequences(mut self, sequences: &'a dyn SequenceStore) -> Self {
        self.sequences = Some(sequences);
        self
    }

    /// Use custom extraction rules
    pub fn with_feature_table(mut self, table: FeatureTable<R>) -> Self {
        self.table = table;
        self
    }

    /// Write the table described by `config` to `out`
    ///
    /// Configuration problems are reported before anything is written. Any
    /// later error aborts the run and leaves a partial table in `out`.
    pub fn export<W: Write + ?Sized>(
        &self,
        config: &ExportConfig<R::Feature>,
        out: &mut W,
        progress: &mut dyn ProgressSink,
    ) -> Result<ExportStats, ExportError> {
        let started = Instant::now();
        let started_at = chrono::Utc::now();

        progress.set_indeterminate(true);
        self.validate(config)?;

        let parent = match &config.parent_key {
            Some(key) => Some(self.parent_protein(key)?),
            None => None,
        };
        let keys = match &config.keys {
            Some(keys) => keys.clone(),
            None => R::default_rows(self.store, parent.as_ref())?,
        };
        debug!(
            "Resolved {} {} rows for {} columns",
            keys.len(),
            <R::Feature as ExportFeature>::RECORD_TYPE,
            config.features.len()
        );

        let mut writer = TableWriter::new(out, &config.format);
        writer.write_header(config.features.iter().map(|feature| feature.title()))?;

        progress.set_indeterminate(false);
        progress.set_total(keys.len());

        let context = RowContext {
            store: self.store,
            sequences: self.sequences,
            flank_width: config.flank_width,
            protein: parent.as_ref(),
        };
        let mut evaluator = ColumnEvaluator::new(context, &self.table);
        let mut cells = Vec::with_capacity(config.features.len());

        for key in &keys {
            if progress.is_cancelled() {
                return Err(ExportError::Cancelled {
                    rows: writer.rows_written(),
                });
            }
            cells.clear();
            for &feature in &config.features {
                cells.push(evaluator.evaluate(key, feature)?);
            }
            writer.write_row(cells.as_slice())?;
            progress.advance();
        }

        let rows_written = writer.finish()?;
        let stats = ExportStats {
            record_type: <R::Feature as ExportFeature>::RECORD_TYPE,
            rows_written,
            columns: config.features.len(),
            match_fetches: evaluator.match_fetches(),
            parameter_fetches: evaluator.parameter_fetches(),
            started_at,
            elapsed: started.elapsed(),
        };
        info!("{stats}");
        Ok(stats)
    }

    fn validate(&self, config: &ExportConfig<R::Feature>) -> Result<(), ExportError> {
        config.format.validate()?;

        if config.parent_key.is_some() && !R::SUPPORTS_PARENT {
            return Err(ExportError::InvalidConfig(format!(
                "{} export cannot be restricted to a parent protein",
                <R::Feature as ExportFeature>::RECORD_TYPE
            )));
        }
        if let Some(keys) = &config.keys {
            if let Some(position) = keys.iter().position(|key| key.is_empty()) {
                return Err(ExportError::InvalidConfig(format!(
                    "empty record key at position {}",
                    position + 1
                )));
            }
        }
        if self.sequences.is_none() {
            let needs_sequences = config
                .features
                .iter()
                .find(|feature| feature.requires_sequences() && self.table.get(**feature).is_some());
            if let Some(feature) = needs_sequences {
                return Err(ExportError::InvalidConfig(format!(
                    "column '{}' requires protein sequences",
                    feature.id()
                )));
            }
        }
        Ok(())
    }

    fn parent_protein(&self, key: &str) -> Result<ProteinMatch, ExportError> {
        self.store.protein_match(key).map_err(|e| {
            if e.is_not_found() {
                ExportError::UnknownParent(key.to_string())
            } else {
                ExportError::StoreError(e)
            }
        })
    }
}
