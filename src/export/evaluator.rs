use crate::identification::MatchParameter;

use super::error::ExportError;
use super::slot::MemoSlot;
use super::table::{ExportRecord, Extractor, FeatureTable, RowContext};

/// Cell text of a feature without an extraction rule
pub const NOT_IMPLEMENTED: &str = "Not implemented";

/// Computes cell text for (record key, feature) pairs
///
/// Rows are evaluated column by column, so the match and parameter of the
/// current row are each fetched once and reused for the remaining columns.
pub struct ColumnEvaluator<'a, R: ExportRecord> {
    context: RowContext<'a>,
    table: &'a FeatureTable<R>,
    matches: MemoSlot<R::Match>,
    parameters: MemoSlot<MatchParameter>,
}

impl<'a, R: ExportRecord> ColumnEvaluator<'a, R> {
    /// Create an evaluator with empty caches
    pub fn new(context: RowContext<'a>, table: &'a FeatureTable<R>) -> Self {
        Self {
            context,
            table,
            matches: MemoSlot::new(),
            parameters: MemoSlot::new(),
        }
    }

    /// Cell text of `feature` for the record `key`
    pub fn evaluate(&mut self, key: &str, feature: R::Feature) -> Result<String, ExportError> {
        let Some(extractor) = self.table.get(feature) else {
            return Ok(NOT_IMPLEMENTED.to_string());
        };

        let store = self.context.store;
        match extractor {
            Extractor::Key(extract) => extract(key, &self.context),
            Extractor::Match(extract) => {
                let record = self.matches.get_or_fetch(key, |k| R::fetch_match(store, k))?;
                extract(record, &self.context)
            }
            Extractor::Parameter(extract) => {
                let parameter = self
                    .parameters
                    .get_or_fetch(key, |k| R::fetch_parameter(store, k))?;
                Ok(extract(parameter))
            }
        }
    }

    /// Match snapshots fetched so far
    pub fn match_fetches(&self) -> usize {
        self.matches.fetches()
    }

    /// Validation parameters fetched so far
    pub fn parameter_fetches(&self) -> usize {
        self.parameters.fetches()
    }
}
