use super::error::ExportError;

/// Layout of the delimited output
///
/// Cells are written as-is: a delimiter inside a cell is not quoted or
/// escaped, matching the legacy report format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFormat {
    /// Column delimiter
    pub delimiter: String,

    /// Prepend a 1-based row index column
    pub include_index: bool,

    /// Write a header row with the feature titles
    pub include_header: bool,

    /// Follow every data cell with the delimiter, including the last one.
    /// Legacy reports end each data line with a delimiter.
    pub trailing_delimiter: bool,

    /// Line terminator
    pub line_terminator: String,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            delimiter: "\t".to_string(),
            include_index: false,
            include_header: true,
            trailing_delimiter: true,
            line_terminator: "\n".to_string(),
        }
    }
}

impl TableFormat {
    /// Tab-separated legacy layout (default)
    pub fn tsv() -> Self {
        Self::default()
    }

    /// Comma-separated legacy layout
    pub fn csv() -> Self {
        Self {
            delimiter: ",".to_string(),
            ..Self::default()
        }
    }

    pub(super) fn validate(&self) -> Result<(), ExportError> {
        if self.delimiter.is_empty() {
            return Err(ExportError::InvalidConfig("empty column delimiter".to_string()));
        }
        if self.line_terminator.is_empty() {
            return Err(ExportError::InvalidConfig("empty line terminator".to_string()));
        }
        if self.delimiter.contains(&self.line_terminator) {
            return Err(ExportError::InvalidConfig(
                "column delimiter contains the line terminator".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration of one export run
#[derive(Debug, Clone)]
pub struct ExportConfig<F> {
    /// Columns, in output order
    pub features: Vec<F>,

    /// Output layout
    pub format: TableFormat,

    /// Explicit record keys, exported verbatim in this order
    pub keys: Option<Vec<String>>,

    /// Restrict peptide export to the peptides of this protein match
    pub parent_key: Option<String>,

    /// Residues reported on each side of a peptide for flanking columns
    pub flank_width: usize,
}

impl<F> ExportConfig<F> {
    /// Export the given columns with the default layout
    pub fn new(features: Vec<F>) -> Self {
        Self {
            features,
            format: TableFormat::default(),
            keys: None,
            parent_key: None,
            flank_width: 1,
        }
    }

    /// Use another output layout
    pub fn with_format(mut self, format: TableFormat) -> Self {
        self.format = format;
        self
    }

    /// Export exactly these records
    pub fn with_keys(mut self, keys: Vec<String>) -> Self {
        self.keys = Some(keys);
        self
    }

    /// Export the peptides of one protein match
    pub fn with_parent(mut self, parent_key: impl Into<String>) -> Self {
        self.parent_key = Some(parent_key.into());
        self
    }

    /// Number of flanking residues on each side
    pub fn with_flank_width(mut self, flank_width: usize) -> Self {
        self.flank_width = flank_width;
        self
    }
}
