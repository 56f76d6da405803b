//! TOML configuration file support for recurring exports.
//!
//! Instead of passing many CLI flags, users can keep the layout and the
//! column lists in a config file:
//!
//! ```toml
//! # mzreport.toml
//! [format]
//! delimiter = ","
//! index = true
//! trailing_delimiter = false
//! flank_width = 2
//!
//! [peptides]
//! features = ["accessions", "sequence", "aa_before", "aa_after", "validated"]
//!
//! [psms]
//! features = ["spectrum_file", "spectrum_title", "sequence", "mz_error"]
//! ```
//!
//! Command-line flags take precedence over file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use mzreport::export::TableFormat;

/// Root configuration structure for mzreport.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output layout settings.
    #[serde(default)]
    pub format: FormatConfig,

    /// Peptide table settings.
    #[serde(default)]
    pub peptides: TableConfig,

    /// PSM table settings.
    #[serde(default)]
    pub psms: TableConfig,
}

/// Output layout shared by both tables.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Column delimiter.
    pub delimiter: Option<String>,

    /// Prepend a row index column.
    pub index: Option<bool>,

    /// Write the header row.
    pub header: Option<bool>,

    /// End data rows with a delimiter.
    pub trailing_delimiter: Option<bool>,

    /// Line terminator.
    pub line_terminator: Option<String>,

    /// Flanking residues on each side of a peptide.
    pub flank_width: Option<usize>,
}

/// Settings of one table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Feature identifiers, in column order.
    pub features: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

impl FormatConfig {
    /// Apply the file settings on top of the default layout.
    pub fn table_format(&self) -> TableFormat {
        let mut format = TableFormat::default();
        if let Some(delimiter) = &self.delimiter {
            format.delimiter = delimiter.clone();
        }
        if let Some(index) = self.index {
            format.include_index = index;
        }
        if let Some(header) = self.header {
            format.include_header = header;
        }
        if let Some(trailing) = self.trailing_delimiter {
            format.trailing_delimiter = trailing;
        }
        if let Some(terminator) = &self.line_terminator {
            format.line_terminator = terminator.clone();
        }
        format
    }
}
