use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use mzreport::export::{
    ExportConfig, ExportError, ExportStats, LogProgress, PeptideExporter, ProgressSink,
    PsmExporter, TableFormat,
};
use mzreport::features::{parse_features, ExportFeature, PeptideFeature, PsmFeature};
use mzreport::store::{InMemoryStore, ProteinSequences};

use super::config::Config;
use super::{ExportArgs, TableArg};

/// Export a peptide or PSM table
pub fn run(args: ExportArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let store = InMemoryStore::from_json_file(&args.project)
        .with_context(|| format!("Failed to load project: {}", args.project.display()))?;
    info!(
        "Loaded {} proteins, {} peptides, {} spectra from {}",
        store.protein_count(),
        store.peptide_count(),
        store.spectrum_count(),
        args.project.display()
    );

    let sequences = match &args.fasta {
        Some(path) => {
            let sequences = ProteinSequences::from_fasta_file(path)
                .with_context(|| format!("Failed to read FASTA file: {}", path.display()))?;
            info!("Loaded {} protein sequences", sequences.len());
            Some(sequences)
        }
        None => None,
    };

    let format = table_format(&args, &config);
    let flank_width = args.flank.or(config.format.flank_width).unwrap_or(1);
    let keys = args.keys.as_deref().map(read_keys).transpose()?;
    let output = args.output.as_deref();

    let stats = match args.table {
        TableArg::Peptides => {
            let features = select_features::<PeptideFeature>(
                &args.features,
                config.peptides.features.as_deref(),
                sequences.is_some(),
            )?;
            let export_config = build_config(features, format, keys, args.protein, flank_width);

            let mut exporter = PeptideExporter::new(&store);
            if let Some(sequences) = &sequences {
                exporter = exporter.with_sequences(sequences);
            }
            write_table(output, "peptides", |out, progress| {
                exporter.export(&export_config, out, progress)
            })?
        }
        TableArg::Psms => {
            let features = select_features::<PsmFeature>(
                &args.features,
                config.psms.features.as_deref(),
                sequences.is_some(),
            )?;
            let export_config = build_config(features, format, keys, args.protein, flank_width);

            let exporter = PsmExporter::new(&store);
            write_table(output, "PSMs", |out, progress| {
                exporter.export(&export_config, out, progress)
            })?
        }
    };

    info!("{stats}");
    if let Some(path) = output {
        info!("Output: {}", path.display());
    }
    Ok(())
}

/// Layout from the config file, overridden by command-line flags
fn table_format(args: &ExportArgs, config: &Config) -> TableFormat {
    let mut format = config.format.table_format();
    if let Some(delimiter) = &args.delimiter {
        format.delimiter = unescape_delimiter(delimiter);
    }
    if args.index {
        format.include_index = true;
    }
    if args.no_header {
        format.include_header = false;
    }
    if args.no_trailing_delimiter {
        format.trailing_delimiter = false;
    }
    format
}

fn unescape_delimiter(delimiter: &str) -> String {
    match delimiter {
        "\\t" | "tab" => "\t".to_string(),
        other => other.to_string(),
    }
}

fn build_config<F>(
    features: Vec<F>,
    format: TableFormat,
    keys: Option<Vec<String>>,
    protein: Option<String>,
    flank_width: usize,
) -> ExportConfig<F> {
    let mut config = ExportConfig::new(features)
        .with_format(format)
        .with_flank_width(flank_width);
    config.keys = keys;
    config.parent_key = protein;
    config
}

/// Command-line features, else config file features, else every feature
fn select_features<F: ExportFeature>(
    requested: &[String],
    configured: Option<&[String]>,
    have_sequences: bool,
) -> Result<Vec<F>> {
    if !requested.is_empty() {
        return Ok(parse_features(requested)?);
    }
    if let Some(configured) = configured {
        return Ok(parse_features(configured)?);
    }

    let features: Vec<F> = F::ALL
        .iter()
        .copied()
        .filter(|feature| have_sequences || !feature.requires_sequences())
        .collect();
    if features.len() < F::ALL.len() {
        warn!(
            "No FASTA file given, skipping {} {} columns that need protein sequences",
            F::ALL.len() - features.len(),
            F::RECORD_TYPE
        );
    }
    Ok(features)
}

/// Record keys, one per line, trimmed; blank lines are skipped
fn read_keys(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read key file: {}", path.display()))?;
    Ok(parse_keys(&content))
}

fn parse_keys(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run `export` against stdout, or against a temporary file that replaces
/// `output` only when the export succeeds
fn write_table<E>(output: Option<&Path>, label: &str, export: E) -> Result<ExportStats>
where
    E: FnOnce(&mut dyn Write, &mut dyn ProgressSink) -> Result<ExportStats, ExportError>,
{
    let mut progress = LogProgress::new(label);

    let Some(path) = output else {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        let stats = export(&mut out, &mut progress).context("Export failed")?;
        out.flush().context("Failed to flush stdout")?;
        return Ok(stats);
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

    let stats = {
        let mut out = BufWriter::new(file.as_file_mut());
        let stats = export(&mut out, &mut progress).context("Export failed")?;
        out.flush().context("Failed to flush output")?;
        stats
    };

    file.persist(path)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(stats)
}
