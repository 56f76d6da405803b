use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod config;
mod export;
mod features;

/// mzreport - Export peptide and PSM tables from identification projects
#[derive(Parser)]
#[command(name = "mzreport")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Table to export
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TableArg {
    /// One row per peptide match
    Peptides,
    /// One row per peptide-spectrum match
    Psms,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a peptide or PSM table
    Export(ExportArgs),

    /// List the features of a table
    Features {
        /// Table kind
        #[arg(value_enum)]
        table: TableArg,
    },
}

/// Arguments of the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Table kind
    #[arg(value_enum)]
    pub table: TableArg,

    /// Identification project (JSON, optionally gzipped)
    #[arg(long, value_name = "FILE")]
    pub project: PathBuf,

    /// Protein sequences, needed for position and flanking residue columns
    #[arg(long, value_name = "FILE")]
    pub fasta: Option<PathBuf>,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Feature to export, repeat for more columns (all features when omitted)
    #[arg(short = 'f', long = "feature", value_name = "ID")]
    pub features: Vec<String>,

    /// Column delimiter (`\t` for tab)
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Prepend a row index column
    #[arg(long)]
    pub index: bool,

    /// Omit the header row
    #[arg(long)]
    pub no_header: bool,

    /// Do not end data rows with a delimiter
    #[arg(long)]
    pub no_trailing_delimiter: bool,

    /// Only export the peptides of this protein match
    #[arg(long, value_name = "KEY")]
    pub protein: Option<String>,

    /// File with one record key per line, exported in that order
    #[arg(long, value_name = "FILE")]
    pub keys: Option<PathBuf>,

    /// Flanking residues on each side of a peptide
    #[arg(long, value_name = "N")]
    pub flank: Option<usize>,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Export(args) => export::run(args),
        Commands::Features { table } => features::run(table),
    }
}
