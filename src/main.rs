//! # mzreport
//!
//! A command-line tool for exporting peptide and PSM tables from
//! identification projects.
//!
//! ## Usage
//!
//! ```bash
//! # Peptide table with flanking residues, tab-separated, to a file
//! mzreport export peptides --project project.json --fasta proteins.fasta \
//!     -f accessions -f sequence -f aa_before -f aa_after -o peptides.tsv
//!
//! # PSM table as CSV on stdout
//! mzreport export psms --project project.json --delimiter , --no-trailing-delimiter
//!
//! # List the available columns
//! mzreport features psms
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
