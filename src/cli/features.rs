use anyhow::Result;

use mzreport::features::{ExportFeature, PeptideFeature, PsmFeature};

use super::TableArg;

/// List the features of a table
pub fn run(table: TableArg) -> Result<()> {
    let listing = match table {
        TableArg::Peptides => format_features::<PeptideFeature>(),
        TableArg::Psms => format_features::<PsmFeature>(),
    };
    print!("{listing}");
    Ok(())
}

fn format_features<F: ExportFeature>() -> String {
    let width = F::ALL.iter().map(|f| f.id().len()).max().unwrap_or(0);

    let mut output = format!("{} features ({}):\n", F::RECORD_TYPE, F::ALL.len());
    for &feature in F::ALL {
        output.push_str(&format_line(feature, width));
        output.push('\n');
    }
    output
}

#[cfg(feature = "colorized_output")]
fn format_line<F: ExportFeature>(feature: F, width: usize) -> String {
    use console::style;

    let id = format!("{:<width$}", feature.id());
    let note = if feature.requires_sequences() {
        format!(" {}", style("(needs --fasta)").yellow())
    } else {
        String::new()
    };
    format!("  {}  {}{}", style(id).cyan().bold(), feature.title(), note)
}

#[cfg(not(feature = "colorized_output"))]
fn format_line<F: ExportFeature>(feature: F, width: usize) -> String {
    let note = if feature.requires_sequences() {
        " (needs --fasta)"
    } else {
        ""
    };
    format!("  {:<width$}  {}{}", feature.id(), feature.title(), note)
}
