//! Reorder an XML file to match a template's element order.
//!
//! Two versions of the same document often differ only in serialization
//! order, which makes a plain `diff` useless. `xort` loads a template and
//! an unsorted file, aligns the unsorted tree to the template, and writes
//! the result next to the input (or to stdout), ready for a line diff.

use std::io::Write as _;

use anyhow::{Context, Result};
use clap::Parser;
use xml_align_core::{
    align_with_report, format_json, format_summary, format_text, parse_file, write, write_file,
    AlignReport,
};

mod cli;
mod out_path;

use cli::{Cli, ReportFormat};
use out_path::{default_output_path, ensure_output_not_same};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let template = parse_file(&cli.template)
        .with_context(|| format!("failed to parse template {}", cli.template.display()))?;
    let mut unsorted = parse_file(&cli.unsorted)
        .with_context(|| format!("failed to parse {}", cli.unsorted.display()))?;

    let report = align_with_report(&template, &mut unsorted);

    if cli.stdout {
        let bytes = write(&unsorted).context("failed to serialize aligned document")?;
        let mut out = std::io::stdout().lock();
        out.write_all(&bytes)
            .and_then(|()| out.write_all(b"\n"))
            .context("failed to write aligned XML to stdout")?;
    } else {
        let out_path = cli
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&cli.unsorted));
        ensure_output_not_same(&out_path, &[&cli.template, &cli.unsorted])?;
        write_file(&unsorted, &out_path)
            .with_context(|| format!("failed to write aligned XML {}", out_path.display()))?;
        println!("wrote {}", out_path.display());
    }

    if cli.summary {
        let rendered = render_report(&report, cli.format, cli.verbose);
        if cli.stdout {
            // Keep the XML stream on stdout clean for piping.
            eprintln!("{rendered}");
        } else {
            println!("{rendered}");
        }
    }

    Ok(())
}

fn render_report(report: &AlignReport, format: ReportFormat, verbose: bool) -> String {
    match (format, verbose) {
        (ReportFormat::Json, _) => format_json(report),
        (ReportFormat::Text, true) => format_text(report),
        (ReportFormat::Text, false) => format_summary(report),
    }
}
