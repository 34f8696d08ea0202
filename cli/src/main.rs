mod options;
mod report;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::{debug, info};
use shamir_core::ShareFile;

use crate::options::{CliOptions, Command, OutputFormat};
use crate::report::Report;

const USAGE: &str = "\
Usage: shamir [--json] [--threshold <k>] <file.json>...

Recovers the secret from each share file and reports shares that disagree
with it.

Options:
  --json                 print one JSON object per file
  -k, --threshold <k>    use <k> instead of the threshold stored in the file
  -h, --help             print this message

Set RUST_LOG=debug for loader diagnostics.";

fn main() -> ExitCode {
    env_logger::init();

    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err:#}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let mut failures = 0usize;
    for path in &options.files {
        let outcome =
            run(path, &options).and_then(|report| emit(&report, &options));
        if let Err(err) = outcome {
            eprintln!("error: {err:#}");
            failures += 1;
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        debug!("{failures} of {} files failed", options.files.len());
        ExitCode::FAILURE
    }
}

fn run(path: &Path, options: &CliOptions) -> Result<Report> {
    let file = ShareFile::from_path(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let threshold = options.threshold.unwrap_or_else(|| file.threshold());
    info!(
        "{}: {} shares, threshold {threshold}",
        path.display(),
        file.shares().len()
    );

    let reconstruction = file
        .reconstruct_with(threshold)
        .with_context(|| format!("failed to reconstruct {}", path.display()))?;
    Ok(Report::new(path.display().to_string(), &reconstruction))
}

fn emit(report: &Report, options: &CliOptions) -> Result<()> {
    if !report.integrity().is_trustworthy() {
        eprintln!(
            "warning: most redundant shares in {} disagree with the \
             interpolation basis; the secret is probably wrong",
            report.file()
        );
    }

    match options.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.render_json()?),
    }
    Ok(())
}
