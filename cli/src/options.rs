use std::path::PathBuf;

use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub format: OutputFormat,
    /// Overrides the `k` stored in each share file.
    pub threshold: Option<usize>,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(CliOptions),
    Help,
}

impl CliOptions {
    pub fn parse<I>(args: I) -> Result<Command>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = CliOptions::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--json" => options.format = OutputFormat::Json,
                "-k" | "--threshold" => {
                    let Some(value) = args.next() else {
                        bail!("{arg} expects a value");
                    };
                    options.threshold = Some(parse_threshold(&value)?);
                }
                "--" => {
                    options.files.extend(args.by_ref().map(PathBuf::from));
                }
                other => {
                    if let Some(value) = other.strip_prefix("--threshold=") {
                        options.threshold = Some(parse_threshold(value)?);
                    } else if other.starts_with('-') && other.len() > 1 {
                        bail!("unknown option '{other}'");
                    } else {
                        options.files.push(PathBuf::from(other));
                    }
                }
            }
        }

        if options.files.is_empty() {
            bail!("no share files given");
        }
        Ok(Command::Run(options))
    }
}

fn parse_threshold(value: &str) -> Result<usize> {
    value
        .parse()
        .with_context(|| format!("invalid threshold '{value}'"))
}
