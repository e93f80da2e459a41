use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::template::{TestTemplate, DEFAULT_FUNCTION};
use crate::utils::is_rust_identifier;

#[derive(Parser, Debug)]
#[command(name = "casegen")]
#[command(
    about = "Generate Rust test cases from a file of `<identifier> <expected>` lines",
    long_about = None
)]
pub struct Args {
    /// Record file: one `<identifier> <expected>` pair per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Function called by every generated assertion
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_FUNCTION)]
    pub function: String,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input)?;
        if let Some(ref output) = self.output_file {
            validate_output(&self.input, output)?;
        }
        if !is_rust_identifier(&self.function) {
            anyhow::bail!("Not a valid Rust function name: {:?}", self.function);
        }
        Ok(())
    }

    pub fn template(&self) -> TestTemplate {
        TestTemplate::new(self.function.as_str())
    }
}

pub fn validate_input(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Input file does not exist: {}", path.display());
    }

    if !path.is_file() {
        anyhow::bail!("Input path is not a file: {}", path.display());
    }

    File::open(path).with_context(|| format!("Cannot read file: {}", path.display()))?;

    Ok(())
}

/// Rejects an output path that points at the input file. Creating the sink
/// truncates it, which would wipe the records before they are read.
pub fn validate_output(input: &Path, output: &Path) -> Result<()> {
    // A missing output cannot alias the input, which already exists.
    let Ok(output) = std::fs::canonicalize(output) else {
        return Ok(());
    };
    let input = std::fs::canonicalize(input)
        .with_context(|| format!("Cannot resolve input path: {}", input.display()))?;

    if input == output {
        anyhow::bail!(
            "Output file is the same as the input file: {}",
            output.display()
        );
    }

    Ok(())
}
