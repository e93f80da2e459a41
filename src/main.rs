use anyhow::{Context as AnyhowContext, Result};
use casegen::{cli, generate_file, logging};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let template = args.template();

    let summary = match args.output_file {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create output file: {}", path.display()))?;
            generate_file(&args.input, BufWriter::new(file), path, &template)
        }
        None => {
            let stdout = io::stdout().lock();
            generate_file(
                &args.input,
                BufWriter::new(stdout),
                Path::new("<stdout>"),
                &template,
            )
        }
    }
    .with_context(|| format!("Failed to generate tests from {}", args.input.display()))?;

    tracing::info!(
        "Wrote {} test case(s), skipped {} line(s)",
        summary.emitted,
        summary.skipped
    );

    Ok(())
}
