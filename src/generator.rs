use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{IoError, Result};
use crate::record::Record;
use crate::template::TestTemplate;

const INPUT_LABEL: &str = "<input>";
const OUTPUT_LABEL: &str = "<output>";

/// Counters for one pass over an input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub emitted: usize,
    pub skipped: usize,
}

/// Renders a single input line, or `None` when it holds fewer than two tokens.
pub fn transform(line: &str, template: &TestTemplate) -> Option<String> {
    Record::parse(line).map(|record| template.render(&record))
}

/// Transforms every line of `reader` in order and writes the blocks to `writer`.
///
/// Each block is followed by one extra newline, so consecutive cases are
/// separated by two blank lines.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    template: &TestTemplate,
) -> Result<Summary> {
    process(
        reader,
        writer,
        template,
        Path::new(INPUT_LABEL),
        Path::new(OUTPUT_LABEL),
    )
}

/// Opens `input` and runs the generator over it.
///
/// `output` only labels write errors; the caller owns the sink.
pub fn generate_file<W: Write>(
    input: &Path,
    writer: W,
    output: &Path,
    template: &TestTemplate,
) -> Result<Summary> {
    let file = File::open(input).map_err(|e| IoError::from_open(input, e))?;
    tracing::info!("Reading records from {}", input.display());
    process(BufReader::new(file), writer, template, input, output)
}

fn process<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    template: &TestTemplate,
    input: &Path,
    output: &Path,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for physical in reader.lines() {
        let physical = physical.map_err(|e| IoError::read_error(input, e))?;

        for line in split_carriage_returns(&physical) {
            summary.lines += 1;

            match transform(line, template) {
                Some(block) => {
                    tracing::trace!(line = summary.lines, "emitting case");
                    writeln!(writer, "{block}").map_err(|e| IoError::write_error(output, e))?;
                    summary.emitted += 1;
                }
                None => {
                    tracing::debug!(
                        line = summary.lines,
                        "skipping line with fewer than two tokens"
                    );
                    summary.skipped += 1;
                }
            }
        }
    }

    writer.flush().map_err(|e| IoError::write_error(output, e))?;

    tracing::info!(
        lines = summary.lines,
        emitted = summary.emitted,
        skipped = summary.skipped,
        "Generation complete"
    );

    Ok(summary)
}

/// A lone `\r` also ends a line. `BufRead::lines` has already removed `\n`
/// and `\r\n`, so a trailing `\r` closes the last piece rather than opening
/// an empty one.
fn split_carriage_returns(line: &str) -> impl Iterator<Item = &str> {
    line.strip_suffix('\r').unwrap_or(line).split('\r')
}
