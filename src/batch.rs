// 📦 Batch Driver - clean a CSV column of raw names
//
// Reads one column, parses every value with the chosen kind and writes
// either `raw,cleaned` rows or one JSON object per line. Strict mode stops
// at the first unparseable record; safe mode passes it through.

use crate::cleaver::parse_name;
use crate::config::{BatchConfig, OutputFormat};
use crate::names::{Cleaved, ParsedName};
use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub parsed: usize,
    pub passthrough: usize,
    pub empty: usize,
}

impl BatchSummary {
    fn record(&mut self, cleaved: &Cleaved<ParsedName>) {
        self.total += 1;
        match cleaved {
            Cleaved::Empty => self.empty += 1,
            Cleaved::Parsed(_) => self.parsed += 1,
            Cleaved::Passthrough(_) => self.passthrough += 1,
        }
    }
}

/// One JSONL output line
#[derive(Debug, Serialize)]
struct CleanedRecord<'a> {
    raw: &'a str,
    cleaned: String,
    parsed: Option<&'a ParsedName>,
}

/// Run a batch from `config.input` to `config.output` (stdout when unset).
pub fn run_batch(config: &BatchConfig) -> Result<BatchSummary> {
    let input = File::open(&config.input)
        .with_context(|| format!("Failed to open input file {}", config.input.display()))?;

    let summary = match &config.output {
        Some(path) => {
            let output = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            clean_records(input, BufWriter::new(output), config)?
        }
        None => clean_records(input, io::stdout().lock(), config)?,
    };

    info!(
        kind = %config.kind,
        total = summary.total,
        parsed = summary.parsed,
        passthrough = summary.passthrough,
        empty = summary.empty,
        "batch complete"
    );
    Ok(summary)
}

/// Stream records from `reader` to `writer`. Input and output paths are
/// the caller's concern.
pub fn clean_records<R: Read, W: Write>(
    reader: R,
    writer: W,
    config: &BatchConfig,
) -> Result<BatchSummary> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers().context("Failed to read CSV header")?.clone();
    let Some(column) = headers.iter().position(|h| h.trim() == config.column) else {
        bail!("column '{}' not found in CSV header", config.column);
    };

    let mut sink = RecordSink::new(writer, config.format)?;
    let mut summary = BatchSummary::default();

    for result in rdr.records() {
        let record = result.context("Failed to read CSV record")?;
        let line = record.position().map_or(0, |p| p.line());
        let raw = record.get(column).unwrap_or_default();

        let cleaved = parse_name(config.kind, raw, config.options)
            .with_context(|| format!("record on line {line}"))?;
        debug!(line, raw, cleaned = %cleaved);

        sink.write(raw, &cleaved)?;
        summary.record(&cleaved);
    }

    sink.finish()?;
    Ok(summary)
}

// ============================================================================
// OUTPUT
// ============================================================================

enum RecordSink<W: Write> {
    Csv(csv::Writer<W>),
    Jsonl(W),
}

impl<W: Write> RecordSink<W> {
    fn new(writer: W, format: OutputFormat) -> Result<Self> {
        match format {
            OutputFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(writer);
                wtr.write_record(["raw", "cleaned"])
                    .context("Failed to write CSV header")?;
                Ok(RecordSink::Csv(wtr))
            }
            OutputFormat::Jsonl => Ok(RecordSink::Jsonl(writer)),
        }
    }

    fn write(&mut self, raw: &str, cleaved: &Cleaved<ParsedName>) -> Result<()> {
        let cleaved_str = cleaved.to_string();
        match self {
            RecordSink::Csv(wtr) => wtr
                .write_record([raw, cleaved_str.as_str()])
                .context("Failed to write CSV record"),
            RecordSink::Jsonl(out) => {
                let record = CleanedRecord {
                    raw,
                    cleaned: cleaved_str,
                    parsed: cleaved.parsed(),
                };
                serde_json::to_writer(&mut *out, &record).context("Failed to serialize record")?;
                writeln!(out).context("Failed to write output")
            }
        }
    }

    fn finish(self) -> Result<()> {
        match self {
            RecordSink::Csv(mut wtr) => wtr.flush().context("Failed to flush output"),
            RecordSink::Jsonl(mut out) => out.flush().context("Failed to flush output"),
        }
    }
}
