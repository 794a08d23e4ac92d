//! Pipeline driver: reads lines, parses, evaluates, routes to the sink.
//!
//! Strictly sequential: one line becomes one order, evaluated exactly once
//! before the next line is read. A malformed line is logged and skipped; it
//! counts toward none of the summary totals.

use crate::audit::{FileSinks, VerdictSink};
use crate::config::Config;
use crate::parser;
use crate::types::{RunStats, Verdict};
use crate::validator::Validator;
use log::error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Runs the validation pipeline over `reader`. The first line is a header and
/// is skipped. Returns the summary counters for the run.
///
/// A stream-level read failure aborts the run; per-line parse and write
/// failures only skip that line.
pub fn run(
    reader: impl BufRead,
    validator: &mut Validator,
    sink: &mut dyn VerdictSink,
) -> Result<RunStats, String> {
    let mut stats = RunStats::default();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("error reading orders stream: {}", e))?;
        if index == 0 {
            // header
            continue;
        }
        process_line(&line, validator, sink, &mut stats);
    }
    sink.flush()
        .map_err(|e| format!("error flushing output: {}", e))?;
    Ok(stats)
}

/// Opens `input`, builds file sinks under `config.output_dir`, and runs the
/// pipeline with a validator configured from `config`. Failing to open the
/// input or create the output directory is fatal before any line is read.
pub fn run_file(input: impl AsRef<Path>, config: &Config) -> Result<RunStats, String> {
    let input = input.as_ref();
    let file = File::open(input)
        .map_err(|e| format!("cannot open orders file {}: {}", input.display(), e))?;
    let mut sinks = FileSinks::create(&config.output_dir)
        .map_err(|e| format!("cannot create output directory {}: {}", config.output_dir, e))?;
    let mut validator = Validator::new(config.valid_symbols.clone(), config.orders_per_minute);
    run(BufReader::new(file), &mut validator, &mut sinks)
}

fn process_line(
    line: &str,
    validator: &mut Validator,
    sink: &mut dyn VerdictSink,
    stats: &mut RunStats,
) {
    let order = match parser::parse_order(line) {
        Ok(order) => order,
        Err(e) => {
            error!("error processing line {}: {}", line, e);
            return;
        }
    };
    let verdict = Verdict::from_accepted(validator.evaluate(&order));
    if let Err(e) = sink.record(&order, verdict) {
        error!("error processing line {}: {}", line, e);
        return;
    }
    match verdict {
        Verdict::Accepted => stats.accepted += 1,
        Verdict::Rejected => stats.rejected += 1,
    }
    stats.processed += 1;
}
