//! Verdict sinks: partitioned output streams with a broker/sequence audit trail.
//!
//! Accepted and rejected orders each get a rendered-order stream and a
//! `Broker,Sequence` CSV, in arrival order. Sink is pluggable: files for the
//! binary, in-memory for tests.

use crate::types::{Order, Verdict};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const ACCEPTED_ORDERS_FILE: &str = "accepted-orders.txt";
pub const REJECTED_ORDERS_FILE: &str = "rejected-orders.txt";
pub const ACCEPTED_BROKER_SEQ_FILE: &str = "accepted-broker-seq.csv";
pub const REJECTED_BROKER_SEQ_FILE: &str = "rejected-broker-seq.csv";

const BROKER_SEQ_HEADER: &str = "Broker,Sequence";

/// Sink for evaluated orders. Implementations write to files or memory (tests).
pub trait VerdictSink {
    /// Records one order under its verdict, preserving arrival order.
    fn record(&mut self, order: &Order, verdict: Verdict) -> io::Result<()>;

    /// Flushes buffered output. Default: no-op.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// File-backed sink: four buffered files in one output directory.
pub struct FileSinks {
    accepted_orders: BufWriter<File>,
    rejected_orders: BufWriter<File>,
    accepted_broker_seq: BufWriter<File>,
    rejected_broker_seq: BufWriter<File>,
}

impl FileSinks {
    /// Deletes and recreates `dir`, then opens the four output files. The two
    /// broker-seq CSVs start with a `Broker,Sequence` header line.
    pub fn create(dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = dir.as_ref();
        if dir.exists() {
            fs::remove_dir_all(dir)?;
        }
        fs::create_dir_all(dir)?;

        let mut accepted_broker_seq =
            BufWriter::new(File::create(dir.join(ACCEPTED_BROKER_SEQ_FILE))?);
        let mut rejected_broker_seq =
            BufWriter::new(File::create(dir.join(REJECTED_BROKER_SEQ_FILE))?);
        writeln!(accepted_broker_seq, "{}", BROKER_SEQ_HEADER)?;
        writeln!(rejected_broker_seq, "{}", BROKER_SEQ_HEADER)?;

        Ok(Self {
            accepted_orders: BufWriter::new(File::create(dir.join(ACCEPTED_ORDERS_FILE))?),
            rejected_orders: BufWriter::new(File::create(dir.join(REJECTED_ORDERS_FILE))?),
            accepted_broker_seq,
            rejected_broker_seq,
        })
    }
}

impl VerdictSink for FileSinks {
    fn record(&mut self, order: &Order, verdict: Verdict) -> io::Result<()> {
        let (orders, broker_seq) = match verdict {
            Verdict::Accepted => (&mut self.accepted_orders, &mut self.accepted_broker_seq),
            Verdict::Rejected => (&mut self.rejected_orders, &mut self.rejected_broker_seq),
        };
        writeln!(broker_seq, "{}", order.broker_seq_line())?;
        writeln!(orders, "{}", order)?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.accepted_orders.flush()?;
        self.rejected_orders.flush()?;
        self.accepted_broker_seq.flush()?;
        self.rejected_broker_seq.flush()?;
        Ok(())
    }
}

/// In-memory sink that stores rendered lines for tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
    pub accepted_broker_seq: Vec<String>,
    pub rejected_broker_seq: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VerdictSink for MemorySink {
    fn record(&mut self, order: &Order, verdict: Verdict) -> io::Result<()> {
        let (orders, broker_seq) = match verdict {
            Verdict::Accepted => (&mut self.accepted, &mut self.accepted_broker_seq),
            Verdict::Rejected => (&mut self.rejected, &mut self.rejected_broker_seq),
        };
        broker_seq.push(order.broker_seq_line());
        orders.push(order.to_string());
        Ok(())
    }
}
