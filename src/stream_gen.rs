//! Synthetic order stream generator.
//!
//! Deterministic, configurable CSV order lines for benches, property tests,
//! and demos. Same seed produces the same stream.

use crate::parser::TIMESTAMP_FORMAT;
use chrono::{Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Header line for generated files, matching the eight input positions.
pub const CSV_HEADER: &str = "Timestamp,Broker,Sequence,Type,Symbol,Quantity,Price,Side";

/// Configuration for the synthetic line generator.
/// Same config + seed produces the same stream.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// RNG seed. Same seed produces the same line sequence.
    pub seed: u64,
    /// Number of record lines to generate (header not included).
    pub num_lines: usize,
    /// Distinct broker names, `broker-1..broker-N`.
    pub num_brokers: u32,
    /// Symbols to draw from; mix valid and invalid ones to exercise rejections.
    pub symbols: Vec<String>,
    /// Probability (0.0..=1.0) that a line repeats the broker's previous
    /// sequence number instead of advancing it.
    pub duplicate_seq_ratio: f64,
    /// Probability (0.0..=1.0) that one field of a line is left empty.
    pub missing_field_ratio: f64,
    /// First timestamp in the stream.
    pub start: NaiveDateTime,
    /// Seconds advanced between consecutive lines: 0..=max, inclusive.
    pub max_seconds_between_orders: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            num_lines: 1000,
            num_brokers: 5,
            symbols: ["BARK", "CARD", "HOOF", "LOUD", "GLOO", "NOPE", "XXXX"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            duplicate_seq_ratio: 0.05,
            missing_field_ratio: 0.02,
            start: NaiveDateTime::default(),
            max_seconds_between_orders: 10,
        }
    }
}

/// Deterministic order-line stream. Create with [`Generator::new`]; pull
/// lines with [`Generator::next_line`] or [`Generator::all_lines`].
pub struct Generator {
    rng: StdRng,
    config: GeneratorConfig,
    timestamp: NaiveDateTime,
    /// Last sequence issued per broker, for advancing and duplicate draws.
    sequences: HashMap<String, i64>,
}

impl Generator {
    /// Builds a generator with the given config. Same config (including seed)
    /// produces the same stream.
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let timestamp = config.start;
        Self {
            rng,
            config,
            timestamp,
            sequences: HashMap::new(),
        }
    }

    /// Generates the next CSV record line. Advances internal state (clock,
    /// per-broker sequences, RNG).
    pub fn next_line(&mut self) -> String {
        let advance = self
            .rng
            .gen_range(0..=self.config.max_seconds_between_orders);
        self.timestamp = self.timestamp + Duration::seconds(advance as i64);

        let broker = format!(
            "broker-{}",
            self.rng.gen_range(1..=self.config.num_brokers.max(1))
        );
        let sequence = match self.sequences.get(&broker).copied() {
            Some(prev) if self.rng.gen::<f64>() < self.config.duplicate_seq_ratio => prev,
            Some(prev) => prev + 1,
            None => 1,
        };
        self.sequences.insert(broker.clone(), sequence);

        let symbol = if self.config.symbols.is_empty() {
            String::new()
        } else {
            self.config.symbols[self.rng.gen_range(0..self.config.symbols.len())].clone()
        };
        let quantity = self.rng.gen_range(1..=1000u32);
        let price = Decimal::new(self.rng.gen_range(100..=99999i64), 2);
        let side = if self.rng.gen::<f64>() < 0.5 { "Buy" } else { "Sell" };

        let mut fields = vec![
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            broker,
            sequence.to_string(),
            "K".to_string(),
            symbol,
            quantity.to_string(),
            price.to_string(),
            side.to_string(),
        ];
        if self.rng.gen::<f64>() < self.config.missing_field_ratio {
            let index = self.rng.gen_range(0..fields.len());
            fields[index].clear();
        }
        fields.join(",")
    }

    /// Returns exactly `n` lines, advancing the generator state.
    pub fn take_lines(&mut self, n: usize) -> Vec<String> {
        (0..n).map(|_| self.next_line()).collect()
    }

    /// Returns the full stream of lines as defined by `config.num_lines`.
    pub fn all_lines(&mut self) -> Vec<String> {
        self.take_lines(self.config.num_lines)
    }
}
