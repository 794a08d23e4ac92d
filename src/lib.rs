//! # Orders Validator
//!
//! Sequential order-record validation pipeline: parse comma-delimited order
//! records, apply per-broker business rules (symbol membership, per-minute
//! rate limit, duplicate sequence number), and partition accepted/rejected
//! output streams with a broker/sequence audit trail.
//!
//! ## Entry point
//!
//! Use [`Validator`] for the rule engine alone, or [`pipeline::run`] /
//! [`pipeline::run_file`] to drive a whole stream into a [`VerdictSink`].
//!
//! ## Example
//!
//! ```rust
//! use orders_validator::{parse_order, Validator};
//! use std::collections::HashSet;
//!
//! let symbols: HashSet<String> = ["BARK".to_string()].into_iter().collect();
//! let mut validator = Validator::new(symbols, 3);
//!
//! let order = parse_order("1/5/2014 08:30:44,Fidelity,1,K,BARK,100,42.50,Buy").unwrap();
//! assert!(validator.evaluate(&order));
//!
//! let duplicate = parse_order("1/5/2014 08:30:45,Fidelity,1,K,BARK,100,42.50,Buy").unwrap();
//! assert!(!validator.evaluate(&duplicate));
//! ```
//!
//! ## Lower-level API
//!
//! [`Fields`] and [`parse_order`] expose the record parser directly, and
//! [`stream_gen::Generator`] produces deterministic synthetic input for
//! benches and property tests.

pub mod audit;
pub mod config;
pub mod parser;
pub mod pipeline;
pub mod stream_gen;
pub mod types;
pub mod validator;

pub use audit::{FileSinks, MemorySink, VerdictSink};
pub use config::Config;
pub use parser::{parse_order, Fields, ParseError, TIMESTAMP_FORMAT};
pub use pipeline::{run, run_file};
pub use stream_gen::{Generator, GeneratorConfig};
pub use types::{Order, RunStats, Verdict};
pub use validator::Validator;
