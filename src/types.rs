//! Core data model: parsed order record, verdict, and run counters.
//!
//! Every [`Order`] attribute is optional: the record parser maps an empty
//! input field to `None` and the rule evaluator decides whether that is fatal.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt;

/// One submitted trading instruction parsed from a line of input.
///
/// Immutable once constructed; construction never fails regardless of which
/// fields are missing. [`Order::has_required_fields`] is the completeness
/// check; there is no other behavior beyond rendering.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Order {
    /// Submission time, second precision.
    pub timestamp: Option<NaiveDateTime>,
    /// Originator; scope for all per-entity rate and sequence state.
    pub broker: Option<String>,
    /// Order sequence number, scoped to the broker.
    pub sequence: Option<i64>,
    /// Order-type code.
    pub order_type: Option<String>,
    /// Instrument ticker.
    pub symbol: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<Decimal>,
    /// "Buy" / "Sell".
    pub side: Option<String>,
}

impl Order {
    /// True iff all eight attributes are present and string attributes are
    /// non-empty. Pure; never mutates.
    pub fn has_required_fields(&self) -> bool {
        self.timestamp.is_some()
            && self.broker.as_deref().map_or(false, |s| !s.is_empty())
            && self.sequence.is_some()
            && self.order_type.as_deref().map_or(false, |s| !s.is_empty())
            && self.symbol.as_deref().map_or(false, |s| !s.is_empty())
            && self.quantity.is_some()
            && self.price.is_some()
            && self.side.as_deref().map_or(false, |s| !s.is_empty())
    }

    /// `broker,sequence` audit line. An absent sequence renders as a single
    /// literal space, an absent broker as empty.
    pub fn broker_seq_line(&self) -> String {
        let broker = self.broker.as_deref().unwrap_or("");
        match self.sequence {
            Some(sequence) => format!("{},{}", broker, sequence),
            None => format!("{}, ", broker),
        }
    }
}

/// Renders an absent field as `-`; never substitutes zero for a missing numeric.
fn field<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "timestamp = {}, broker = {}, sequence = {}, type = {}, symbol = {}, quantity = {}, price = {}, side = {}",
            field(&self.timestamp),
            field(&self.broker),
            field(&self.sequence),
            field(&self.order_type),
            field(&self.symbol),
            field(&self.quantity),
            field(&self.price),
            field(&self.side),
        )
    }
}

/// Accepted/rejected outcome of evaluating one order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn from_accepted(accepted: bool) -> Self {
        if accepted {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Summary counters for one pipeline run.
///
/// Owned by the run invocation, never process-wide state. Lines skipped as
/// line-level errors count toward none of the three.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RunStats {
    pub processed: u64,
    pub accepted: u64,
    pub rejected: u64,
}
