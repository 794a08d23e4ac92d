//! Stateful rule evaluator: the core acceptance engine.
//!
//! One [`Validator`] owns the per-broker history for a single input stream:
//! the latest minute bucket with its order count, and the last sequence
//! number processed. Rules run in a fixed short-circuit order; the history
//! update runs after the decision for every structurally complete order,
//! accepted or rejected.

use crate::types::Order;
use chrono::{NaiveDateTime, Timelike};
use log::debug;
use std::collections::{HashMap, HashSet};

/// Sequential rule evaluator with per-broker state.
///
/// Single-threaded: orders must be evaluated exactly once each, in arrival
/// order. Reordering changes rate-limit and duplicate-sequence outcomes.
#[derive(Clone, Debug)]
pub struct Validator {
    valid_symbols: HashSet<String>,
    orders_per_minute: u32,
    /// Per broker: most recently observed minute bucket and its order count.
    /// Exactly one entry per broker; not a history of all minutes.
    minute_counts: HashMap<String, (NaiveDateTime, u32)>,
    /// Per broker: most recently processed sequence number.
    last_sequences: HashMap<String, i64>,
}

impl Validator {
    /// Creates an evaluator with empty history.
    ///
    /// `valid_symbols` is matched exactly (case-sensitive);
    /// `orders_per_minute` is the maximum accepted from one broker within a
    /// single calendar minute.
    pub fn new(valid_symbols: HashSet<String>, orders_per_minute: u32) -> Self {
        Self {
            valid_symbols,
            orders_per_minute,
            minute_counts: HashMap::new(),
            last_sequences: HashMap::new(),
        }
    }

    /// Evaluates one order; returns `true` if accepted.
    ///
    /// Rules, short-circuit order: completeness, symbol membership, per-minute
    /// rate limit, duplicate sequence. A structurally incomplete order is
    /// rejected with no history update. Otherwise the broker's sequence and
    /// minute bucket are re-cached whatever the verdict: even a rejected
    /// order becomes the new baseline for the next order from that broker.
    pub fn evaluate(&mut self, order: &Order) -> bool {
        if !order.has_required_fields() {
            debug!("rejected incomplete order: {}", order);
            return false;
        }

        let accepted = self.has_valid_symbol(order)
            && !self.exceeds_minute_limit(order)
            && self.is_new_sequence(order);
        self.cache_broker_stats(order);
        debug!(
            "verdict={} broker={:?} sequence={:?}",
            if accepted { "accepted" } else { "rejected" },
            order.broker,
            order.sequence
        );
        accepted
    }

    /// Last sequence cached for `broker`, if any. Rejected orders update this too.
    pub fn last_sequence(&self, broker: &str) -> Option<i64> {
        self.last_sequences.get(broker).copied()
    }

    /// Latest minute bucket cached for `broker`: (minute, count in that minute).
    pub fn minute_count(&self, broker: &str) -> Option<(NaiveDateTime, u32)> {
        self.minute_counts.get(broker).copied()
    }

    fn has_valid_symbol(&self, order: &Order) -> bool {
        order
            .symbol
            .as_deref()
            .map_or(false, |s| self.valid_symbols.contains(s))
    }

    /// Pre-update read: the order bringing the count TO the limit is still
    /// accepted; only orders arriving after the limit is reached, in the same
    /// cached minute, are rejected.
    fn exceeds_minute_limit(&self, order: &Order) -> bool {
        let (broker, minute) = match (order.broker.as_deref(), order.timestamp) {
            (Some(broker), Some(ts)) => (broker, truncate_to_minute(ts)),
            _ => return false,
        };
        match self.minute_counts.get(broker) {
            Some((bucket, count)) => *bucket == minute && *count >= self.orders_per_minute,
            None => false,
        }
    }

    /// Compares only the single most-recently-cached sequence, so a sequence
    /// number may repeat non-consecutively and be accepted again.
    fn is_new_sequence(&self, order: &Order) -> bool {
        match (order.broker.as_deref(), order.sequence) {
            (Some(broker), Some(sequence)) => {
                self.last_sequences.get(broker) != Some(&sequence)
            }
            _ => true,
        }
    }

    /// Unconditional post-decision write for complete orders: re-caches the
    /// sequence and either starts a new minute bucket at 1 or bumps the
    /// current one. Entries are replaced as values, never aliased.
    fn cache_broker_stats(&mut self, order: &Order) {
        let (broker, sequence, ts) = match (&order.broker, order.sequence, order.timestamp) {
            (Some(broker), Some(sequence), Some(ts)) => (broker, sequence, ts),
            _ => return,
        };
        self.last_sequences.insert(broker.clone(), sequence);

        let minute = truncate_to_minute(ts);
        let next = match self.minute_counts.get(broker) {
            Some((bucket, count)) if *bucket == minute => (minute, count + 1),
            _ => (minute, 1),
        };
        self.minute_counts.insert(broker.clone(), next);
    }
}

/// Timestamp truncated to second zero: the minute-bucket key.
fn truncate_to_minute(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_second(0).unwrap_or(ts)
}
