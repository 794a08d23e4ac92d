//! Record parser: splits one raw comma-delimited line into typed fields.
//!
//! An empty field at any position is "missing" (`None`), not an error; a
//! non-empty field that fails to parse as its type fails the whole line.

use crate::types::Order;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt;

/// Input timestamp format, e.g. `1/5/2014 08:30:44`. `%m` and `%d` accept one
/// or two digits.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Why a line could not be parsed into an [`Order`]. Carries the offending
/// raw field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    BadTimestamp(String),
    BadSequence(String),
    BadQuantity(String),
    BadPrice(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadTimestamp(raw) => write!(f, "unparsable timestamp: {}", raw),
            ParseError::BadSequence(raw) => write!(f, "unparsable sequence: {}", raw),
            ParseError::BadQuantity(raw) => write!(f, "unparsable quantity: {}", raw),
            ParseError::BadPrice(raw) => write!(f, "unparsable price: {}", raw),
        }
    }
}

impl std::error::Error for ParseError {}

/// One raw line split on commas, trailing empty fields kept.
///
/// Reading an out-of-range or empty position yields `None` rather than an
/// error; downstream validation decides whether that is fatal.
#[derive(Clone, Debug)]
pub struct Fields<'a> {
    values: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    pub fn split(line: &'a str) -> Self {
        Self {
            values: line.split(',').collect(),
        }
    }

    /// Field at `index`; `None` if out of range or empty.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.values.get(index).copied().filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Missing stays missing; a present value must parse.
fn parse_field<T: std::str::FromStr>(raw: Option<&str>) -> Result<Option<T>, String> {
    match raw {
        Some(s) => s.parse::<T>().map(Some).map_err(|_| s.to_string()),
        None => Ok(None),
    }
}

/// Parses one comma-delimited record into an [`Order`].
///
/// Positions: timestamp, broker, sequence, type, symbol, quantity, price,
/// side. Empty positions become `None`; a malformed non-empty position is an
/// error for this line only.
pub fn parse_order(line: &str) -> Result<Order, ParseError> {
    let fields = Fields::split(line);
    let timestamp = match fields.get(0) {
        Some(raw) => Some(
            NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
                .map_err(|_| ParseError::BadTimestamp(raw.to_string()))?,
        ),
        None => None,
    };
    let broker = fields.get(1).map(str::to_string);
    let sequence = parse_field::<i64>(fields.get(2)).map_err(ParseError::BadSequence)?;
    let order_type = fields.get(3).map(str::to_string);
    let symbol = fields.get(4).map(str::to_string);
    let quantity = parse_field::<i64>(fields.get(5)).map_err(ParseError::BadQuantity)?;
    let price = parse_field::<Decimal>(fields.get(6)).map_err(ParseError::BadPrice)?;
    let side = fields.get(7).map(str::to_string);

    Ok(Order {
        timestamp,
        broker,
        sequence,
        order_type,
        symbol,
        quantity,
        price,
        side,
    })
}
