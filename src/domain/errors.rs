use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recoverable trade failures. Every variant carries enough context for a
/// caller to branch programmatically; rendering to user-facing text lives
/// in the reporting service.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum TradeError {
    #[error("insufficient funds: required {required:.2}, available {available:.2}")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("no position held in {symbol}")]
    NoPosition { symbol: String },

    #[error("insufficient shares of {symbol}: held {held}, requested {requested}")]
    InsufficientShares {
        symbol: String,
        held: u64,
        requested: u64,
    },
}

#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", content = "message")]
pub enum ValidationError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Value must be non-negative")]
    MustBeNonNegative,

    #[error("Value must be finite")]
    MustBeFinite,
}

impl From<ValidationError> for String {
    fn from(error: ValidationError) -> Self {
        error.to_string()
    }
}
