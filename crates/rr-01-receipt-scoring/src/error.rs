//! Error types for the receipt scoring subsystem

use thiserror::Error;

/// Reasons a receipt is rejected before scoring.
///
/// Callers outside this crate only ever see one generic "invalid receipt"
/// message; the variant is kept for logs and tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReceiptError {
    #[error("retailer contains disallowed characters")]
    InvalidRetailer,

    #[error("total is not a two-decimal amount")]
    InvalidTotal,

    #[error("purchase date is not a YYYY-MM-DD calendar date")]
    InvalidPurchaseDate,

    #[error("purchase time is not a 24-hour HH:MM clock time")]
    InvalidPurchaseTime,

    #[error("receipt has no items")]
    NoItems,

    #[error("item {index}: short description contains disallowed characters")]
    InvalidItemDescription { index: usize },

    #[error("item {index}: price is not a two-decimal amount")]
    InvalidItemPrice { index: usize },

    #[error("receipt could not be serialized: {0}")]
    Serialization(String),
}

/// Failures while applying the points rules to an already validated receipt.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    #[error("malformed amount in field {field}: {value:?}")]
    MalformedAmount { field: &'static str, value: String },
}

/// Anything that stops `process` from producing an ID.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProcessError {
    #[error("invalid receipt: {0}")]
    Invalid(#[from] ReceiptError),

    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}
