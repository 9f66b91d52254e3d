//! Receipt format validation.
//!
//! Checks run in a fixed order and stop at the first failure. Character
//! classes are ASCII-only: `[[:word:]]` is `[0-9A-Za-z_]` and whitespace is
//! `[\t\n\f\r ]` (no vertical tab).

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::receipt::{Receipt, ValidatedReceipt};
use crate::error::ReceiptError;

static RETAILER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[[:word:]\t\n\f\r \-&]+$").expect("Invalid retailer regex")
});

static DESCRIPTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[[:word:]\t\n\f\r \-]+$").expect("Invalid description regex")
});

static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("Invalid amount regex")
});

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date regex")
});

static TIME_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").expect("Invalid time regex")
});

/// Validate a deserialized receipt.
///
/// Returns the receipt together with its parsed date and time, or the first
/// rule that failed.
pub fn validate(receipt: Receipt) -> Result<ValidatedReceipt, ReceiptError> {
    if !RETAILER_PATTERN.is_match(&receipt.retailer) {
        return Err(ReceiptError::InvalidRetailer);
    }

    if !is_amount(&receipt.total) {
        return Err(ReceiptError::InvalidTotal);
    }

    let purchase_date = parse_date(&receipt.purchase_date)?;
    let purchase_time = parse_time(&receipt.purchase_time)?;

    if receipt.items.is_empty() {
        return Err(ReceiptError::NoItems);
    }

    for (index, item) in receipt.items.iter().enumerate() {
        if !DESCRIPTION_PATTERN.is_match(&item.short_description) {
            return Err(ReceiptError::InvalidItemDescription { index });
        }
        if !is_amount(&item.price) {
            return Err(ReceiptError::InvalidItemPrice { index });
        }
    }

    Ok(ValidatedReceipt::new(receipt, purchase_date, purchase_time))
}

/// Two-decimal amount that also parses to a finite `f64`, so the points
/// rules can always read it.
fn is_amount(value: &str) -> bool {
    AMOUNT_PATTERN.is_match(value) && value.parse::<f64>().is_ok_and(f64::is_finite)
}

fn parse_date(value: &str) -> Result<NaiveDate, ReceiptError> {
    if !DATE_SHAPE.is_match(value) {
        return Err(ReceiptError::InvalidPurchaseDate);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ReceiptError::InvalidPurchaseDate)
}

fn parse_time(value: &str) -> Result<NaiveTime, ReceiptError> {
    if !TIME_SHAPE.is_match(value) {
        return Err(ReceiptError::InvalidPurchaseTime);
    }
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ReceiptError::InvalidPurchaseTime)
}
