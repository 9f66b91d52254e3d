//! Receipt wire model.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single purchased line item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    /// Decimal string with two fractional digits, e.g. `"3.50"`.
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A purchase receipt as submitted by a client.
///
/// Field declaration order is the serialization order, and therefore part
/// of the receipt's identity. Do not reorder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// `YYYY-MM-DD`
    pub purchase_date: String,
    /// `HH:MM`, 24-hour clock
    pub purchase_time: String,
    /// Decimal string with two fractional digits.
    pub total: String,
    pub items: Vec<Item>,
}

/// A receipt that passed every format check.
///
/// Only [`crate::domain::validate`] builds one, so holding a
/// `ValidatedReceipt` is proof the date and time parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedReceipt {
    receipt: Receipt,
    purchase_date: NaiveDate,
    purchase_time: NaiveTime,
}

impl ValidatedReceipt {
    pub(crate) fn new(receipt: Receipt, purchase_date: NaiveDate, purchase_time: NaiveTime) -> Self {
        Self {
            receipt,
            purchase_date,
            purchase_time,
        }
    }

    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    pub fn into_inner(self) -> Receipt {
        self.receipt
    }
}
