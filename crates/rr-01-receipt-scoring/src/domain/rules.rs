//! Points rules.
//!
//! Seven independent, additive rules:
//!
//! | # | Rule | Points |
//! |---|------|--------|
//! | 1 | alphanumeric characters in the retailer name | 1 each |
//! | 2 | total is a whole amount | 50 |
//! | 3 | total is a multiple of 0.25 | 25 |
//! | 4 | every two items | 5 |
//! | 5 | trimmed description length is a multiple of 3 | ceil(price * 0.2) |
//! | 6 | purchase day is odd | 6 |
//! | 7 | purchase time strictly between 14:00 and 16:00 | 10 |
//!
//! Amounts are parsed as `f64`. Every amount that passes validation has at
//! most two decimals, so rules 2 and 3 compare exactly.

use chrono::{Datelike, NaiveTime, Timelike};
use serde::Serialize;

use crate::domain::receipt::{Item, ValidatedReceipt};
use crate::error::ScoringError;

/// Rewards points for one receipt.
pub type Points = u64;

const ROUND_TOTAL_BONUS: Points = 50;
const QUARTER_MULTIPLE_BONUS: Points = 25;
const ITEM_PAIR_BONUS: Points = 5;
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
const ODD_DAY_BONUS: Points = 6;
const AFTERNOON_BONUS: Points = 10;
const AFTERNOON_START_MINUTE: u32 = 14 * 60;
const AFTERNOON_END_MINUTE: u32 = 16 * 60;

/// Per-rule contributions for one receipt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer_name: Points,
    pub round_total: Points,
    pub quarter_multiple: Points,
    pub item_pairs: Points,
    pub item_descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
}

impl PointsBreakdown {
    /// Apply every rule to a validated receipt.
    pub fn for_receipt(validated: &ValidatedReceipt) -> Result<Self, ScoringError> {
        let receipt = validated.receipt();
        let total = parse_amount("total", &receipt.total)?;

        Ok(Self {
            retailer_name: retailer_name_points(&receipt.retailer),
            round_total: round_total_points(total),
            quarter_multiple: quarter_multiple_points(total),
            item_pairs: item_pair_points(receipt.items.len()),
            item_descriptions: item_description_points(&receipt.items)?,
            odd_day: odd_day_points(validated.purchase_date().day()),
            afternoon: afternoon_points(validated.purchase_time()),
        })
    }

    pub fn total(&self) -> Points {
        [
            self.retailer_name,
            self.round_total,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .iter()
        .fold(0, |acc: Points, p| acc.saturating_add(*p))
    }
}

/// Score a validated receipt.
pub fn score(validated: &ValidatedReceipt) -> Result<Points, ScoringError> {
    PointsBreakdown::for_receipt(validated).map(|b| b.total())
}

/// Rule 1
pub fn retailer_name_points(retailer: &str) -> Points {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as Points
}

/// Rule 2
pub fn round_total_points(total: f64) -> Points {
    if total.fract() == 0.0 {
        ROUND_TOTAL_BONUS
    } else {
        0
    }
}

/// Rule 3
pub fn quarter_multiple_points(total: f64) -> Points {
    if total % 0.25 == 0.0 {
        QUARTER_MULTIPLE_BONUS
    } else {
        0
    }
}

/// Rule 4
pub fn item_pair_points(item_count: usize) -> Points {
    (item_count / 2) as Points * ITEM_PAIR_BONUS
}

/// Rule 5
pub fn item_description_points(items: &[Item]) -> Result<Points, ScoringError> {
    let mut points: Points = 0;
    for item in items {
        let price = parse_amount("price", &item.price)?;
        if item.short_description.trim().chars().count() % 3 == 0 {
            // Saturating float-to-int cast; a validated price is never negative.
            let bonus = (price * DESCRIPTION_PRICE_MULTIPLIER).ceil() as Points;
            points = points.saturating_add(bonus);
        }
    }
    Ok(points)
}

/// Rule 6
pub fn odd_day_points(day_of_month: u32) -> Points {
    if day_of_month % 2 == 1 {
        ODD_DAY_BONUS
    } else {
        0
    }
}

/// Rule 7: 14:00 and 16:00 themselves do not qualify.
pub fn afternoon_points(time: NaiveTime) -> Points {
    let minute_of_day = time.hour() * 60 + time.minute();
    if minute_of_day > AFTERNOON_START_MINUTE && minute_of_day < AFTERNOON_END_MINUTE {
        AFTERNOON_BONUS
    } else {
        0
    }
}

fn parse_amount(field: &'static str, value: &str) -> Result<f64, ScoringError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScoringError::MalformedAmount {
            field,
            value: value.to_string(),
        })
}
