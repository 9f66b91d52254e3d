//! Sample receipts from the repository's `receipts/` directory, with the
//! points each one is worth.

use rr_01_receipt_scoring::{Points, Receipt};

/// `(file name, raw JSON, expected points)`
pub const SAMPLE_RECEIPTS: [(&str, &str, Points); 4] = [
    (
        "receipt1.json",
        include_str!("../../receipts/receipt1.json"),
        28,
    ),
    (
        "receipt2.json",
        include_str!("../../receipts/receipt2.json"),
        109,
    ),
    (
        "receipt3.json",
        include_str!("../../receipts/receipt3.json"),
        15,
    ),
    (
        "receipt4.json",
        include_str!("../../receipts/receipt4.json"),
        53,
    ),
];

/// Parse a sample receipt. Panics on malformed fixtures.
pub fn sample_receipt(index: usize) -> Receipt {
    let (name, json, _) = SAMPLE_RECEIPTS[index];
    serde_json::from_str(json).unwrap_or_else(|e| panic!("fixture {name} is malformed: {e}"))
}
