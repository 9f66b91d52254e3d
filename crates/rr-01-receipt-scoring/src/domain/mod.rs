//! Domain Layer
//!
//! Pure receipt logic: model, validation, identity and the points rules.

pub mod identity;
pub mod receipt;
pub mod rules;
pub mod validation;

pub use identity::{identify, ReceiptId};
pub use receipt::{Item, Receipt, ValidatedReceipt};
pub use rules::{score, Points, PointsBreakdown};
pub use validation::validate;
