//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for the HTTP gateway and tests
//! - Driven Ports (outbound) - Score persistence

pub mod inbound;
pub mod outbound;

pub use inbound::ReceiptRewardsApi;
pub use outbound::ScoreStore;
