//! # RR-01 Receipt Scoring
//!
//! Rewards points engine for purchase receipts.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure business logic, no I/O
//!   - `Receipt` / `Item`: Wire model of an inbound receipt
//!   - `validate`: Format checks producing a `ValidatedReceipt`
//!   - `ReceiptId`: Content-addressed identifier (SHA-256 of the receipt)
//!   - `rules`: The seven additive points rules
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `ReceiptRewardsApi`: Driving port (process / look up)
//!   - `ScoreStore`: Driven port (ID -> points map)
//!
//! - **Adapters Layer** (`adapters/`): Port implementations
//!   - `InMemoryScoreStore`: Process-lifetime store behind a `RwLock`
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `RewardsService`: Implements `ReceiptRewardsApi`
//!
//! ## Flow
//!
//! ```text
//! Receipt ──validate──→ ValidatedReceipt ──identify──→ ReceiptId
//!                              │                          │
//!                              └────────score─────────────┤
//!                                                         ↓
//!                                          ScoreStore::insert_if_absent
//! ```
//!
//! ## Invariants
//!
//! - The ID is a pure function of the receipt's serialized content.
//! - A score is written at most once per ID; later writes are no-ops.
//!
//! ## Usage Example
//!
//! ```ignore
//! use rr_01_receipt_scoring::{InMemoryScoreStore, ReceiptRewardsApi, RewardsService};
//! use std::sync::Arc;
//!
//! let service = RewardsService::new(Arc::new(InMemoryScoreStore::new()));
//! let id = service.process(receipt)?;
//! assert_eq!(service.points(&id), Some(53));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::InMemoryScoreStore;
pub use domain::{
    identify, score, validate, Item, Points, PointsBreakdown, Receipt, ReceiptId,
    ValidatedReceipt,
};
pub use error::{ProcessError, ReceiptError, ScoringError};
pub use ports::{ReceiptRewardsApi, ScoreStore};
pub use service::RewardsService;
