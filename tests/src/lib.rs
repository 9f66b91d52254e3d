//! # Receipt Rewards Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks for the scoring pipeline
//! └── src/
//!     ├── fixtures.rs   # Sample receipts shared by flows and benches
//!     └── integration/  # Cross-crate HTTP and concurrency flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p rr-tests
//!
//! # By category
//! cargo test -p rr-tests integration::
//!
//! # Benchmarks
//! cargo bench -p rr-tests
//! ```

pub mod fixtures;
pub mod integration;
