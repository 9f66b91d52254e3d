//! # Integration Tests
//!
//! - `http_flows`: submit and look up receipts through the full gateway router
//! - `concurrency`: parallel submissions against one shared service

pub mod concurrency;
pub mod http_flows;
