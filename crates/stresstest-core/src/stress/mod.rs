//! Stress testing for portfolios.
//!
//! This module provides stress testing capabilities including:
//! - Scenario definitions and the static fallback set
//! - Scenario application against a current portfolio value
//! - The assembled stress test report
//!
//! Every scenario is a uniform percentage move of total portfolio value.
//! No per-holding repricing is performed.

mod impact;
mod report;
mod scenarios;

pub use impact::*;
pub use report::*;
pub use scenarios::*;
