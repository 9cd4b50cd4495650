//! Request handlers.

pub mod health;
pub mod scenarios;
pub mod stress;
pub mod tickers;
