//! Domain types for portfolio stress testing.
//!
//! - [`Holding`]: A requested position (ticker + share count)
//! - [`PricedHolding`]: A holding enriched with a live price, name and sector
//! - [`SectorWeight`]: Share of portfolio value held in one sector

mod holding;
mod sector;

pub use holding::{normalize_ticker, Holding, PricedHolding};
pub use sector::{sector_mix, SectorWeight};
