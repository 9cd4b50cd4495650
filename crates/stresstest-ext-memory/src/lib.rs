//! # Stresstest Ext Memory
//!
//! In-memory collaborators for the stress test engine.
//!
//! This crate provides default implementations for testing and offline demos:
//! - [`InMemoryQuoteSource`]: static quote table
//! - [`ScriptedTextGenerator`]: replays canned responses
//! - [`FailingTextGenerator`]: always errors
//!
//! For live data, use the HTTP extension.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod quotes;
mod text;

pub use quotes::*;
pub use text::*;
