//! # Stresstest Ext HTTP
//!
//! Network collaborators for the stress test engine.
//!
//! - [`YahooQuoteSource`]: spot prices from the Yahoo Finance chart API
//! - [`GeminiTextGenerator`]: text from the Gemini `generateContent` API
//!
//! Both are configured once at startup and hold a shared `reqwest::Client`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod gemini;
mod yahoo;

pub use gemini::*;
pub use yahoo::*;

use stresstest_traits::TraitError;

/// Converts a reqwest transport error.
pub(crate) fn transport_error(service: &str, err: reqwest::Error) -> TraitError {
    if err.is_decode() {
        TraitError::ParseError(format!("{service}: {err}"))
    } else {
        TraitError::ConnectionFailed(format!("{service}: {err}"))
    }
}
