//! Portfolio stress test REST server.
//!
//! ## Endpoints
//!
//! - `GET  /api/health`
//! - `POST /api/validate-ticker`
//! - `GET  /api/search-stocks?q=`
//! - `POST /api/stress-test`
//! - `GET  /api/scenarios`
//!
//! ## Usage
//!
//! ```bash
//! # Live quotes, generator enabled when GEMINI_API_KEY is set
//! stresstest-server
//!
//! # Static quote table, no network access
//! stresstest-server --offline --port 3000
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::{create_router, create_router_with_cors, run_server};
pub use state::AppState;
