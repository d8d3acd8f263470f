//! SwipeCard Server - read-only HTTP data server for the swipe deck
//!
//! Serves the photo deck and the profile shown in the bio panel from any
//! [`profile::Storage`]. There are no write endpoints.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /photos`, `GET /api/photos` - the deck, in swipe order
//! - `GET /profile`, `GET /api/profile` - the profile, age derived per request
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//!
//! Read failures answer 500 with `{"message": "Failed to fetch photos"}` or
//! `{"message": "Failed to fetch profile"}`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ErrorResponse, ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
