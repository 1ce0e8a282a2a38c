//! Replicheck server - HTTP REST API for question replica detection.
//!
//! Accepts a batch of natural-language questions, fetches one embedding per
//! question from the configured embedding provider, scores every unique
//! question pair, and reports which pairs are replicas of each other.
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `POST /api/questions/replica-check` - pairwise replica detection
//! - `GET /api/questions/sample-questions` - bundled sample dataset
//! - `GET /api/questions/health` - liveness probe
//! - `POST /api/index/initialize` - reset the vector index to a dimension
//! - `POST /api/index/add` - embed texts and add them to the index
//! - `POST /api/index/search` - embed a query and search the index
//! - `GET /api/index/stats` - index size and dimension
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

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
