//! # HTTP Server Module
//!
//! Axum front end for the record store.
//!
//! # Endpoints
//!
//! - `/entry/:id` - Read, upsert (JSON body) or delete one record
//! - `/entry/:id/:title/:completed` - Upsert from path segments
//! - `/list` - All records as `{"todos": [...]}`
//! - `/health` - Health check
//! - `/metrics` - Store operation counters

pub mod config;
pub mod entry_routes;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
