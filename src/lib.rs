//! todokv - An in-memory todo record store served over HTTP

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
