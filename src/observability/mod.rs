//! Observability for todokv
//!
//! Provides:
//! - Structured logging (JSON lines)
//! - Store operation counters
//!
//! # Usage
//!
//! ```ignore
//! use todokv::observability::{Logger, StoreMetrics};
//!
//! Logger::info("SERVER_STARTED", &[("addr", "0.0.0.0:8080")]);
//!
//! let metrics = StoreMetrics::new();
//! metrics.increment_reads();
//! ```

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsSnapshot, StoreMetrics};
