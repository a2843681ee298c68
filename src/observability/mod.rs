//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every request:
//!     → TraceLayer span (method, uri, x-request-id)
//!     → metrics.rs (counter + latency histogram)
//!
//! Consumers:
//!     → stdout (logging.rs, tracing-subscriber fmt layer)
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod logging;
pub mod metrics;
