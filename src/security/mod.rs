//! Response header policy.
//!
//! # Data Flow
//! ```text
//! Outgoing response (any route, any status):
//!     → headers.rs (add CORS headers)
//!     → Send to client
//! ```

pub mod headers;

pub use headers::{cors_headers, with_cors};
