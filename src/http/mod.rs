//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (x-request-id)
//!     → pages (route match, format flag, render)
//!     → response.rs (HTML rendering, error mapping)
//!     → security::headers (CORS)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::PageError;
pub use server::HttpServer;
