//! Authentication API front-end library.
//!
//! Serves informational pages about the authentication API, each with a
//! JSON form selected by `?format=json`, plus a static package form.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod security;

pub use config::FrontendConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
