//! Informational pages describing the authentication API.
//!
//! # Routes
//! ```text
//! GET /               landing page       (?format=json → Landing)
//! GET /api            API metadata       (?format=json → ApiInfo)
//! GET /api/auth       auth endpoint map  (?format=json → AuthIndex)
//! GET /package-form   package form       (HTML only)
//! ```
//!
//! Each route also answers HEAD and OPTIONS; any other method gets the
//! framework's 405.

pub mod format;
pub mod handlers;
pub mod models;
pub mod templates;

use axum::routing::get;
use axum::Router;

use self::handlers::*;

pub use format::{ResponseFormat, FORMAT_PARAM};
pub use models::{ApiInfo, AuthIndex, EndpointIndex, EndpointMap, Landing};

pub fn setup_pages_router() -> Router {
    Router::new()
        .route("/", get(index).options(options))
        .route("/api", get(api_index).options(options))
        .route("/api/auth", get(auth_index).options(options))
        .route("/package-form", get(package_form).options(options))
}
