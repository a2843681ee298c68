//! Response helpers and error mapping for page handlers.
//!
//! Failures surface as a bare 500 so the framework-default error shape is
//! kept; the detail only goes to the log.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("template render failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Page handler failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// Render a template into an HTML response.
pub fn render<T: Template>(template: &T) -> Result<Response, PageError> {
    Ok(Html(template.render()?).into_response())
}
