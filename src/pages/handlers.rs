use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::http::response::{render, PageError};
use crate::pages::format::ResponseFormat;
use crate::pages::models::{ApiInfo, AuthIndex, Landing};
use crate::pages::templates::{ApiTemplate, AuthTemplate, IndexTemplate, PackageFormTemplate};

/// Methods each page answers to.
pub const PAGE_METHODS: &str = "GET,HEAD,OPTIONS";

/// Landing page.
pub async fn index(format: ResponseFormat) -> Result<Response, PageError> {
    match format {
        ResponseFormat::Json => Ok(Json(Landing::default()).into_response()),
        ResponseFormat::Html => render(&IndexTemplate),
    }
}

/// API metadata page.
pub async fn api_index(format: ResponseFormat) -> Result<Response, PageError> {
    let api_info = ApiInfo::current();
    match format {
        ResponseFormat::Json => Ok(Json(api_info).into_response()),
        ResponseFormat::Html => render(&ApiTemplate { api_info: &api_info }),
    }
}

/// Authentication endpoint map.
pub async fn auth_index(format: ResponseFormat) -> Result<Response, PageError> {
    let auth = AuthIndex::default();
    match format {
        ResponseFormat::Json => Ok(Json(auth).into_response()),
        // The page only sees the inner map, not the `endpoints` wrapper.
        ResponseFormat::Html => render(&AuthTemplate {
            endpoints: auth.endpoints.entries(),
        }),
    }
}

pub async fn package_form() -> Result<Response, PageError> {
    render(&PackageFormTemplate)
}

/// Answer OPTIONS with the allowed methods and an empty body.
pub async fn options() -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, PAGE_METHODS)])
}
