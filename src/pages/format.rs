//! Response format selection.
//!
//! Pages switch to JSON on the `format` query flag rather than on the
//! `Accept` header. Only the exact value `json` selects JSON.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

/// Query parameter that switches a page to its JSON form.
pub const FORMAT_PARAM: &str = "format";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Html,
    Json,
}

impl ResponseFormat {
    /// Map the raw flag value to a format.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("json") => Self::Json,
            _ => Self::Html,
        }
    }
}

impl<S> FromRequestParts<S> for ResponseFormat
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // An undecodable query string is treated like an absent flag.
        let flag = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(pairs)| {
                pairs
                    .into_iter()
                    .find(|(key, _)| key == FORMAT_PARAM)
                    .map(|(_, value)| value)
            });
        Ok(Self::from_flag(flag.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> ResponseFormat {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ResponseFormat::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn only_exact_json_selects_json() {
        assert_eq!(extract("/api?format=json").await, ResponseFormat::Json);
        assert_eq!(extract("/api").await, ResponseFormat::Html);
        assert_eq!(extract("/api?format=JSON").await, ResponseFormat::Html);
        assert_eq!(extract("/api?format=html").await, ResponseFormat::Html);
        assert_eq!(extract("/api?format=").await, ResponseFormat::Html);
        assert_eq!(extract("/api?fmt=json").await, ResponseFormat::Html);
    }

    #[tokio::test]
    async fn first_flag_wins() {
        assert_eq!(extract("/?format=json&format=html").await, ResponseFormat::Json);
        assert_eq!(extract("/?format=html&format=json").await, ResponseFormat::Html);
    }

    #[tokio::test]
    async fn other_params_are_ignored() {
        assert_eq!(extract("/?page=2&format=json&x=1").await, ResponseFormat::Json);
    }
}
