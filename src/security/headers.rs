//! Cross-origin response headers.
//!
//! Three fixed headers go on every response the router produces: page
//! responses, the 404 fallback, 405s and 500s alike. Only headers are
//! touched; status and body pass through unchanged.
//!
//! PUT and DELETE are advertised even though no page implements them.

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type,Authorization";
pub const ALLOW_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS";

/// The CORS headers, in the order they are applied.
pub fn cors_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ),
    ]
}

/// Wrap a router (fallback included) so every response carries the CORS
/// headers.
pub fn with_cors(router: Router) -> Router {
    cors_headers()
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(name, value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    fn assert_cors(headers: &axum::http::HeaderMap) {
        for (name, value) in cors_headers() {
            assert_eq!(headers.get(&name), Some(&value), "{name}");
        }
    }

    #[tokio::test]
    async fn headers_added_to_routed_response() {
        let app = with_cors(Router::new().route("/", get(|| async { "ok" })));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(response.headers());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn headers_added_to_fallback() {
        let app = with_cors(Router::new().route("/", get(|| async { "ok" })));
        let response = app
            .oneshot(Request::get("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_cors(response.headers());
    }

    #[tokio::test]
    async fn existing_value_is_replaced_not_duplicated() {
        let app = with_cors(Router::new().route(
            "/",
            get(|| async { ([(header::ACCESS_CONTROL_ALLOW_ORIGIN, "https://example.com")], "ok") }),
        ));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let values: Vec<_> = response
            .headers()
            .get_all(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .iter()
            .collect();
        assert_eq!(values, vec![HeaderValue::from_static(ALLOW_ORIGIN)]);
    }
}
