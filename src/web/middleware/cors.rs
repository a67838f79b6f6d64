//! CORS configuration.

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

const METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Create a CORS layer from `server.cors_origins`.
///
/// An empty or entirely unparsable list allows any origin. Credentials are
/// never allowed since both the send and admin surfaces authenticate with
/// explicit keys.
pub fn create_cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(METHODS);

    if parsed.is_empty() {
        layer.allow_headers(Any).allow_origin(Any)
    } else {
        layer
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
            .allow_origin(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::post, Router};
    use tower::util::ServiceExt;

    async fn preflight(origins: &[String], origin: &str) -> Option<HeaderValue> {
        let app = Router::new()
            .route("/api/send", post(|| async { "OK" }))
            .layer(create_cors_layer(origins));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/send")
                    .header("Origin", origin)
                    .header("Access-Control-Request-Method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get("access-control-allow-origin")
            .cloned()
    }

    #[tokio::test]
    async fn test_empty_origins_allow_any() {
        let allowed = preflight(&[], "http://example.com").await;
        assert_eq!(allowed.unwrap(), "*");
    }

    #[tokio::test]
    async fn test_listed_origin_allowed() {
        let origins = vec!["http://localhost:3000".to_string()];
        let allowed = preflight(&origins, "http://localhost:3000").await;
        assert_eq!(allowed.unwrap(), "http://localhost:3000");
    }

    #[tokio::test]
    async fn test_unlisted_origin_not_allowed() {
        let origins = vec!["http://localhost:3000".to_string()];
        let allowed = preflight(&origins, "http://evil.example").await;
        assert!(allowed.is_none());
    }
}
