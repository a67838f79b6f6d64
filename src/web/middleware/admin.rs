//! Admin token authentication.

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::web::error::ApiError;

/// State for the admin token check.
#[derive(Clone)]
pub struct AdminState {
    token: String,
}

impl AdminState {
    /// Create admin state with the expected bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Check a presented token.
    pub fn is_valid(&self, presented: &str) -> bool {
        !self.token.is_empty() && constant_time_eq(self.token.as_bytes(), presented.as_bytes())
    }
}

impl std::fmt::Debug for AdminState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminState").finish_non_exhaustive()
    }
}

/// Reject requests without `Authorization: Bearer <admin token>`.
pub async fn require_admin(
    admin_state: Arc<AdminState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) if admin_state.is_valid(token) => next.run(request).await,
        Some(_) => {
            tracing::warn!("Rejected admin request with invalid token");
            ApiError::unauthorized("Invalid admin token").into_response()
        }
        None => ApiError::unauthorized("Missing authorization").into_response(),
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
