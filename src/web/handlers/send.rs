//! Send handler.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::mail::SendResponse;
use crate::web::error::{ErrorCode, INTERNAL_ERROR_MESSAGE};
use crate::web::handlers::AppState;

/// GET|POST /api/send - Relay one message.
///
/// The body is read raw so that a missing or wrong content type does not
/// reject the request. Every failure is answered with 500 unless
/// `server.distinct_error_status` is set. The response status always
/// matches the `status` field of the body.
#[utoipa::path(
    post,
    path = "/api/send",
    tag = "send",
    request_body(content = crate::mail::SendRequestPayload, description = "Message to relay"),
    responses(
        (status = 200, description = "Message handed to the transport", body = SendResponse),
        (status = 400, description = "Malformed body, missing field, missing content or invalid address (distinct statuses only)", body = SendResponse),
        (status = 401, description = "Unrecognized API key (distinct statuses only)", body = SendResponse),
        (status = 500, description = "Any failure", body = SendResponse),
        (status = 502, description = "Transport failure (distinct statuses only)", body = SendResponse)
    )
)]
pub async fn send_mail(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> (StatusCode, Json<SendResponse>) {
    match state.dispatcher.dispatch(&body).await {
        Ok(()) => (StatusCode::OK, Json(SendResponse::ok())),
        Err(e) => {
            let code = ErrorCode::from(&e);
            let message = if code == ErrorCode::InternalError {
                tracing::error!("Send failed: {}", e);
                INTERNAL_ERROR_MESSAGE.to_string()
            } else {
                tracing::info!(code = ?code, "Send rejected: {}", e);
                e.to_string()
            };

            let status = state.failure_status(code);

            (
                status,
                Json(SendResponse::failure(status.as_u16(), message)),
            )
        }
    }
}
