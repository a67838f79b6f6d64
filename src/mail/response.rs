//! Send response value object.

use serde::Serialize;
use utoipa::ToSchema;

/// Outcome of one send request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SendResponse {
    /// HTTP status code.
    pub status: u16,
    /// Error message, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendResponse {
    /// Successful send.
    pub fn ok() -> Self {
        Self {
            status: 200,
            error: None,
        }
    }

    /// Failed send.
    pub fn failure(status: u16, error: impl Into<String>) -> Self {
        Self {
            status,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_has_no_error_field() {
        let json = serde_json::to_value(SendResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"status": 200}));
    }

    #[test]
    fn test_failure_serializes_error() {
        let response = SendResponse::failure(401, "Unrecognized API key");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"status": 401, "error": "Unrecognized API key"})
        );
    }
}
