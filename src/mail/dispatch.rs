//! Mail dispatcher.
//!
//! Turns one inbound send request into exactly one outbound message, or a
//! well-defined error. Validation stops at the first violation and the
//! transport is only invoked once every check has passed.

use std::sync::Arc;

use tracing::{debug, warn};

use super::request::SendRequest;
use super::transport::Mailer;
use super::types::OutboundMessage;
use crate::application::{ApiKeyRegistry, ApplicationDirectory};
use crate::{RelayError, Result};

/// Error message for an API key that is not recognized.
pub const UNRECOGNIZED_API_KEY: &str = "Unrecognized API key";

/// Error message for a request with neither HTML nor text content.
pub const MISSING_CONTENT: &str = "Missing content";

/// Error message for a request without recipients.
pub const NO_RECIPIENTS: &str = "No recipient addresses";

/// Validates send requests and hands them to the transport.
#[derive(Clone)]
pub struct MailDispatcher {
    directory: ApplicationDirectory,
    mailer: Arc<dyn Mailer>,
    legacy_keys: Option<Arc<ApiKeyRegistry>>,
}

impl MailDispatcher {
    /// Create a dispatcher authorizing against the directory only.
    pub fn new(directory: ApplicationDirectory, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            directory,
            mailer,
            legacy_keys: None,
        }
    }

    /// Also accept keys that are enabled in the static registry.
    pub fn with_legacy_keys(mut self, registry: Arc<ApiKeyRegistry>) -> Self {
        self.legacy_keys = Some(registry);
        self
    }

    /// Parse a raw JSON body and send it.
    pub async fn dispatch(&self, body: &[u8]) -> Result<()> {
        let request = SendRequest::from_json(body)?;
        self.send(&request).await
    }

    /// Authorize, validate, build and send one request.
    pub async fn send(&self, request: &SendRequest) -> Result<()> {
        if !self.is_authorized(request.api_key()).await? {
            warn!("Rejected send request with unrecognized API key");
            return Err(RelayError::Unauthorized(UNRECOGNIZED_API_KEY.to_string()));
        }

        let message = build_outbound(request)?;
        if message.to.is_empty() {
            return Err(RelayError::DeliveryFailed(NO_RECIPIENTS.to_string()));
        }

        debug!(
            recipients = message.to.len(),
            html = message.body.is_html(),
            "Handing message to transport"
        );

        self.mailer.send(&message).await.map_err(|e| {
            warn!(error = %e, "Transport failed");
            RelayError::from(e)
        })
    }

    async fn is_authorized(&self, api_key: &str) -> Result<bool> {
        if self.directory.exists_with_api_key(api_key).await? {
            return Ok(true);
        }
        let Some(registry) = &self.legacy_keys else {
            return Ok(false);
        };
        if registry.exists(api_key) && !registry.is_enabled(api_key) {
            debug!("Legacy API key is disabled");
        }
        Ok(registry.is_enabled(api_key))
    }
}

/// Build the transport message for a request.
///
/// Fails with `InvalidArgument` when the request has no content and with
/// `InvalidAddress` when the sender or a recipient cannot be converted.
pub fn build_outbound(request: &SendRequest) -> Result<OutboundMessage> {
    let body = request
        .body()
        .ok_or_else(|| RelayError::invalid_argument(MISSING_CONTENT))?;

    let from = request.sender().to_mailbox()?;
    let to = request
        .recipients()
        .iter()
        .map(|recipient| recipient.to_mailbox())
        .collect::<Result<Vec<_>>>()?;

    Ok(OutboundMessage {
        from,
        to,
        subject: request.subject().to_string(),
        body,
    })
}
