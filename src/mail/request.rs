//! Send request value object and its parsing from a JSON body.

use serde::Deserialize;
use utoipa::ToSchema;

use super::contact::{Contact, ContactPayload};
use super::types::MessageBody;
use crate::{RelayError, Result};

/// Send request as it appears in a request body.
///
/// Every field is optional at this stage so that missing fields are reported
/// as validation failures rather than JSON errors.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendRequestPayload {
    /// API key of the sending application (required).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Sender (required).
    #[serde(default)]
    pub sender: Option<ContactPayload>,
    /// Subject line (required).
    #[serde(default)]
    pub subject: Option<String>,
    /// Recipients.
    #[serde(default)]
    pub recipients: Vec<ContactPayload>,
    /// HTML body. Takes precedence over `text`.
    #[serde(default)]
    pub html: Option<String>,
    /// Plain-text body.
    #[serde(default)]
    pub text: Option<String>,
}

/// One mail job submitted by an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    api_key: String,
    sender: Contact,
    recipients: Vec<Contact>,
    subject: String,
    html: Option<String>,
    text: Option<String>,
}

impl SendRequest {
    /// Create a request with no recipients and no content.
    pub fn new(api_key: impl Into<String>, sender: Contact, subject: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let subject = subject.into();

        if api_key.is_empty() {
            return Err(RelayError::invalid_argument("Invalid API key"));
        }
        if subject.is_empty() {
            return Err(RelayError::invalid_argument("Invalid subject"));
        }

        Ok(Self {
            api_key,
            sender,
            recipients: Vec::new(),
            subject,
            html: None,
            text: None,
        })
    }

    /// Parse a request from a raw JSON body.
    ///
    /// Fails with `MalformedRequest` when the body is not JSON and with
    /// `InvalidArgument` when it is JSON of the wrong shape or a required
    /// field is missing.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| RelayError::MalformedRequest(e.to_string()))?;
        let payload: SendRequestPayload = serde_json::from_value(value)
            .map_err(|e| RelayError::InvalidArgument(format!("Invalid data: {e}")))?;
        Self::try_from(payload)
    }

    /// Add a recipient. A recipient equal to one already present is ignored.
    pub fn add_recipient(&mut self, recipient: Contact) {
        if !self.recipients.contains(&recipient) {
            self.recipients.push(recipient);
        }
    }

    /// Set the HTML body.
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Set the plain-text body.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// API key of the sending application.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sender.
    pub fn sender(&self) -> &Contact {
        &self.sender
    }

    /// Recipients in insertion order, without duplicates.
    pub fn recipients(&self) -> &[Contact] {
        &self.recipients
    }

    /// Subject line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// HTML body, if any.
    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    /// Plain-text body, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Body to send: the HTML part when present, else the plain text.
    pub fn body(&self) -> Option<MessageBody> {
        match (&self.html, &self.text) {
            (Some(html), _) => Some(MessageBody::Html(html.clone())),
            (None, Some(text)) => Some(MessageBody::Text(text.clone())),
            (None, None) => None,
        }
    }
}

impl TryFrom<SendRequestPayload> for SendRequest {
    type Error = RelayError;

    fn try_from(payload: SendRequestPayload) -> Result<Self> {
        let api_key = payload.api_key.unwrap_or_default();
        if api_key.is_empty() {
            return Err(RelayError::invalid_argument("Invalid API key"));
        }

        let sender = payload
            .sender
            .ok_or_else(|| RelayError::invalid_argument("Invalid sender"))
            .and_then(Contact::try_from)?;

        let mut request = SendRequest::new(api_key, sender, payload.subject.unwrap_or_default())?;

        for recipient in payload.recipients {
            request.add_recipient(Contact::try_from(recipient)?);
        }

        request.html = payload.html;
        request.text = payload.text;

        Ok(request)
    }
}
