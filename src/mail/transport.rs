//! Mail transports.
//!
//! [`Mailer`] is the seam between the dispatcher and whatever actually
//! delivers mail. [`SmtpMailer`] relays through an SMTP server using lettre;
//! [`LogMailer`] only logs messages and is used when no relay is configured.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::SinglePart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use super::types::{MessageBody, OutboundMessage};
use crate::config::SmtpConfig;
use crate::RelayError;

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum MailError {
    /// Transport configuration is unusable.
    #[error("transport configuration: {0}")]
    Config(String),

    /// The message could not be assembled.
    #[error("failed to build message: {0}")]
    Build(String),

    /// The SMTP exchange failed.
    #[error("SMTP error: {0}")]
    Smtp(String),
}

impl From<MailError> for RelayError {
    fn from(e: MailError) -> Self {
        match e {
            MailError::Config(msg) => RelayError::Config(msg),
            other => RelayError::DeliveryFailed(other.to_string()),
        }
    }
}

/// Async email sending trait.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Deliver one message.
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError>;
}

/// Build a lettre message from an outbound message.
pub fn build_message(message: &OutboundMessage) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(message.from.clone())
        .subject(message.subject.clone());

    for to in &message.to {
        builder = builder.to(to.clone());
    }

    let email = match &message.body {
        MessageBody::Text(text) => builder
            .header(ContentType::TEXT_PLAIN)
            .body(text.clone()),
        MessageBody::Html(html) => builder.singlepart(SinglePart::html(html.clone())),
    };

    email.map_err(|e| MailError::Build(e.to_string()))
}

/// SMTP-based mailer using lettre.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Create a mailer from configuration.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, MailError> {
        let mut builder = match config.tls.as_str() {
            "none" => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host),
            "tls" => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| MailError::Config(e.to_string()))?,
            "starttls" => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| MailError::Config(e.to_string()))?,
            other => return Err(MailError::Config(format!("unknown tls mode: {other}"))),
        };

        builder = builder
            .port(config.port)
            .timeout(Some(Duration::from_secs(config.timeout_secs)));

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        let email = build_message(message)?;

        self.transport
            .send(email)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        tracing::info!(
            from = %message.from,
            recipients = message.to.len(),
            "Message relayed"
        );
        Ok(())
    }
}

/// Mailer that logs messages instead of delivering them.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        let email = build_message(message)?;

        tracing::info!(
            from = %message.from,
            recipients = message.to.len(),
            subject = %message.subject,
            html = message.body.is_html(),
            bytes = email.formatted().len(),
            "Message not delivered (no SMTP relay configured)"
        );
        Ok(())
    }
}
