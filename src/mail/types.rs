//! Outbound message types.

use lettre::message::Mailbox;

/// Body of an outbound message. HTML and plain text are never combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    /// Plain text only.
    Text(String),
    /// HTML only.
    Html(String),
}

impl MessageBody {
    /// Whether this is an HTML body.
    pub fn is_html(&self) -> bool {
        matches!(self, MessageBody::Html(_))
    }
}

/// A message ready to be handed to a [`Mailer`](super::Mailer).
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    /// Sender mailbox.
    pub from: Mailbox,
    /// Recipient mailboxes, in order.
    pub to: Vec<Mailbox>,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: MessageBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_body_is_html() {
        let html = MessageBody::Html("<p>Hi</p>".to_string());
        let text = MessageBody::Text("Hi".to_string());

        assert!(html.is_html());
        assert!(!text.is_html());
    }
}
