//! Mail module for the relay.
//!
//! This module provides:
//! - Contact and send request value objects parsed from JSON bodies
//! - The dispatcher that authorizes and validates requests
//! - Transports that deliver the resulting messages

mod contact;
mod dispatch;
mod request;
mod response;
mod transport;
mod types;

pub use contact::{Contact, ContactPayload};
pub use dispatch::{
    build_outbound, MailDispatcher, MISSING_CONTENT, NO_RECIPIENTS, UNRECOGNIZED_API_KEY,
};
pub use request::{SendRequest, SendRequestPayload};
pub use response::SendResponse;
pub use transport::{build_message, LogMailer, MailError, Mailer, SmtpMailer};
pub use types::{MessageBody, OutboundMessage};
