//! Contact value object.

use lettre::message::Mailbox;
use lettre::Address;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{RelayError, Result};

/// An email address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Contact {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Contact {
    /// Create a contact.
    ///
    /// Fails with `InvalidArgument` when the email is empty. An empty name
    /// is treated as no name.
    pub fn new(email: impl Into<String>, name: Option<String>) -> Result<Self> {
        let email = email.into();
        if email.is_empty() {
            return Err(RelayError::invalid_argument("Invalid contact email"));
        }

        Ok(Self {
            email,
            name: name.filter(|n| !n.is_empty()),
        })
    }

    /// Email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Convert to a transport-level mailbox.
    pub fn to_mailbox(&self) -> Result<Mailbox> {
        let address: Address = self
            .email
            .parse()
            .map_err(|e| RelayError::InvalidAddress(format!("{}: {e}", self.email)))?;
        Ok(Mailbox::new(self.name.clone(), address))
    }
}

/// Contact as it appears in a request body.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ContactPayload {
    /// Email address (required).
    #[serde(default)]
    pub email: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl TryFrom<ContactPayload> for Contact {
    type Error = RelayError;

    fn try_from(payload: ContactPayload) -> Result<Self> {
        Contact::new(payload.email.unwrap_or_default(), payload.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contact() {
        let contact = Contact::new("a@x.com", Some("Alice".to_string())).unwrap();
        assert_eq!(contact.email(), "a@x.com");
        assert_eq!(contact.name(), Some("Alice"));
    }

    #[test]
    fn test_new_contact_without_name() {
        let contact = Contact::new("a@x.com", None).unwrap();
        assert_eq!(contact.name(), None);
    }

    #[test]
    fn test_empty_name_is_absent() {
        let contact = Contact::new("a@x.com", Some(String::new())).unwrap();
        assert_eq!(contact.name(), None);
        assert_eq!(contact, Contact::new("a@x.com", None).unwrap());
    }

    #[test]
    fn test_empty_email_fails_fast() {
        let result = Contact::new("", Some("Alice".to_string()));
        assert!(matches!(result, Err(RelayError::InvalidArgument(_))));
    }

    #[test]
    fn test_any_non_empty_email_is_accepted() {
        // Syntax is only checked when converting to a mailbox.
        assert!(Contact::new("not an address", None).is_ok());
    }

    #[test]
    fn test_structural_equality() {
        let a = Contact::new("a@x.com", Some("A".to_string())).unwrap();
        let b = Contact::new("a@x.com", Some("A".to_string())).unwrap();
        let c = Contact::new("a@x.com", Some("B".to_string())).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_to_mailbox() {
        let contact = Contact::new("a@x.com", Some("Alice".to_string())).unwrap();
        let mailbox = contact.to_mailbox().unwrap();
        assert_eq!(mailbox.email.to_string(), "a@x.com");
        assert_eq!(mailbox.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_to_mailbox_invalid_address() {
        let contact = Contact::new("not an address", None).unwrap();
        let result = contact.to_mailbox();
        assert!(matches!(result, Err(RelayError::InvalidAddress(_))));
    }

    #[test]
    fn test_from_payload_missing_email() {
        let payload = ContactPayload {
            email: None,
            name: Some("Alice".to_string()),
        };
        let result = Contact::try_from(payload);
        assert!(matches!(result, Err(RelayError::InvalidArgument(_))));
    }

    #[test]
    fn test_display() {
        let named = Contact::new("a@x.com", Some("Alice".to_string())).unwrap();
        let bare = Contact::new("a@x.com", None).unwrap();
        assert_eq!(named.to_string(), "Alice <a@x.com>");
        assert_eq!(bare.to_string(), "a@x.com");
    }
}
