//! Application types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{RelayError, Result};

/// A registered caller of the mail API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Generated API key, unique per application.
    pub api_key: String,
    /// Human-readable name.
    pub name: String,
}

impl Application {
    /// Create an application record.
    ///
    /// Both the API key and the name must be non-empty.
    pub fn new(api_key: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let name = name.into();

        if api_key.is_empty() {
            return Err(RelayError::invalid_argument("Invalid application API key"));
        }
        if name.is_empty() {
            return Err(RelayError::invalid_argument("Invalid application name"));
        }

        Ok(Self { api_key, name })
    }
}

/// Generate a fresh API key.
///
/// Keys are random UUIDs; collisions are not checked against stored keys.
pub fn generate_api_key() -> String {
    Uuid::new_v4().to_string()
}

/// Field of an [`Application`] usable as an exact-match lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationField {
    /// The API key.
    ApiKey,
    /// The display name.
    Name,
}

impl ApplicationField {
    /// Column name backing this field.
    pub fn column(&self) -> &'static str {
        match self {
            ApplicationField::ApiKey => "api_key",
            ApplicationField::Name => "name",
        }
    }

    /// Read this field from an application.
    pub fn value_of<'a>(&self, application: &'a Application) -> &'a str {
        match self {
            ApplicationField::ApiKey => &application.api_key,
            ApplicationField::Name => &application.name,
        }
    }
}

impl std::fmt::Display for ApplicationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationField::ApiKey => write!(f, "apiKey"),
            ApplicationField::Name => write!(f, "name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_application() {
        let app = Application::new("key-1", "Foo").unwrap();
        assert_eq!(app.api_key, "key-1");
        assert_eq!(app.name, "Foo");
    }

    #[test]
    fn test_new_application_rejects_empty_fields() {
        assert!(matches!(
            Application::new("", "Foo"),
            Err(RelayError::InvalidArgument(_))
        ));
        assert!(matches!(
            Application::new("key-1", ""),
            Err(RelayError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_wire_form_uses_camel_case() {
        let app = Application::new("key-1", "Foo").unwrap();
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json, serde_json::json!({"apiKey": "key-1", "name": "Foo"}));
    }

    #[test]
    fn test_wire_form_round_trip() {
        let app = Application::new(generate_api_key(), "Foo").unwrap();
        let json = serde_json::to_string(&app).unwrap();
        let parsed: Application = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, app);
    }

    #[test]
    fn test_generate_api_key() {
        let a = generate_api_key();
        let b = generate_api_key();
        assert!(!a.is_empty());
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_field_accessors() {
        let app = Application::new("key-1", "Foo").unwrap();
        assert_eq!(ApplicationField::ApiKey.column(), "api_key");
        assert_eq!(ApplicationField::Name.column(), "name");
        assert_eq!(ApplicationField::ApiKey.value_of(&app), "key-1");
        assert_eq!(ApplicationField::Name.value_of(&app), "Foo");
        assert_eq!(ApplicationField::ApiKey.to_string(), "apiKey");
    }
}
