//! Application directory.
//!
//! CRUD over [`Application`] records keyed by API key or by name. The
//! directory keeps no state of its own; every call goes straight to the
//! backing [`ApplicationStore`].

use std::sync::Arc;

use tracing::{debug, info};

use super::store::ApplicationStore;
use super::types::{generate_api_key, Application, ApplicationField};
use crate::{RelayError, Result};

/// Registry of applications allowed to send mail.
#[derive(Clone)]
pub struct ApplicationDirectory {
    store: Arc<dyn ApplicationStore>,
}

impl ApplicationDirectory {
    /// Create a directory over the given store.
    pub fn new(store: Arc<dyn ApplicationStore>) -> Self {
        Self { store }
    }

    /// Register a new application with the given name.
    ///
    /// A fresh API key is generated for it. Name uniqueness is not enforced
    /// here; callers that need it check [`Self::exists_with_name`] first.
    pub async fn add(&self, name: &str) -> Result<Application> {
        require_non_empty(ApplicationField::Name, name)?;

        let application = Application::new(generate_api_key(), name)?;
        self.store.put(&application).await?;

        info!(name = %application.name, "Registered application");
        Ok(application)
    }

    /// Check whether an application with this API key exists.
    pub async fn exists_with_api_key(&self, api_key: &str) -> Result<bool> {
        Ok(self.get_by_api_key(api_key).await?.is_some())
    }

    /// Check whether an application with this name exists.
    pub async fn exists_with_name(&self, name: &str) -> Result<bool> {
        Ok(self.get_by_name(name).await?.is_some())
    }

    /// Get the application with this API key.
    pub async fn get_by_api_key(&self, api_key: &str) -> Result<Option<Application>> {
        self.get_with(ApplicationField::ApiKey, api_key).await
    }

    /// Get an application with this name.
    ///
    /// If several applications share the name, the earliest registered one
    /// is returned.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Application>> {
        self.get_with(ApplicationField::Name, name).await
    }

    /// Remove the given application.
    pub async fn remove(&self, application: &Application) -> Result<u64> {
        let field = ApplicationField::ApiKey;
        self.remove_with(field, field.value_of(application)).await
    }

    /// Remove every application with this API key.
    pub async fn remove_by_api_key(&self, api_key: &str) -> Result<u64> {
        self.remove_with(ApplicationField::ApiKey, api_key).await
    }

    /// Remove every application with this name.
    ///
    /// Names are not unique, so this may remove more than one record.
    pub async fn remove_by_name(&self, name: &str) -> Result<u64> {
        self.remove_with(ApplicationField::Name, name).await
    }

    async fn get_with(&self, field: ApplicationField, value: &str) -> Result<Option<Application>> {
        require_non_empty(field, value)?;

        let application = self.store.find_by(field, value).await?;
        debug!(%field, found = application.is_some(), "Application lookup");
        Ok(application)
    }

    async fn remove_with(&self, field: ApplicationField, value: &str) -> Result<u64> {
        require_non_empty(field, value)?;

        let removed = self.store.delete_by(field, value).await?;
        info!(%field, removed, "Removed applications");
        Ok(removed)
    }
}

fn require_non_empty(field: ApplicationField, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RelayError::InvalidArgument(format!(
            "Invalid application {field}: {value:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SqliteApplicationStore;
    use crate::Database;

    async fn setup_directory() -> ApplicationDirectory {
        let db = Database::open_in_memory().await.unwrap();
        ApplicationDirectory::new(Arc::new(SqliteApplicationStore::from_database(&db)))
    }

    #[tokio::test]
    async fn test_add_then_get_by_name() {
        let directory = setup_directory().await;

        let created = directory.add("Foo").await.unwrap();
        let found = directory.get_by_name("Foo").await.unwrap().unwrap();

        assert!(!found.api_key.is_empty());
        assert_eq!(found.name, "Foo");
        assert_eq!(found, created);
        assert!(directory
            .exists_with_api_key(&created.api_key)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_add_empty_name() {
        let directory = setup_directory().await;

        let result = directory.add("").await;
        assert!(matches!(result, Err(RelayError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_add_generates_distinct_keys() {
        let directory = setup_directory().await;

        let a = directory.add("Foo").await.unwrap();
        let b = directory.add("Foo").await.unwrap();
        assert_ne!(a.api_key, b.api_key);
    }

    #[tokio::test]
    async fn test_exists_checks() {
        let directory = setup_directory().await;
        directory.add("Foo").await.unwrap();

        assert!(directory.exists_with_name("Foo").await.unwrap());
        assert!(!directory.exists_with_name("Bar").await.unwrap());
        assert!(!directory.exists_with_api_key("unknown-key").await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_lookup_key_is_invalid() {
        let directory = setup_directory().await;

        assert!(matches!(
            directory.exists_with_api_key("").await,
            Err(RelayError::InvalidArgument(_))
        ));
        assert!(matches!(
            directory.get_by_name("").await,
            Err(RelayError::InvalidArgument(_))
        ));
        assert!(matches!(
            directory.remove_by_name("").await,
            Err(RelayError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_by_api_key() {
        let directory = setup_directory().await;
        let app = directory.add("Foo").await.unwrap();

        let removed = directory.remove_by_api_key(&app.api_key).await.unwrap();

        assert_eq!(removed, 1);
        assert!(directory
            .get_by_api_key(&app.api_key)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_remove_by_name_is_bulk() {
        let directory = setup_directory().await;
        let first = directory.add("Shared").await.unwrap();
        let second = directory.add("Shared").await.unwrap();
        let other = directory.add("Other").await.unwrap();

        let removed = directory.remove_by_name("Shared").await.unwrap();

        assert_eq!(removed, 2);
        assert!(!directory.exists_with_api_key(&first.api_key).await.unwrap());
        assert!(!directory.exists_with_api_key(&second.api_key).await.unwrap());
        assert!(directory.exists_with_api_key(&other.api_key).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_unknown_is_not_an_error() {
        let directory = setup_directory().await;

        assert_eq!(directory.remove_by_api_key("missing").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_remove_application() {
        let directory = setup_directory().await;
        let app = directory.add("Foo").await.unwrap();

        directory.remove(&app).await.unwrap();
        assert!(!directory.exists_with_name("Foo").await.unwrap());
    }
}
