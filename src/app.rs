use object_store::{ObjectStore as ApacheObjectStore, memory::InMemory};
use std::sync::Arc;

use crate::{
    adapters::{
        inbound::http::{middleware::DEFAULT_MAX_UPLOAD_BYTES, router::AppState},
        outbound::{
            notification::{DisabledNotifier, TwilioConfig, TwilioNotifier},
            storage::{ApacheObjectStoreAdapter, S3Config, create_s3_store},
        },
    },
    domain::value_objects::BucketName,
    ports::{notification::Notifier, storage::BucketStore},
    services::FileServiceImpl,
};

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bucket: BucketName,
    pub storage_backend: StorageBackend,
    pub notifier_backend: NotifierBackend,
    pub max_upload_bytes: usize,
}

impl AppConfig {
    /// In-memory storage, notifications off, default upload limit
    pub fn new(bucket: BucketName) -> Self {
        Self {
            bucket,
            storage_backend: StorageBackend::InMemory,
            notifier_backend: NotifierBackend::Disabled,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Storage backend configuration
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    InMemory,
    S3 {
        region: String,
        endpoint: Option<String>,
        access_key: Option<String>,
        secret_key: Option<String>,
    },
}

/// Upload notification configuration
#[derive(Debug, Clone, PartialEq)]
pub enum NotifierBackend {
    Disabled,
    Twilio(TwilioConfig),
}

impl NotifierBackend {
    /// Build the notifier configuration from optional settings.
    ///
    /// All four Twilio settings enable notifications, none disables them, and
    /// anything in between is a configuration error.
    pub fn from_twilio_settings(
        account_sid: Option<String>,
        auth_token: Option<String>,
        from_number: Option<String>,
        to_number: Option<String>,
        api_base: String,
    ) -> Result<Self, AppError> {
        match (account_sid, auth_token, from_number, to_number) {
            (None, None, None, None) => Ok(NotifierBackend::Disabled),
            (Some(account_sid), Some(auth_token), Some(from_number), Some(to_number)) => {
                Ok(NotifierBackend::Twilio(TwilioConfig {
                    account_sid,
                    auth_token,
                    from_number,
                    to_number,
                    api_base,
                }))
            }
            (account_sid, auth_token, from_number, to_number) => {
                let missing: Vec<&str> = [
                    ("TWILIO_ACCOUNT_SID", account_sid.is_none()),
                    ("TWILIO_AUTH_TOKEN", auth_token.is_none()),
                    ("TWILIO_PHONE_NUMBER", from_number.is_none()),
                    ("RECIPIENT_PHONE_NUMBER", to_number.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, is_missing)| is_missing.then_some(name))
                .collect();

                Err(AppError::Configuration {
                    message: format!(
                        "incomplete notification settings, missing: {}",
                        missing.join(", ")
                    ),
                })
            }
        }
    }
}

/// Application dependencies container
pub struct AppDependencies {
    pub bucket_store: Arc<dyn BucketStore>,
    pub notifier: Arc<dyn Notifier>,
}

/// Application services container
pub struct AppServices {
    pub file_service: FileServiceImpl,
}

impl AppServices {
    /// Shared state for the HTTP router
    pub fn into_state(self) -> AppState {
        AppState {
            file_service: Arc::new(self.file_service),
        }
    }
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
    object_store: Option<Arc<dyn ApacheObjectStore>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl AppBuilder {
    /// Create a new application builder for `bucket`
    pub fn new(bucket: BucketName) -> Self {
        Self {
            config: AppConfig::new(bucket),
            object_store: None,
            notifier: None,
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.config.storage_backend = backend;
        self
    }

    /// Configure notifier backend
    pub fn with_notifier_backend(mut self, backend: NotifierBackend) -> Self {
        self.config.notifier_backend = backend;
        self
    }

    /// Use an already constructed object_store backend instead of the configured one
    pub fn with_object_store(mut self, store: Arc<dyn ApacheObjectStore>) -> Self {
        self.object_store = Some(store);
        self
    }

    /// Use a custom notifier instead of the configured one
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build the application dependencies
    pub async fn build_dependencies(&self) -> Result<AppDependencies, AppError> {
        let backend = match &self.object_store {
            Some(store) => store.clone(),
            None => self.create_object_store()?,
        };
        let bucket_store = Arc::new(ApacheObjectStoreAdapter::new(backend));

        let notifier = match &self.notifier {
            Some(notifier) => notifier.clone(),
            None => self.create_notifier()?,
        };

        Ok(AppDependencies {
            bucket_store,
            notifier,
        })
    }

    /// Build the complete application with services
    pub async fn build(self) -> Result<AppServices, AppError> {
        let deps = self.build_dependencies().await?;

        let file_service =
            FileServiceImpl::new(self.config.bucket.clone(), deps.bucket_store, deps.notifier);

        Ok(AppServices { file_service })
    }

    fn create_object_store(&self) -> Result<Arc<dyn ApacheObjectStore>, AppError> {
        match &self.config.storage_backend {
            StorageBackend::InMemory => Ok(Arc::new(InMemory::new())),
            StorageBackend::S3 {
                region,
                endpoint,
                access_key,
                secret_key,
            } => create_s3_store(&S3Config {
                bucket: self.config.bucket.as_str().to_string(),
                region: region.clone(),
                access_key: access_key.clone(),
                secret_key: secret_key.clone(),
                endpoint: endpoint.clone(),
            })
            .map_err(|e| AppError::StorageInit {
                message: format!("{:#}", e),
            }),
        }
    }

    fn create_notifier(&self) -> Result<Arc<dyn Notifier>, AppError> {
        match &self.config.notifier_backend {
            NotifierBackend::Disabled => Ok(Arc::new(DisabledNotifier)),
            NotifierBackend::Twilio(config) => {
                let notifier =
                    TwilioNotifier::new(config.clone()).map_err(|e| AppError::Configuration {
                        message: format!("failed to initialise notification client: {}", e),
                    })?;
                Ok(Arc::new(notifier))
            }
        }
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage initialization error: {message}")]
    StorageInit { message: String },
}

/// Create an in-memory application for testing and development
pub async fn create_in_memory_app(bucket: BucketName) -> Result<AppServices, AppError> {
    AppBuilder::new(bucket)
        .with_storage_backend(StorageBackend::InMemory)
        .with_notifier_backend(NotifierBackend::Disabled)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::outbound::notification::DEFAULT_TWILIO_API_BASE, ports::FileService};

    fn bucket() -> BucketName {
        BucketName::new("app-tests".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_create_in_memory_app() {
        let app = create_in_memory_app(bucket()).await.unwrap();

        assert_eq!(app.file_service.bucket().as_str(), "app-tests");
        assert!(app.file_service.list_files().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_builder_uses_provided_store() {
        let store = Arc::new(InMemory::new());
        store
            .put(
                &object_store::path::Path::from("seeded.txt"),
                bytes::Bytes::from_static(b"seed").into(),
            )
            .await
            .unwrap();

        let app = AppBuilder::new(bucket())
            .with_object_store(store)
            .build()
            .await
            .unwrap();

        let files = app.file_service.list_files().await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].key.as_str(), "seeded.txt");
    }

    #[tokio::test]
    async fn test_s3_backend_builds_without_network() {
        let app = AppBuilder::new(bucket())
            .with_storage_backend(StorageBackend::S3 {
                region: "eu-west-1".to_string(),
                endpoint: Some("http://127.0.0.1:9000".to_string()),
                access_key: Some("key".to_string()),
                secret_key: Some("secret".to_string()),
            })
            .build()
            .await;

        assert!(app.is_ok());
    }

    #[tokio::test]
    async fn test_twilio_backend_builds_notifier() {
        let backend = NotifierBackend::from_twilio_settings(
            Some("AC1".to_string()),
            Some("token".to_string()),
            Some("+1000".to_string()),
            Some("+2000".to_string()),
            DEFAULT_TWILIO_API_BASE.to_string(),
        )
        .unwrap();

        let deps = AppBuilder::new(bucket())
            .with_notifier_backend(backend)
            .build_dependencies()
            .await;

        assert!(deps.is_ok());
    }

    #[test]
    fn test_notifier_settings_none_disables() {
        let backend =
            NotifierBackend::from_twilio_settings(None, None, None, None, "unused".to_string())
                .unwrap();
        assert_eq!(backend, NotifierBackend::Disabled);
    }

    #[test]
    fn test_notifier_settings_complete() {
        let backend = NotifierBackend::from_twilio_settings(
            Some("AC1".to_string()),
            Some("token".to_string()),
            Some("+1000".to_string()),
            Some("+2000".to_string()),
            DEFAULT_TWILIO_API_BASE.to_string(),
        )
        .unwrap();

        match backend {
            NotifierBackend::Twilio(config) => {
                assert_eq!(config.account_sid, "AC1");
                assert_eq!(config.to_number, "+2000");
                assert_eq!(config.api_base, DEFAULT_TWILIO_API_BASE);
            }
            other => panic!("Expected Twilio backend, got {:?}", other),
        }
    }

    #[test]
    fn test_notifier_settings_partial_is_error() {
        let err = NotifierBackend::from_twilio_settings(
            Some("AC1".to_string()),
            None,
            Some("+1000".to_string()),
            None,
            DEFAULT_TWILIO_API_BASE.to_string(),
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("TWILIO_AUTH_TOKEN"));
        assert!(message.contains("RECIPIENT_PHONE_NUMBER"));
        assert!(!message.contains("TWILIO_ACCOUNT_SID"));
    }
}
