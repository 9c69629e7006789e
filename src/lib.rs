pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types
pub use domain::{
    BucketItem, BucketName, DownloadedPayload, NotificationError, ObjectKey, StorageError,
    UploadedFile, ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{BucketStore, FileService, Notifier};

// Service implementations
pub use services::FileServiceImpl;

// Application factory and configuration
pub use app::{
    AppBuilder, AppConfig, AppDependencies, AppError, AppServices, NotifierBackend,
    StorageBackend, create_in_memory_app,
};

// Adapter types - infrastructure implementations
pub use adapters::inbound::http::router::{AppState, create_app, create_router};
pub use adapters::outbound::{
    notification::{DisabledNotifier, TwilioConfig, TwilioNotifier},
    storage::ApacheObjectStoreAdapter,
};
