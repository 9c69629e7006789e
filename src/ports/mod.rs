pub mod notification;
pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use notification::Notifier;
pub use services::FileService;
pub use storage::BucketStore;
