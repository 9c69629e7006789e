use crate::domain::{
    errors::StorageResult,
    models::{BucketItem, DownloadedPayload, UploadedFile},
    value_objects::{BucketName, ObjectKey},
};
use async_trait::async_trait;

/// Port for the gateway's file operations.
/// Each method maps to exactly one call on the underlying bucket.
#[async_trait]
pub trait FileService: Send + Sync + 'static {
    /// Bucket every operation runs against
    fn bucket(&self) -> &BucketName;

    /// List all files in the bucket
    async fn list_files(&self) -> StorageResult<Vec<BucketItem>>;

    /// Store an uploaded file under its own filename.
    /// On success an upload notification is dispatched in the background.
    async fn upload_file(&self, file: UploadedFile) -> StorageResult<()>;

    /// Fetch a file's full content
    async fn download_file(&self, key: &ObjectKey) -> StorageResult<DownloadedPayload>;

    /// Remove a file
    async fn delete_file(&self, key: &ObjectKey) -> StorageResult<()>;
}
