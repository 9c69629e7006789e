use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{errors::StorageResult, models::BucketItem, value_objects::ObjectKey};

/// Port for the single bucket behind the gateway.
/// This abstracts the actual storage backend (S3, S3-compatible, in-memory).
#[async_trait]
pub trait BucketStore: Send + Sync + 'static {
    /// List every object in the bucket, in whatever order the backend yields
    async fn list_items(&self) -> StorageResult<Vec<BucketItem>>;

    /// Store object data, replacing any existing object under the same key
    async fn put_object(&self, key: &ObjectKey, data: Bytes) -> StorageResult<()>;

    /// Retrieve object data
    async fn get_object(&self, key: &ObjectKey) -> StorageResult<Bytes>;

    /// Delete an object. Deleting a key that does not exist succeeds.
    async fn delete_object(&self, key: &ObjectKey) -> StorageResult<()>;
}
