use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use object_store::{ObjectStore as ApacheObjectStore, PutPayload};
use std::sync::Arc;

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        models::BucketItem,
        value_objects::ObjectKey,
    },
    ports::storage::BucketStore,
};

/// Adapter that implements our BucketStore port using Apache object_store
#[derive(Debug, Clone)]
pub struct ApacheObjectStoreAdapter {
    inner: Arc<dyn ApacheObjectStore>,
}

impl ApacheObjectStoreAdapter {
    pub fn new(store: Arc<dyn ApacheObjectStore>) -> Self {
        Self { inner: store }
    }
}

/// Translate an object_store failure for `key` into a domain error
fn map_store_error(key: &ObjectKey, operation: &str, err: object_store::Error) -> StorageError {
    match err {
        object_store::Error::NotFound { .. } => StorageError::ObjectNotFound { key: key.clone() },
        object_store::Error::PermissionDenied { .. }
        | object_store::Error::Unauthenticated { .. } => StorageError::AccessDenied {
            key: key.clone(),
            operation: operation.to_string(),
        },
        e => StorageError::infrastructure(format!("Failed to {} object", operation), e),
    }
}

#[async_trait]
impl BucketStore for ApacheObjectStoreAdapter {
    async fn list_items(&self) -> StorageResult<Vec<BucketItem>> {
        let metas: Vec<_> = self
            .inner
            .list(None)
            .try_collect()
            .await
            .map_err(|e| StorageError::infrastructure("Failed to list objects", e))?;

        Ok(metas
            .into_iter()
            .map(|meta| BucketItem {
                key: ObjectKey::from_path(&meta.location),
                size: meta.size,
                last_modified: meta.last_modified,
            })
            .collect())
    }

    async fn put_object(&self, key: &ObjectKey, data: Bytes) -> StorageResult<()> {
        self.inner
            .put(&key.to_path(), PutPayload::from(data))
            .await
            .map_err(|e| map_store_error(key, "put", e))?;

        Ok(())
    }

    async fn get_object(&self, key: &ObjectKey) -> StorageResult<Bytes> {
        let result = self
            .inner
            .get(&key.to_path())
            .await
            .map_err(|e| map_store_error(key, "get", e))?;

        result
            .bytes()
            .await
            .map_err(|e| StorageError::infrastructure("Failed to read object bytes", e))
    }

    async fn delete_object(&self, key: &ObjectKey) -> StorageResult<()> {
        match self.inner.delete(&key.to_path()).await {
            Ok(()) => Ok(()),
            // Nothing to delete is as good as deleted
            Err(object_store::Error::NotFound { .. }) => Ok(()),
            Err(e) => Err(map_store_error(key, "delete", e)),
        }
    }
}
