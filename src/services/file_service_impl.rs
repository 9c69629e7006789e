use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    domain::{
        errors::StorageResult,
        models::{BucketItem, DownloadedPayload, UploadedFile},
        value_objects::{BucketName, ObjectKey},
    },
    ports::{notification::Notifier, services::FileService, storage::BucketStore},
};

/// Implementation of FileService forwarding each operation to the bucket store
#[derive(Clone)]
pub struct FileServiceImpl {
    bucket: BucketName,
    store: Arc<dyn BucketStore>,
    notifier: Arc<dyn Notifier>,
}

impl FileServiceImpl {
    /// Create a new FileServiceImpl instance
    pub fn new(
        bucket: BucketName,
        store: Arc<dyn BucketStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            bucket,
            store,
            notifier,
        }
    }

    /// Announce an upload without waiting for, or reporting, the outcome.
    ///
    /// The send runs on its own task so a slow provider never delays the
    /// upload response; failures are only logged.
    fn dispatch_upload_notification(&self, filename: String) {
        let notifier = self.notifier.clone();
        let bucket = self.bucket.clone();

        tokio::spawn(async move {
            if let Err(e) = notifier.notify_upload(&filename, &bucket).await {
                warn!("Upload notification for {} failed: {}", filename, e);
            }
        });
    }
}

#[async_trait]
impl FileService for FileServiceImpl {
    fn bucket(&self) -> &BucketName {
        &self.bucket
    }

    async fn list_files(&self) -> StorageResult<Vec<BucketItem>> {
        self.store.list_items().await
    }

    async fn upload_file(&self, file: UploadedFile) -> StorageResult<()> {
        let key = file.key();
        let size = file.size();

        // The content buffer is moved into the store call and released with it
        self.store.put_object(&key, file.content).await?;

        info!("Stored {} ({} bytes) in bucket {}", key, size, self.bucket);
        self.dispatch_upload_notification(file.filename);

        Ok(())
    }

    async fn download_file(&self, key: &ObjectKey) -> StorageResult<DownloadedPayload> {
        let content = self.store.get_object(key).await?;

        Ok(DownloadedPayload {
            key: key.clone(),
            content,
        })
    }

    async fn delete_file(&self, key: &ObjectKey) -> StorageResult<()> {
        self.store.delete_object(key).await
    }
}
