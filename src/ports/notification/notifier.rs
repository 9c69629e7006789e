use async_trait::async_trait;

use crate::domain::{errors::NotificationResult, value_objects::BucketName};

/// Port for the message sent after a successful upload
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    async fn notify_upload(&self, filename: &str, bucket: &BucketName) -> NotificationResult<()>;
}

/// Text of the upload notification
pub fn upload_message(filename: &str, bucket: &BucketName) -> String {
    format!(
        "File {} has been successfully uploaded to your S3 bucket: {}",
        filename, bucket
    )
}
