use async_trait::async_trait;
use tracing::debug;

use crate::{
    domain::{errors::NotificationResult, value_objects::BucketName},
    ports::notification::Notifier,
};

/// Notifier used when no notification provider is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn notify_upload(&self, filename: &str, bucket: &BucketName) -> NotificationResult<()> {
        debug!(
            "Notifications disabled, not announcing upload of {} to {}",
            filename, bucket
        );
        Ok(())
    }
}
