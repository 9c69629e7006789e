use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::domain::value_objects::ObjectKey;

/// Metadata of one object as reported by a bucket listing
#[derive(Debug, Clone, PartialEq)]
pub struct BucketItem {
    pub key: ObjectKey,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

/// A file received through a multipart upload.
///
/// Owned by the request that received it; the buffer is dropped once it has
/// been handed to the store.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content: Bytes,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    pub fn key(&self) -> ObjectKey {
        ObjectKey::new(self.filename.clone())
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Object content fetched from the bucket for one download
#[derive(Debug, Clone)]
pub struct DownloadedPayload {
    pub key: ObjectKey,
    pub content: Bytes,
}

impl DownloadedPayload {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
