use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::BucketItem;

/// DTO for one entry of a bucket listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketItemDto {
    pub key: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

impl From<BucketItem> for BucketItemDto {
    fn from(item: BucketItem) -> Self {
        BucketItemDto {
            key: item.key.as_str().to_string(),
            size: item.size,
            last_modified: item.last_modified,
        }
    }
}

/// Body of every JSON response the gateway sends.
///
/// `items` is only present on listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponseDto {
    pub error: bool,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<BucketItemDto>>,
}

impl GatewayResponseDto {
    pub fn success(msg: impl Into<String>) -> Self {
        GatewayResponseDto {
            error: false,
            msg: msg.into(),
            items: None,
        }
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        GatewayResponseDto {
            error: true,
            msg: msg.into(),
            items: None,
        }
    }

    pub fn listing(items: Vec<BucketItemDto>) -> Self {
        GatewayResponseDto {
            error: false,
            msg: String::new(),
            items: Some(items),
        }
    }
}
