use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::{
    domain::{
        errors::{NotificationError, NotificationResult},
        value_objects::BucketName,
    },
    ports::notification::{Notifier, upload_message},
};

pub const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com";

/// Credentials and phone numbers for sending SMS through Twilio
#[derive(Debug, Clone, PartialEq)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub to_number: String,
    pub api_base: String,
}

/// Sends upload notifications as SMS via the Twilio Messages API
pub struct TwilioNotifier {
    client: Client,
    config: TwilioConfig,
}

impl TwilioNotifier {
    /// Build the notifier and its HTTP client; fails if the client cannot be
    /// initialised (e.g. no usable TLS backend).
    pub fn new(config: TwilioConfig) -> NotificationResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(NotificationError::Client)?;

        Ok(TwilioNotifier { client, config })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base.trim_end_matches('/'),
            self.config.account_sid
        )
    }
}

#[async_trait]
impl Notifier for TwilioNotifier {
    async fn notify_upload(&self, filename: &str, bucket: &BucketName) -> NotificationResult<()> {
        let body = upload_message(filename, bucket);
        let params = [
            ("From", self.config.from_number.as_str()),
            ("To", self.config.to_number.as_str()),
            ("Body", body.as_str()),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Upload notification for {} sent to {}", filename, self.config.to_number);
        Ok(())
    }
}
