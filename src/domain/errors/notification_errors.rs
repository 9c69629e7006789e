use thiserror::Error;

/// Failures of the upload notification side channel.
///
/// These never reach an HTTP client; the upload path only logs them.
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Failed to build notification client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to reach notification provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Notification provider rejected the message: {status} - {body}")]
    Rejected { status: u16, body: String },
}

pub type NotificationResult<T> = Result<T, NotificationError>;
