use crate::domain::value_objects::ObjectKey;

/// Errors that can occur during storage operations
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Object not found
    ObjectNotFound { key: ObjectKey },

    /// The store refused the credentials or the operation
    AccessDenied { key: ObjectKey, operation: String },

    /// Infrastructure error with external source
    InfrastructureError {
        message: String,
        source: Option<String>, // Store error as string to allow Clone
    },
}

impl StorageError {
    pub fn infrastructure(message: impl Into<String>, source: impl ToString) -> Self {
        StorageError::InfrastructureError {
            message: message.into(),
            source: Some(source.to_string()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::ObjectNotFound { .. })
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::ObjectNotFound { key } => {
                write!(f, "Object not found: {}", key)
            }
            StorageError::AccessDenied { key, operation } => {
                write!(
                    f,
                    "Access denied for operation '{}' on object: {}",
                    operation, key
                )
            }
            StorageError::InfrastructureError { message, source } => match source {
                Some(source) => write!(f, "{}: {}", message, source),
                None => write!(f, "{}", message),
            },
        }
    }
}

impl std::error::Error for StorageError {}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_key_and_source() {
        let not_found = StorageError::ObjectNotFound {
            key: ObjectKey::from("report.txt"),
        };
        assert_eq!(not_found.to_string(), "Object not found: report.txt");
        assert!(not_found.is_not_found());

        let infra = StorageError::infrastructure("Failed to put object", "connection reset");
        assert_eq!(infra.to_string(), "Failed to put object: connection reset");
        assert!(!infra.is_not_found());
    }
}
