//! Error Types

use thiserror::Error;

/// Validation failures surfaced to the caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("description must be non-empty")]
    EmptyDescription,
}

/// Persistence-layer failures; logged, never shown to the user
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("could not read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("could not write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_message() {
        assert_eq!(TaskError::EmptyDescription.to_string(), "description must be non-empty");
    }

    #[test]
    fn test_write_error_names_key() {
        let err = StorageError::Write {
            key: "tasks".to_string(),
            reason: "QuotaExceededError".to_string(),
        };
        assert_eq!(err.to_string(), "could not write `tasks`: QuotaExceededError");
    }
}
