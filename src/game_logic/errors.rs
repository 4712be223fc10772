use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoinQuestError {
    // Config-related errors
    #[error("Failed to get config directory")]
    ConfigDirNotFound,

    #[error("Failed to create config directory: {0}")]
    ConfigDirCreationFailed(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    SerializationFailed(#[from] toml::ser::Error),

    #[error("Failed to deserialize config: {0}")]
    DeserializationFailed(#[from] toml::de::Error),

    // Layout-related errors
    #[error("Layout file not found at path: {path}")]
    LayoutFileNotFound { path: PathBuf },

    #[error("Layout file is corrupted: {reason}")]
    CorruptedLayoutFile { reason: String },

    #[error("Invalid layout data: {reason}")]
    InvalidLayoutData { reason: String },

    #[error("Layout validation failed: {reason}")]
    LayoutValidationFailed { reason: String },
}

/// Result type alias for all operations
pub type CoinQuestResult<T> = Result<T, CoinQuestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoinQuestError::InvalidLayoutData {
            reason: "world too small".to_string(),
        };
        assert!(err.to_string().contains("world too small"));

        let err = CoinQuestError::ConfigDirNotFound;
        assert_eq!(err.to_string(), "Failed to get config directory");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CoinQuestError = io_err.into();
        assert!(matches!(err, CoinQuestError::ConfigDirCreationFailed(_)));
    }
}
