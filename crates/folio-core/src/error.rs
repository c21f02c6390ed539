//! Error types for the folio site.
//!
//! Every external boundary (durable storage, config files, the email relay,
//! the geolocation lookup, speech synthesis) reports through [`FolioError`].
//! Nothing here is fatal: callers translate these into a toast or a silent
//! fallback where the collaborator is invoked.

use std::io;
use std::path::PathBuf;

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;

/// Unified error type for the folio site.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    // ============================================================
    // Local resources
    // ============================================================
    /// Reading or writing the durable key-value file failed.
    #[error("Storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The durable key-value file is not a JSON object of strings.
    #[error("Storage file is malformed: {0}")]
    StorageFormat(#[from] serde_json::Error),

    /// The configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The configuration file could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    // ============================================================
    // External collaborators
    // ============================================================
    /// The email relay could not be reached.
    #[error("Email relay error: {0}")]
    Relay(String),

    /// The email relay answered with a non-success status.
    #[error("Email relay rejected the message (status {status})")]
    RelayRejected { status: u16 },

    /// The geolocation lookup failed.
    #[error("Geolocation lookup failed: {0}")]
    Geolocation(String),

    /// The speech synthesis call failed.
    #[error("Voice synthesis failed: {0}")]
    Voice(String),

    /// A credential needed by a collaborator is not configured.
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),
}

impl FolioError {
    /// Returns whether this error came from a remote collaborator.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            FolioError::Relay(_)
                | FolioError::RelayRejected { .. }
                | FolioError::Geolocation(_)
                | FolioError::Voice(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = FolioError::RelayRejected { status: 422 };
        assert_eq!(
            err.to_string(),
            "Email relay rejected the message (status 422)"
        );
        assert!(err.is_remote());

        let err = FolioError::MissingCredential("elevenlabs_api_key");
        assert_eq!(err.to_string(), "Missing credential: elevenlabs_api_key");
        assert!(!err.is_remote());
    }
}
