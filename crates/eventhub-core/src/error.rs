use thiserror::Error;

/// Top-level error type for EventHub.
///
/// Subsystem crates define their own error types and implement
/// `From<EventHubError>` so that `?` works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EventHubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown {kind}: {value:?}")]
    UnknownValue { kind: &'static str, value: String },
}

impl From<toml::de::Error> for EventHubError {
    fn from(err: toml::de::Error) -> Self {
        EventHubError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for EventHubError {
    fn from(err: toml::ser::Error) -> Self {
        EventHubError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for EventHubError {
    fn from(err: serde_json::Error) -> Self {
        EventHubError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for EventHub operations.
pub type Result<T> = std::result::Result<T, EventHubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EventHubError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_unknown_value_display() {
        let err = EventHubError::UnknownValue {
            kind: "category",
            value: "Music".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown category: \"Music\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EventHubError = io_err.into();
        assert!(matches!(err, EventHubError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: EventHubError = json_err.into();
        assert!(matches!(err, EventHubError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: EventHubError = toml_err.into();
        assert!(matches!(err, EventHubError::Config(_)));
    }
}
