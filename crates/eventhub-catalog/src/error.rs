//! Error types for the event catalog.

use eventhub_core::error::EventHubError;

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate event id: {0}")]
    DuplicateId(u64),
    #[error(transparent)]
    Core(#[from] EventHubError),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Core(err.into())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Core(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        assert_eq!(CatalogError::DuplicateId(3).to_string(), "duplicate event id: 3");
    }

    #[test]
    fn test_catalog_error_from_core() {
        let err: CatalogError = EventHubError::Config("x".to_string()).into();
        assert!(matches!(err, CatalogError::Core(EventHubError::Config(_))));
        assert_eq!(err.to_string(), "Configuration error: x");
    }

    #[test]
    fn test_catalog_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::Core(EventHubError::Io(_))));
    }
}
