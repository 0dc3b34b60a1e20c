/// Error types for Weather Explorer API calls
use thiserror::Error;

/// Fallback text when the backend reports `success: false` without a message.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Failure of a single API call.
///
/// `Logical` is a well-formed response carrying `success: false`; the other
/// variants mean no usable response arrived.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend answered with `success: false`
    #[error("{0}")]
    Logical(String),

    /// Network failure, or a non-JSON body on an error status
    #[error("{0}")]
    Transport(String),

    /// Body was not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a logical failure from the envelope's optional `error` field.
    pub fn logical(message: Option<String>) -> Self {
        ApiError::Logical(message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, ApiError::Logical(_))
    }

    /// Banner text for the main search area.
    pub fn search_message(&self) -> String {
        if self.is_logical() {
            format!("Failed to load data: {}", self)
        } else {
            format!("Error loading data: {}", self)
        }
    }

    /// Inline text for the visualization panel.
    pub fn visualization_message(&self) -> String {
        if self.is_logical() {
            format!("Failed to generate visualization: {}", self)
        } else {
            format!("Error loading visualization: {}", self)
        }
    }

    /// Inline text for the statistics panel.
    pub fn statistics_message(&self) -> String {
        if self.is_logical() {
            format!("Failed to load statistics: {}", self)
        } else {
            format!("Error loading statistics: {}", self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_without_message_uses_fallback() {
        let err = ApiError::logical(None);
        assert_eq!(err, ApiError::Logical("unknown error".to_string()));
        assert_eq!(err.search_message(), "Failed to load data: unknown error");
    }

    #[test]
    fn test_messages_distinguish_error_classes() {
        let logical = ApiError::logical(Some("bad filter".to_string()));
        let transport = ApiError::Transport("Failed to fetch".to_string());
        assert_eq!(logical.search_message(), "Failed to load data: bad filter");
        assert_eq!(transport.search_message(), "Error loading data: Failed to fetch");
        assert_eq!(
            logical.visualization_message(),
            "Failed to generate visualization: bad filter"
        );
        assert_eq!(
            transport.visualization_message(),
            "Error loading visualization: Failed to fetch"
        );
    }

    #[test]
    fn test_decode_error_reads_as_transport_class() {
        let err = ApiError::Decode("expected value at line 1 column 1".to_string());
        assert!(!err.is_logical());
        assert_eq!(
            err.search_message(),
            "Error loading data: Failed to parse response: expected value at line 1 column 1"
        );
    }
}
