//! The single error type surfaced by every client operation.

use std::error::Error as StdError;

use thiserror::Error;

/// Result type alias for client operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// A failed call to the note service.
///
/// Transport failures, non-200 responses, undecodable bodies, missing
/// response structure and service-reported failures are all reported as
/// this one type. The message says which one happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    /// Creates an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The server answered with something other than 200.
    pub fn http_status(code: u16) -> Self {
        Self::new(format!("Server returned non-200 response code: {}", code))
    }

    /// The response status object reported failure.
    pub fn rejected(message: &str) -> Self {
        Self::new(format!("Non successful status: {}", message))
    }

    /// A key the response must carry was absent.
    pub fn missing_key(key: &str) -> Self {
        Self::new(format!("missing key in response: '{}'", key))
    }

    /// Builds a message from `err` and every error in its source chain.
    ///
    /// Transport errors wrap the cause that matters (connection refused,
    /// DNS failure, timeout) several layers down.
    pub fn from_chain(err: &(dyn StdError + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        Self::new(message)
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        Self::from_chain(&err)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message_contains_code() {
        let err = ServiceError::http_status(500);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_rejected_keeps_service_message() {
        let err = ServiceError::rejected("Bad noteID.");
        assert_eq!(err.message(), "Non successful status: Bad noteID.");
    }

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct SendFailed(#[source] ConnectFailed);

    #[derive(Debug, Error)]
    #[error("tcp connect error")]
    struct ConnectFailed(#[source] std::io::Error);

    #[test]
    fn test_from_chain_keeps_root_cause() {
        let err = SendFailed(ConnectFailed(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        )));

        let service_err = ServiceError::from_chain(&err);
        assert_eq!(
            service_err.message(),
            "error sending request: tcp connect error: Connection refused"
        );
    }

    #[test]
    fn test_from_chain_skips_repeated_text() {
        let err = SendFailed(ConnectFailed(std::io::Error::other("error sending request")));

        let service_err = ServiceError::from_chain(&err);
        assert_eq!(service_err.message(), "error sending request: tcp connect error");
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let expected = json_err.to_string();

        let err: ServiceError = json_err.into();
        assert_eq!(err.message(), expected);
    }
}
