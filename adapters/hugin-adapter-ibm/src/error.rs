//! Error types for the IBM Quantum adapter.

use thiserror::Error;

/// Result type for IBM operations.
pub type IbmResult<T> = Result<T, IbmError>;

/// Errors that can occur when talking to IBM Quantum.
#[derive(Debug, Error)]
pub enum IbmError {
    /// Missing API credentials.
    #[error(
        "IBM Quantum credentials not found. Set IBM_API_KEY and IBM_SERVICE_CRN environment variables."
    )]
    MissingCredentials,

    /// Invalid API token.
    #[error("Invalid IBM Quantum API token")]
    InvalidToken,

    /// Missing service CRN.
    #[error("IBM_SERVICE_CRN environment variable is required when using IBM_API_KEY")]
    MissingServiceCrn,

    /// IAM token exchange failed.
    #[error("IAM token exchange failed: {0}")]
    IamTokenExchange(String),

    /// Token cache I/O failed.
    #[error("Token cache error: {0}")]
    TokenCache(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API returned an error.
    #[error("IBM Quantum API error: {message}")]
    ApiError {
        /// Error code from API.
        code: Option<String>,
        /// Error message.
        message: String,
    },

    /// Backend not available.
    #[error("Backend not available: {0}")]
    BackendUnavailable(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid parameter.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_display() {
        let err = IbmError::MissingCredentials;
        assert!(err.to_string().contains("IBM_API_KEY"));
    }

    #[test]
    fn test_api_error_display() {
        let err = IbmError::ApiError {
            code: Some("ERR_401".into()),
            message: "Unauthorized".into(),
        };
        assert!(err.to_string().contains("Unauthorized"));
    }

    #[test]
    fn test_backend_unavailable_display() {
        let err = IbmError::BackendUnavailable("ibm_brisbane".into());
        assert!(err.to_string().contains("ibm_brisbane"));
    }

    #[test]
    fn test_iam_token_exchange_display() {
        let err = IbmError::IamTokenExchange("401 Unauthorized".into());
        assert!(err.to_string().contains("401 Unauthorized"));
    }

    #[test]
    fn test_missing_service_crn_display() {
        let err = IbmError::MissingServiceCrn;
        assert!(err.to_string().contains("IBM_SERVICE_CRN"));
    }
}
