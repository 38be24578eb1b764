//! # Client Error Types
//!
//! [`ApiError`] covers everything that can go wrong talking to the backend;
//! [`ValidationError`] covers form checks that run before a request is made.
//! Both follow the `thiserror` pattern so pages can show `to_string()` in a
//! notification.
//!
//! ## Usage Example
//!
//! ```rust
//! use shared::error::ApiError;
//!
//! let err = ApiError::Status { status: 400, detail: Some("Price must be positive".to_string()) };
//! assert_eq!(err.user_message("Failed to add bike"), "Price must be positive");
//!
//! let err = ApiError::Network("connection refused".to_string());
//! assert_eq!(err.user_message("Failed to add bike"), "Failed to add bike");
//! ```

use thiserror::Error;

/// Convenience alias for API results.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a single API call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// Session rejected by the backend. The session has already been cleared.
    #[error("Session expired, please log in again")]
    Unauthorized,

    /// Non-success status with the backend's `detail`, when it sent one.
    #[error("Request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// Response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Request body could not be built.
    #[error("Failed to build request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Message for a toast: the backend's detail when present, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { detail: Some(detail), .. } => detail.clone(),
            ApiError::Unauthorized => self.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Form input rejected before submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill all required fields")]
    MissingRequired,

    #[error("Please fill all fields")]
    MissingCredentials,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Maximum {0} images allowed")]
    TooManyImages(usize),

    #[error("{field} must be a valid number")]
    InvalidNumber { field: &'static str },

    #[error("{field} must be a positive number")]
    NotPositive { field: &'static str },

    #[error("Year must be between {min} and {max}")]
    YearOutOfRange { min: i32, max: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::Status { status: 422, detail: Some("bad year".to_string()) };
        assert_eq!(err.user_message("Failed"), "bad year");

        let err = ApiError::Status { status: 500, detail: None };
        assert_eq!(err.user_message("Failed"), "Failed");
    }

    #[test]
    fn test_status_and_not_found() {
        assert!(ApiError::Status { status: 404, detail: None }.is_not_found());
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::Decode("eof".to_string()).status(), None);

        let missing = crate::http::classify_failure(404, r#"{"detail":"Vehicle not found"}"#);
        assert!(missing.is_not_found());
        assert!(!crate::http::classify_failure(500, "").is_not_found());
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::TooManyImages(5).to_string(), "Maximum 5 images allowed");
        assert_eq!(
            ValidationError::PasswordTooShort(6).to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            ValidationError::NotPositive { field: "Price" }.to_string(),
            "Price must be a positive number"
        );
    }
}
