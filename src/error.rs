//! API Errors
//!
//! Everything that can go wrong talking to the REST backend.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never got a response
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// An admin submission was rejected
    #[error("{0}")]
    Validation(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Classify a failed response; 400 and 422 carry a validation message
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| body.trim().to_string());
        match status {
            400 | 422 => ApiError::Validation(message),
            _ => ApiError::Status { status, message },
        }
    }

    /// Text shown to visitors when a list fails to load
    pub fn user_message_key(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "errors.validation",
            _ => "errors.fetch",
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Pull `message` or `error` out of a JSON error body
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key)?.as_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_statuses() {
        assert_eq!(
            ApiError::from_status(422, r#"{"message":"Title is required"}"#),
            ApiError::Validation("Title is required".into())
        );
        assert_eq!(
            ApiError::from_status(400, r#"{"error":"Bad category"}"#),
            ApiError::Validation("Bad category".into())
        );
    }

    #[test]
    fn test_other_statuses_keep_body() {
        let err = ApiError::from_status(503, "Service Unavailable\n");
        assert_eq!(err, ApiError::Status { status: 503, message: "Service Unavailable".into() });
        assert_eq!(err.to_string(), "Server returned 503: Service Unavailable");
        assert_eq!(err.user_message_key(), "errors.fetch");
    }

    #[test]
    fn test_validation_display_is_the_message() {
        let err = ApiError::Validation("Image URL is required".into());
        assert_eq!(err.to_string(), "Image URL is required");
        assert_eq!(err.user_message_key(), "errors.validation");
    }
}
