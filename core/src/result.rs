//! The outcome type returned by every repository operation.

use thiserror::Error;

/// Either the payload or a human-readable failure.
///
/// `code` is the HTTP status when the backend answered with a non-2xx
/// response, and `None` when no response was obtained at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    Error { message: String, code: Option<u16> },
}

/// `ApiResult::Error` as a `std::error::Error`, for callers that prefer `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiFailure {
    pub message: String,
    pub code: Option<u16>,
}

impl<T> ApiResult<T> {
    /// A failure with no status code.
    pub fn error(message: impl Into<String>) -> Self {
        ApiResult::Error {
            message: message.into(),
            code: None,
        }
    }

    /// A failure carrying the status code the backend answered with.
    pub fn http_error(message: impl Into<String>, code: u16) -> Self {
        ApiResult::Error {
            message: message.into(),
            code: Some(code),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            ApiResult::Success(value) => Some(value),
            ApiResult::Error { .. } => None,
        }
    }

    pub fn into_success(self) -> Option<T> {
        match self {
            ApiResult::Success(value) => Some(value),
            ApiResult::Error { .. } => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResult<U> {
        match self {
            ApiResult::Success(value) => ApiResult::Success(f(value)),
            ApiResult::Error { message, code } => ApiResult::Error { message, code },
        }
    }

    pub fn into_result(self) -> Result<T, ApiFailure> {
        match self {
            ApiResult::Success(value) => Ok(value),
            ApiResult::Error { message, code } => Err(ApiFailure { message, code }),
        }
    }
}

impl<T> From<ApiResult<T>> for Result<T, ApiFailure> {
    fn from(result: ApiResult<T>) -> Self {
        result.into_result()
    }
}
