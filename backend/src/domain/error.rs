//! Domain-level error types.
//!
//! These errors are transport agnostic. Every failure carries one of a small
//! set of codes with a fixed client-facing message; the underlying cause is
//! kept for logs and never serialised. Inbound adapters map the code to a
//! protocol status.

use std::fmt;

use serde::Serialize;

/// Stable error category describing how a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed, for example an unaddressable page number.
    BadRequest,
    /// The requested resource or collection does not exist, or could not be
    /// read.
    NotFound,
    /// The request is well formed but the operation could not be applied.
    Unprocessable,
    /// An unexpected failure inside the service.
    InternalError,
}

impl ErrorCode {
    /// Numeric code written into the error envelope.
    pub fn as_u16(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::Unprocessable => 422,
            Self::InternalError => 500,
        }
    }

    /// Fixed client-facing message for the code.
    pub fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::NotFound => "resource not found",
            Self::Unprocessable => "unprocessable",
            Self::InternalError => "Internal Server Error",
        }
    }
}

/// Domain error payload.
///
/// Serialises to the failure envelope
/// `{"success": false, "code": <u16>, "message": <fixed message>}`.
///
/// # Examples
/// ```
/// use trivia::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("no categories stored");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "resource not found");
/// assert_eq!(err.cause(), "no categories stored");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ErrorEnvelope")]
pub struct Error {
    code: ErrorCode,
    cause: String,
}

impl Error {
    /// Create an error with the given code and internal cause.
    pub fn new(code: ErrorCode, cause: impl Into<String>) -> Self {
        Self {
            code,
            cause: cause.into(),
        }
    }

    /// Error category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Fixed client-facing message.
    pub fn message(&self) -> &'static str {
        self.code.message()
    }

    /// Internal cause, suitable for logs only.
    pub fn cause(&self) -> &str {
        self.cause.as_str()
    }

    /// Convenience constructor for [`ErrorCode::BadRequest`].
    pub fn bad_request(cause: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, cause)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(cause: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, cause)
    }

    /// Convenience constructor for [`ErrorCode::Unprocessable`].
    pub fn unprocessable(cause: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unprocessable, cause)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(cause: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, cause)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message(), self.cause)
    }
}

impl std::error::Error for Error {}

/// Wire shape of a failed response.
#[derive(Debug, Clone, Serialize)]
struct ErrorEnvelope {
    success: bool,
    code: u16,
    message: &'static str,
}

impl From<Error> for ErrorEnvelope {
    fn from(value: Error) -> Self {
        Self {
            success: false,
            code: value.code.as_u16(),
            message: value.message(),
        }
    }
}

#[cfg(test)]
mod tests;
