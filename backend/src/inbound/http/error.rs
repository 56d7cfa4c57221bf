//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the failure envelope. The response
//! status always equals the envelope's `code`.

use actix_web::error::PathError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(cause = self.cause(), "request failed unexpectedly");
        } else {
            debug!(code = self.code().as_u16(), cause = self.cause(), "request rejected");
        }
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Default service answering unknown routes and unsupported methods.
pub async fn not_found_fallback() -> ApiResult<HttpResponse> {
    Err(Error::not_found("no route matches the request"))
}

/// Reject path segments that do not parse, such as a non-integer id, as if
/// the route did not exist.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::not_found(err.to_string()).into()
}
