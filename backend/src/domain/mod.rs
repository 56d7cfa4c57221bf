//! Domain primitives, ports and services.
//!
//! Purpose: Define strongly typed trivia entities used by the API and
//! persistence layers, the ports that connect them, and the service that
//! implements the use-cases. Invariants and serialisation contracts (serde)
//! are documented on each type.
//!
//! Public surface:
//! - Error (alias to `error::Error`): failure envelope payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error category.
//! - Category, CategoryId, CategoryMap: question groupings.
//! - Question, QuestionId, NewQuestion, SearchTerm: stored quiz items and
//!   the inputs that create or find them.
//! - QuizScope, QuizRound: next-question requests.
//! - TriviaService: implementation of the driving ports.

pub mod category;
pub mod error;
pub mod ports;
pub mod question;
pub mod quiz;
pub mod trivia_service;

pub use self::category::{Category, CategoryId, CategoryMap};
pub use self::error::{Error, ErrorCode};
pub use self::question::{NewQuestion, Question, QuestionId, QuestionValidationError, SearchTerm};
pub use self::quiz::{QuizRound, QuizScope, pick_next};
pub use self::trivia_service::TriviaService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use trivia::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nothing here"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
