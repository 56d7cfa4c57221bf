//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and exist only for the
//! generated documentation.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Question`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Question)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct QuestionSchema {
    #[schema(example = 5)]
    id: i32,
    #[schema(example = "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?")]
    question: String,
    #[schema(example = "Maya Angelou")]
    answer: String,
    /// Category id. Not checked against stored categories.
    #[schema(example = 4)]
    category: i32,
    #[schema(example = 2)]
    difficulty: i32,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Failure envelope. `code` always equals the HTTP status.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    #[schema(example = 404)]
    code: u16,
    /// Fixed message for the code.
    #[schema(example = "resource not found")]
    message: String,
}
