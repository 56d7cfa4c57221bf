//! Category endpoints.
//!
//! ```text
//! GET /categories
//! GET /categories/{id}/questions
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{CategoryId, CategoryMap, Question};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, QuestionSchema};
use crate::inbound::http::state::HttpState;

/// Response payload for the category listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    #[schema(example = true)]
    pub success: bool,
    /// Display names keyed by stringified category id.
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryMap,
    #[schema(example = 6)]
    pub total_categories: usize,
}

/// Response payload for the questions of one category.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = Vec<QuestionSchema>)]
    pub questions: Vec<Question>,
    /// Number of questions in the category.
    #[schema(example = 3)]
    pub total_questions: usize,
}

/// List every category.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Categories keyed by id", body = CategoriesResponse),
        (status = 404, description = "No categories stored", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let categories = state.query.list_categories().await?;
    Ok(HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// List every question referencing a category.
///
/// An unknown category yields an empty list rather than an error.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 404, description = "Storage failure or non-integer id", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "listCategoryQuestions"
)]
#[get("/categories/{id}/questions")]
pub async fn list_category_questions(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let category = CategoryId::new(path.into_inner());
    let questions = state.query.questions_in_category(category).await?;
    Ok(HttpResponse::Ok().json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
    }))
}
