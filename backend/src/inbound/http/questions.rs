//! Question endpoints.
//!
//! ```text
//! GET    /questions?page=N
//! DELETE /questions/{id}?page=N
//! POST   /questions?page=N
//! ```
//!
//! `POST /questions` serves two use-cases: a body with a non-empty
//! `searchTerm` searches, anything else creates a question.
//!
//! `page` is read leniently: absent or non-numeric values select page 1.
//! A number below 1 or beyond `u32` is rejected with 400 `bad request`, so
//! every endpoint here can answer 400.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, web};
use pagination::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CategoryId, CategoryMap, Error, NewQuestion, Question, QuestionId, SearchTerm};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, QuestionSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{LenientInt, decode_json, page_from_query};

/// Raw `POST /questions` body before it is split into a search or a create.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct QuestionsBody {
    /// Search input; a non-empty value selects search.
    #[serde(rename = "searchTerm")]
    #[schema(example = "title")]
    pub search_term: Option<String>,
    #[schema(example = "What is the heaviest organ in the human body?")]
    pub question: Option<String>,
    #[schema(example = "The Liver")]
    pub answer: Option<String>,
    /// Category id as a number or numeric string.
    #[schema(value_type = Option<i32>, example = 1)]
    pub category: Option<LenientInt>,
    /// Difficulty as a number or numeric string.
    #[schema(value_type = Option<i32>, example = 4)]
    pub difficulty: Option<LenientInt>,
}

/// What a `POST /questions` body asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionsRequest {
    Search { search_term: SearchTerm },
    Create(NewQuestion),
}

impl TryFrom<QuestionsBody> for QuestionsRequest {
    type Error = Error;

    fn try_from(body: QuestionsBody) -> Result<Self, Self::Error> {
        if let Some(search_term) = body.search_term.and_then(SearchTerm::new) {
            return Ok(Self::Search { search_term });
        }

        let missing = |field: &str| Error::unprocessable(format!("missing field `{field}`"));
        let question = body.question.ok_or_else(|| missing("question"))?;
        let answer = body.answer.ok_or_else(|| missing("answer"))?;
        let LenientInt(category) = body.category.ok_or_else(|| missing("category"))?;
        let LenientInt(difficulty) = body.difficulty.ok_or_else(|| missing("difficulty"))?;

        NewQuestion::try_new(question, answer, CategoryId::new(category), difficulty)
            .map(Self::Create)
            .map_err(|err| Error::unprocessable(err.to_string()))
    }
}

/// Response payload for the paginated question listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = Vec<QuestionSchema>)]
    pub questions: Vec<Question>,
    /// Number of stored questions across all pages.
    #[schema(example = 19)]
    pub total_questions: u64,
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryMap,
}

/// Response payload for a deletion.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteQuestionResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = i32, example = 5)]
    pub deleted: QuestionId,
    #[schema(example = 18)]
    pub total_questions: u64,
    /// The requested page of remaining questions.
    #[schema(value_type = Vec<QuestionSchema>)]
    pub question: Vec<Question>,
}

/// Response payload for a creation.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateQuestionResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = i32, example = 24)]
    pub created: QuestionId,
    /// First page of questions after the insert.
    #[schema(value_type = Vec<QuestionSchema>)]
    pub questions: Vec<Question>,
    #[schema(example = 20)]
    pub total_questions: u64,
}

/// Response payload for a search.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchQuestionsResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = Vec<QuestionSchema>)]
    pub questions: Vec<Question>,
    /// Number of matches across all pages.
    #[schema(example = 1)]
    pub total_results: u64,
}

/// List one page of questions with the category map.
#[utoipa::path(
    get,
    path = "/questions",
    params(("page" = Option<u32>, Query, description = "1-based page number, default 1")),
    responses(
        (status = 200, description = "Page of questions", body = QuestionListResponse),
        (status = 400, description = "Page below 1 or out of range", body = ErrorSchema),
        (status = 404, description = "Empty page or storage failure", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    let page = page_from_query(req.query_string())?;
    let listing = state.query.list_questions(page).await?;
    Ok(HttpResponse::Ok().json(QuestionListResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total_questions,
        categories: listing.categories,
    }))
}

/// Delete a question and return a page of what remains.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question id"),
        ("page" = Option<u32>, Query, description = "Page of remaining questions to return")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 400, description = "Page below 1 or out of range", body = ErrorSchema),
        (status = 404, description = "Non-integer id", body = ErrorSchema),
        (status = 422, description = "Unknown id or storage failure", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "deleteQuestion"
)]
#[delete("/questions/{id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    let page = page_from_query(req.query_string())?;
    let id = QuestionId::new(path.into_inner());
    let outcome = state.command.delete_question(id, page).await?;
    Ok(HttpResponse::Ok().json(DeleteQuestionResponse {
        success: true,
        deleted: outcome.deleted,
        total_questions: outcome.total_questions,
        question: outcome.remaining,
    }))
}

/// Create a question, or search when the body carries a `searchTerm`.
#[utoipa::path(
    post,
    path = "/questions",
    params(("page" = Option<u32>, Query, description = "Search results page, default 1")),
    request_body = QuestionsBody,
    responses(
        (
            status = 200,
            description = "Question created; a search answers with `SearchQuestionsResponse`",
            body = CreateQuestionResponse
        ),
        (status = 400, description = "Page below 1 or out of range", body = ErrorSchema),
        (status = 422, description = "Invalid body, no matches or storage failure", body = ErrorSchema)
    ),
    tags = ["questions"],
    operation_id = "createOrSearchQuestions"
)]
#[post("/questions")]
pub async fn create_or_search_questions(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let body: QuestionsBody = decode_json(&body, Error::unprocessable)?;
    match QuestionsRequest::try_from(body)? {
        QuestionsRequest::Search { search_term } => {
            let page = page_from_query(req.query_string())?;
            search(&state, search_term, page).await
        }
        QuestionsRequest::Create(question) => create(&state, question).await,
    }
}

async fn search(
    state: &HttpState,
    term: SearchTerm,
    page: PageRequest,
) -> ApiResult<HttpResponse> {
    let matches = state.query.search_questions(term, page).await?;
    Ok(HttpResponse::Ok().json(SearchQuestionsResponse {
        success: true,
        questions: matches.items,
        total_results: matches.total,
    }))
}

async fn create(state: &HttpState, question: NewQuestion) -> ApiResult<HttpResponse> {
    let outcome = state.command.create_question(question).await?;
    Ok(HttpResponse::Ok().json(CreateQuestionResponse {
        success: true,
        created: outcome.created,
        questions: outcome.questions,
        total_questions: outcome.total_questions,
    }))
}

#[cfg(test)]
#[path = "questions_tests.rs"]
mod tests;
