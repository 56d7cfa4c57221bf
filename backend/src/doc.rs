//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every trivia endpoint and health probe together with
//! the schema wrappers from [`crate::inbound::http::schemas`], so domain
//! types stay free of utoipa derives. Swagger UI serves the document in
//! debug builds.

use utoipa::OpenApi;

use crate::inbound::http::categories::{CategoriesResponse, CategoryQuestionsResponse};
use crate::inbound::http::questions::{
    CreateQuestionResponse, DeleteQuestionResponse, QuestionListResponse, QuestionsBody,
    SearchQuestionsResponse,
};
use crate::inbound::http::quizzes::{QuizBody, QuizCategoryBody, QuizResponse};
use crate::inbound::http::schemas::{ErrorSchema, QuestionSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        description = "Question bank management and randomised quiz play."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::list_category_questions,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::questions::create_or_search_questions,
        crate::inbound::http::quizzes::next_quiz_question,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        QuestionSchema,
        ErrorSchema,
        CategoriesResponse,
        CategoryQuestionsResponse,
        QuestionListResponse,
        DeleteQuestionResponse,
        CreateQuestionResponse,
        SearchQuestionsResponse,
        QuestionsBody,
        QuizBody,
        QuizCategoryBody,
        QuizResponse,
    )),
    tags(
        (name = "categories", description = "Category listing"),
        (name = "questions", description = "Question bank management and search"),
        (name = "quizzes", description = "Random quiz play"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
