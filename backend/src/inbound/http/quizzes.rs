//! Quiz endpoint.
//!
//! ```text
//! POST /quizzes
//! ```
//!
//! The client carries the session: each call sends the category being
//! played and every question already asked.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Question, QuestionId, QuizRound, QuizScope};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, QuestionSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{LenientInt, decode_json};

/// Category being played. Extra keys such as `type` are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategoryBody {
    /// Category id as a number or numeric string; `0` plays every category.
    #[schema(value_type = i32, example = 0)]
    pub id: LenientInt,
}

/// `POST /quizzes` body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizBody {
    pub quiz_category: QuizCategoryBody,
    /// Ids of the questions already asked.
    #[schema(value_type = Vec<i32>, example = json!([1, 4]))]
    pub previous_questions: Vec<QuestionId>,
}

impl From<QuizBody> for QuizRound {
    fn from(body: QuizBody) -> Self {
        let LenientInt(category) = body.quiz_category.id;
        QuizRound::new(QuizScope::from_category_id(category), body.previous_questions)
    }
}

/// Response payload for the next quiz question.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    #[schema(example = true)]
    pub success: bool,
    /// The next question, or `null` once every candidate has been asked.
    #[schema(value_type = Option<QuestionSchema>)]
    pub question: Option<Question>,
}

/// Draw the next quiz question at random.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizBody,
    responses(
        (status = 200, description = "Next question or null", body = QuizResponse),
        (status = 404, description = "Malformed body or storage failure", body = ErrorSchema)
    ),
    tags = ["quizzes"],
    operation_id = "nextQuizQuestion"
)]
#[post("/quizzes")]
pub async fn next_quiz_question(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let body: QuizBody = decode_json(&body, Error::not_found)?;
    let question = state.query.next_quiz_question(QuizRound::from(body)).await?;
    Ok(HttpResponse::Ok().json(QuizResponse {
        success: true,
        question,
    }))
}
