//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{MockTriviaCommand, MockTriviaQuery};
use crate::domain::{CategoryId, Question, QuestionId};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{configure, error::not_found_fallback};

/// Build an app serving the trivia routes over mocked ports.
pub fn trivia_app(
    query: MockTriviaQuery,
    command: MockTriviaCommand,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(query), Arc::new(command));
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
        .default_service(web::to(not_found_fallback))
}

/// A stored question with predictable text.
pub fn question(id: i32, category: i32) -> Question {
    Question {
        id: QuestionId::new(id),
        question: format!("Question {id}"),
        answer: format!("Answer {id}"),
        category: CategoryId::new(category),
        difficulty: 1,
    }
}
