//! Shared helpers for trivia integration tests.
//!
//! Builds the production route table over the in-memory store from the
//! `test-support` feature, wrapped in the same middleware as the server.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use serde_json::Value;

use trivia::domain::TriviaService;
use trivia::inbound::http::configure;
use trivia::inbound::http::error::not_found_fallback;
use trivia::inbound::http::state::HttpState;
use trivia::test_support::InMemoryTriviaStore;
use trivia::{Cors, Trace};

/// Build the full application over `store`.
pub fn trivia_app(
    store: Arc<InMemoryTriviaStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let service = Arc::new(TriviaService::new(store.clone(), store));
    let state = HttpState::new(service.clone(), service);
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
        .default_service(web::to(not_found_fallback))
        .wrap(Cors)
        .wrap(Trace)
}

/// Ids of the questions in a response array.
#[allow(dead_code, reason = "not every test binary inspects ids")]
pub fn ids(questions: &Value) -> Vec<i64> {
    questions
        .as_array()
        .map(|items| items.iter().filter_map(|item| item["id"].as_i64()).collect())
        .unwrap_or_default()
}
