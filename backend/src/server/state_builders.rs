//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use trivia::domain::TriviaService;
use trivia::inbound::http::state::HttpState;
use trivia::outbound::persistence::{DieselCategoryRepository, DieselQuestionRepository};

use super::ServerConfig;

/// Build HTTP state backed by the PostgreSQL repositories.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = Arc::new(TriviaService::new(
        Arc::new(DieselQuestionRepository::new(config.db_pool.clone())),
        Arc::new(DieselCategoryRepository::new(config.db_pool.clone())),
    ));
    web::Data::new(HttpState::new(service.clone(), service))
}
