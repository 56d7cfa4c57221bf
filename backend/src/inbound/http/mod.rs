//! HTTP inbound adapter exposing the trivia REST endpoints.

use actix_web::web;

pub mod categories;
pub mod error;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Register the trivia routes and path extraction rules.
///
/// Callers supply [`state::HttpState`] as app data and should install
/// [`error::not_found_fallback`] as the default service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(categories::list_categories)
        .service(categories::list_category_questions)
        .service(questions::list_questions)
        .service(questions::delete_question)
        .service(questions::create_or_search_questions)
        .service(quizzes::next_quiz_question);
}
