//! Port for question storage.
//!
//! Listing methods return questions ordered by id so page boundaries are
//! stable between calls.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{CategoryId, NewQuestion, Question, QuestionId, QuizScope, SearchTerm};

use super::define_port_error;

define_port_error! {
    /// Errors raised by question repository adapters.
    pub enum QuestionRepositoryError {
        /// Repository connection could not be established.
        Connection => "question repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "question repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Number of stored questions.
    async fn count(&self) -> Result<u64, QuestionRepositoryError>;

    /// One page of all questions.
    async fn list_page(&self, page: PageRequest) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Fetch a question by identifier.
    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, QuestionRepositoryError>;

    /// Store a new question and return it with its assigned id.
    async fn insert(&self, question: &NewQuestion) -> Result<Question, QuestionRepositoryError>;

    /// Remove a question. Returns `false` when no row had the id.
    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError>;

    /// One page of questions whose text contains `term`, ignoring case,
    /// together with the number of matches across all pages.
    async fn search(
        &self,
        term: &SearchTerm,
        page: PageRequest,
    ) -> Result<Page<Question>, QuestionRepositoryError>;

    /// Every question referencing `category`.
    async fn list_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Every question in `scope` whose id is not in `excluded`.
    async fn list_excluding(
        &self,
        excluded: &[QuestionId],
        scope: QuizScope,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;
}
