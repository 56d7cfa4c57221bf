//! Driving port for read-only trivia use-cases.
//!
//! HTTP handlers use this port to list, search and draw questions without
//! importing persistence concerns. Errors are already categorised for the
//! endpoint that exposes each use-case.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{CategoryId, CategoryMap, Error, Question, QuizRound, SearchTerm};

/// One page of the question catalogue with the context a listing needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListing {
    pub questions: Vec<Question>,
    /// Number of stored questions across all pages.
    pub total_questions: u64,
    pub categories: CategoryMap,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaQuery: Send + Sync {
    /// Every category keyed by id.
    ///
    /// Fails with `NotFound` when no category is stored or storage fails.
    async fn list_categories(&self) -> Result<CategoryMap, Error>;

    /// One page of all questions plus the category map.
    ///
    /// Fails with `NotFound` when the page is empty or storage fails.
    async fn list_questions(&self, page: PageRequest) -> Result<QuestionListing, Error>;

    /// One page of questions containing `term`, with the total match count.
    ///
    /// Fails with `Unprocessable` when nothing matches or storage fails.
    async fn search_questions(
        &self,
        term: SearchTerm,
        page: PageRequest,
    ) -> Result<Page<Question>, Error>;

    /// Every question referencing `category`; an empty list is a success.
    ///
    /// Fails with `NotFound` when storage fails.
    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>, Error>;

    /// A random question allowed by `round`, or `None` when none remain.
    ///
    /// Fails with `NotFound` when storage fails.
    async fn next_quiz_question(&self, round: QuizRound) -> Result<Option<Question>, Error>;
}
