//! Trivia domain service.
//!
//! Implements the driving ports on top of the question and category
//! repositories. Each use-case reports every failure under the single error
//! code its endpoint exposes; storage details are logged and kept out of the
//! response.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    CategoryRepository, CreatedQuestion, DeletedQuestion, QuestionListing, QuestionRepository,
    TriviaCommand, TriviaQuery,
};
use crate::domain::quiz::pick_next;
use crate::domain::{
    CategoryId, CategoryMap, Error, ErrorCode, NewQuestion, Question, QuestionId, QuizRound,
    SearchTerm,
};

/// Trivia service implementing [`TriviaQuery`] and [`TriviaCommand`].
#[derive(Clone)]
pub struct TriviaService<Q, C> {
    questions: Arc<Q>,
    categories: Arc<C>,
}

impl<Q, C> TriviaService<Q, C> {
    /// Create a new service with the given repositories.
    pub fn new(questions: Arc<Q>, categories: Arc<C>) -> Self {
        Self {
            questions,
            categories,
        }
    }
}

/// Build an error mapper that logs the storage failure and reports it under
/// `code`.
fn storage_failure<E: fmt::Display>(
    code: ErrorCode,
    operation: &'static str,
) -> impl FnOnce(E) -> Error {
    move |err| {
        warn!(operation, error = %err, "storage operation failed");
        Error::new(code, format!("{operation}: {err}"))
    }
}

impl<Q, C> TriviaService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn category_map(&self) -> Result<CategoryMap, Error> {
        let categories = self
            .categories
            .list_all()
            .await
            .map_err(storage_failure(ErrorCode::NotFound, "list categories"))?;
        Ok(CategoryMap::from_categories(categories))
    }

    async fn count_questions(&self, code: ErrorCode) -> Result<u64, Error> {
        self.questions
            .count()
            .await
            .map_err(storage_failure(code, "count questions"))
    }

    async fn question_page(&self, page: PageRequest, code: ErrorCode) -> Result<Vec<Question>, Error> {
        self.questions
            .list_page(page)
            .await
            .map_err(storage_failure(code, "list questions"))
    }
}

#[async_trait]
impl<Q, C> TriviaQuery for TriviaService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn list_categories(&self) -> Result<CategoryMap, Error> {
        let categories = self.category_map().await?;
        if categories.is_empty() {
            return Err(Error::not_found("no categories are stored"));
        }
        Ok(categories)
    }

    async fn list_questions(&self, page: PageRequest) -> Result<QuestionListing, Error> {
        let questions = self.question_page(page, ErrorCode::NotFound).await?;
        if questions.is_empty() {
            return Err(Error::not_found(format!(
                "page {} holds no questions",
                page.number()
            )));
        }
        let total_questions = self.count_questions(ErrorCode::NotFound).await?;
        let categories = self.category_map().await?;
        Ok(QuestionListing {
            questions,
            total_questions,
            categories,
        })
    }

    async fn search_questions(
        &self,
        term: SearchTerm,
        page: PageRequest,
    ) -> Result<Page<Question>, Error> {
        let matches = self
            .questions
            .search(&term, page)
            .await
            .map_err(storage_failure(ErrorCode::Unprocessable, "search questions"))?;
        if matches.total == 0 {
            return Err(Error::unprocessable(format!(
                "no question contains \"{term}\""
            )));
        }
        debug!(total = matches.total, page = page.number(), "search matched questions");
        Ok(matches)
    }

    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>, Error> {
        self.questions
            .list_by_category(category)
            .await
            .map_err(storage_failure(ErrorCode::NotFound, "list questions by category"))
    }

    async fn next_quiz_question(&self, round: QuizRound) -> Result<Option<Question>, Error> {
        let candidates: Vec<Question> = self
            .questions
            .list_excluding(&round.previous_questions, round.scope)
            .await
            .map_err(storage_failure(ErrorCode::NotFound, "list quiz candidates"))?
            .into_iter()
            // Re-applied so an adapter returning extra rows never repeats a question.
            .filter(|question| round.allows(question))
            .collect();
        debug!(candidates = candidates.len(), "drawing next quiz question");
        Ok(pick_next(candidates, &mut SmallRng::from_entropy()))
    }
}

#[async_trait]
impl<Q, C> TriviaCommand for TriviaService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn create_question(&self, question: NewQuestion) -> Result<CreatedQuestion, Error> {
        let stored = self
            .questions
            .insert(&question)
            .await
            .map_err(storage_failure(ErrorCode::Unprocessable, "insert question"))?;
        info!(question_id = %stored.id, category = %stored.category, "question created");
        let total_questions = self.count_questions(ErrorCode::Unprocessable).await?;
        let questions = self
            .question_page(PageRequest::first(), ErrorCode::Unprocessable)
            .await?;
        Ok(CreatedQuestion {
            created: stored.id,
            questions,
            total_questions,
        })
    }

    async fn delete_question(
        &self,
        id: QuestionId,
        page: PageRequest,
    ) -> Result<DeletedQuestion, Error> {
        let existing = self
            .questions
            .find_by_id(id)
            .await
            .map_err(storage_failure(ErrorCode::Unprocessable, "find question"))?;
        if existing.is_none() {
            return Err(Error::unprocessable(format!("question {id} does not exist")));
        }
        let removed = self
            .questions
            .delete(id)
            .await
            .map_err(storage_failure(ErrorCode::Unprocessable, "delete question"))?;
        if !removed {
            return Err(Error::unprocessable(format!(
                "question {id} was removed concurrently"
            )));
        }
        info!(question_id = %id, "question deleted");
        let total_questions = self.count_questions(ErrorCode::Unprocessable).await?;
        let remaining = self.question_page(page, ErrorCode::Unprocessable).await?;
        Ok(DeletedQuestion {
            deleted: id,
            total_questions,
            remaining,
        })
    }
}

#[cfg(test)]
#[path = "trivia_service_tests.rs"]
mod tests;
