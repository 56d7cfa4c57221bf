//! Driving port for trivia mutations.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{Error, NewQuestion, Question, QuestionId};

/// Outcome of a successful deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedQuestion {
    pub deleted: QuestionId,
    /// Questions left in storage.
    pub total_questions: u64,
    /// The requested page of remaining questions.
    pub remaining: Vec<Question>,
}

/// Outcome of a successful creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedQuestion {
    pub created: QuestionId,
    /// First page of questions after the insert.
    pub questions: Vec<Question>,
    /// Questions in storage after the insert.
    pub total_questions: u64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaCommand: Send + Sync {
    /// Store a validated question.
    ///
    /// Fails with `Unprocessable` when storage fails.
    async fn create_question(&self, question: NewQuestion) -> Result<CreatedQuestion, Error>;

    /// Remove a question and report the requested page of what remains.
    ///
    /// Fails with `Unprocessable` when the question does not exist or
    /// storage fails.
    async fn delete_question(
        &self,
        id: QuestionId,
        page: PageRequest,
    ) -> Result<DeletedQuestion, Error>;
}
