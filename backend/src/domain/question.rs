//! Trivia questions and the inputs that create or find them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::CategoryId;

/// Storage-assigned question identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i32);

impl QuestionId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored quiz item.
///
/// `category` is a plain reference: the service never checks that the
/// category exists, so lookups through a dangling reference simply find
/// nothing.
///
/// Serialises as
/// `{"id", "question", "answer", "category", "difficulty"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// Validation errors returned by [`NewQuestion::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionValidationError {
    EmptyQuestion,
    EmptyAnswer,
}

impl fmt::Display for QuestionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuestion => write!(f, "question text must not be empty"),
            Self::EmptyAnswer => write!(f, "answer text must not be empty"),
        }
    }
}

impl std::error::Error for QuestionValidationError {}

/// A question that has not been stored yet.
///
/// ## Invariants
/// - `question` and `answer` are non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: i32,
}

impl NewQuestion {
    /// Validate the question fields.
    ///
    /// # Examples
    /// ```
    /// use trivia::domain::{CategoryId, NewQuestion, QuestionValidationError};
    ///
    /// let ok = NewQuestion::try_new("What is H2O?", "Water", CategoryId::new(1), 1);
    /// assert!(ok.is_ok());
    ///
    /// let blank = NewQuestion::try_new("  ", "Water", CategoryId::new(1), 1);
    /// assert_eq!(blank, Err(QuestionValidationError::EmptyQuestion));
    /// ```
    pub fn try_new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: i32,
    ) -> Result<Self, QuestionValidationError> {
        let question = question.into();
        let answer = answer.into();
        if question.trim().is_empty() {
            return Err(QuestionValidationError::EmptyQuestion);
        }
        if answer.trim().is_empty() {
            return Err(QuestionValidationError::EmptyAnswer);
        }
        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        self.question.as_str()
    }

    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// Attach the identifier assigned by storage.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Free-text search input matched as a case-insensitive substring of the
/// question text.
///
/// ## Invariants
/// - The term is non-empty. Whitespace is significant and kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Wrap a term, returning `None` for the empty string.
    pub fn new(term: impl Into<String>) -> Option<Self> {
        let term = term.into();
        (!term.is_empty()).then_some(Self(term))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether `text` contains the term, ignoring case.
    ///
    /// # Examples
    /// ```
    /// use trivia::domain::SearchTerm;
    ///
    /// let term = SearchTerm::new("what").expect("non-empty");
    /// assert!(term.matches("What is the capital of France?"));
    /// assert!(!term.matches("Name the capital of France."));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
