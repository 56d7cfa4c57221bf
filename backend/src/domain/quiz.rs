//! Quiz play: choosing the next question of a client-driven session.
//!
//! The service keeps no session state. Each call carries the questions
//! already asked and the category being played; the next question is drawn
//! uniformly from whatever remains.

use rand::Rng;

use super::{CategoryId, Question, QuestionId};

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// Every stored question.
    AnyCategory,
    /// Questions referencing one category.
    Category(CategoryId),
}

impl QuizScope {
    /// Interpret a client category id, where `0` selects every category.
    ///
    /// # Examples
    /// ```
    /// use trivia::domain::{CategoryId, QuizScope};
    ///
    /// assert_eq!(QuizScope::from_category_id(0), QuizScope::AnyCategory);
    /// assert_eq!(
    ///     QuizScope::from_category_id(3),
    ///     QuizScope::Category(CategoryId::new(3))
    /// );
    /// ```
    pub fn from_category_id(id: i32) -> Self {
        if id == 0 {
            Self::AnyCategory
        } else {
            Self::Category(CategoryId::new(id))
        }
    }

    /// Whether a question belongs to the scope.
    pub fn includes(self, question: &Question) -> bool {
        match self {
            Self::AnyCategory => true,
            Self::Category(category) => question.category == category,
        }
    }
}

/// Request for the next question of a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    pub scope: QuizScope,
    pub previous_questions: Vec<QuestionId>,
}

impl QuizRound {
    pub fn new(scope: QuizScope, previous_questions: Vec<QuestionId>) -> Self {
        Self {
            scope,
            previous_questions,
        }
    }

    /// Whether a question may be asked next.
    pub fn allows(&self, question: &Question) -> bool {
        self.scope.includes(question) && !self.previous_questions.contains(&question.id)
    }
}

/// Draw one candidate uniformly at random.
///
/// The draw ranges over `0..candidates.len()`, so every candidate is
/// reachable and no index past the end is ever produced. An empty candidate
/// set yields `None`.
pub fn pick_next<R: Rng>(candidates: Vec<Question>, rng: &mut R) -> Option<Question> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..candidates.len());
    candidates.into_iter().nth(index)
}
