//! Test utilities for the trivia crate.
//!
//! Provides an in-memory store implementing both repository ports so unit
//! tests (in `src/`) and integration tests (in `tests/`) can drive the real
//! service without a database. Only compiled for tests or with the
//! `test-support` feature.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, QuestionRepository, QuestionRepositoryError,
};
use crate::domain::{
    Category, CategoryId, NewQuestion, Question, QuestionId, QuizScope, SearchTerm,
};

#[derive(Debug, Default)]
struct StoreState {
    categories: Vec<Category>,
    questions: Vec<Question>,
    last_id: i32,
}

/// In-memory question and category store.
///
/// Identifiers are assigned from a counter that never goes backwards, so a
/// deleted id is never reused. Listings are ordered by id.
///
/// # Examples
/// ```
/// use trivia::test_support::InMemoryTriviaStore;
///
/// let store = InMemoryTriviaStore::with_sample_data();
/// assert_eq!(store.category_count(), 6);
/// assert!(store.question_count() > 10);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryTriviaStore {
    state: Mutex<StoreState>,
    failing: AtomicBool,
}

impl InMemoryTriviaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding six categories and a question bank spread
    /// across them.
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        for &(id, kind) in SAMPLE_CATEGORIES {
            store.add_category(CategoryId::new(id), kind);
        }
        for &(question, answer, category, difficulty) in SAMPLE_QUESTIONS {
            store.add_question(question, answer, CategoryId::new(category), difficulty);
        }
        store
    }

    /// Add a category, replacing any existing category with the same id.
    pub fn add_category(&self, id: CategoryId, kind: impl Into<String>) {
        let mut state = self.lock();
        state.categories.retain(|category| category.id != id);
        state.categories.push(Category::new(id, kind));
        state.categories.sort_by_key(|category| category.id);
    }

    /// Store a question without validation and return its id.
    pub fn add_question(
        &self,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: i32,
    ) -> QuestionId {
        let mut state = self.lock();
        let id = Self::next_id(&mut state);
        state.questions.push(Question {
            id,
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        });
        id
    }

    /// Make every subsequent repository call fail with a connection error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn question_count(&self) -> usize {
        self.lock().questions.len()
    }

    pub fn category_count(&self) -> usize {
        self.lock().categories.len()
    }

    /// Copy of every stored question ordered by id.
    pub fn questions(&self) -> Vec<Question> {
        self.lock().questions.clone()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_id(state: &mut StoreState) -> QuestionId {
        state.last_id += 1;
        QuestionId::new(state.last_id)
    }

    fn check_question_access(&self) -> Result<(), QuestionRepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(QuestionRepositoryError::connection("store unavailable"));
        }
        Ok(())
    }

    fn check_category_access(&self) -> Result<(), CategoryRepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CategoryRepositoryError::connection("store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryTriviaStore {
    async fn count(&self) -> Result<u64, QuestionRepositoryError> {
        self.check_question_access()?;
        Ok(self.lock().questions.len() as u64)
    }

    async fn list_page(&self, page: PageRequest) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.check_question_access()?;
        Ok(page.slice(&self.lock().questions).to_vec())
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, QuestionRepositoryError> {
        self.check_question_access()?;
        Ok(self
            .lock()
            .questions
            .iter()
            .find(|question| question.id == id)
            .cloned())
    }

    async fn insert(&self, question: &NewQuestion) -> Result<Question, QuestionRepositoryError> {
        self.check_question_access()?;
        let mut state = self.lock();
        let id = Self::next_id(&mut state);
        let stored = question.clone().into_question(id);
        state.questions.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        self.check_question_access()?;
        let mut state = self.lock();
        let before = state.questions.len();
        state.questions.retain(|question| question.id != id);
        Ok(state.questions.len() < before)
    }

    async fn search(
        &self,
        term: &SearchTerm,
        page: PageRequest,
    ) -> Result<Page<Question>, QuestionRepositoryError> {
        self.check_question_access()?;
        let matches: Vec<Question> = self
            .lock()
            .questions
            .iter()
            .filter(|question| term.matches(&question.question))
            .cloned()
            .collect();
        Ok(Page::from_full(&matches, page))
    }

    async fn list_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.check_question_access()?;
        Ok(self
            .lock()
            .questions
            .iter()
            .filter(|question| question.category == category)
            .cloned()
            .collect())
    }

    async fn list_excluding(
        &self,
        excluded: &[QuestionId],
        scope: QuizScope,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.check_question_access()?;
        Ok(self
            .lock()
            .questions
            .iter()
            .filter(|question| scope.includes(question) && !excluded.contains(&question.id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryTriviaStore {
    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        self.check_category_access()?;
        Ok(self.lock().categories.clone())
    }
}

const SAMPLE_CATEGORIES: &[(i32, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

const SAMPLE_QUESTIONS: &[(&str, &str, i32, i32)] = &[
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    ("What is the name of the tennis court surface used at Wimbledon?", "Grass", 6, 1),
];
