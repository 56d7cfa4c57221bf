//! Tests for the trivia service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{
    CategoryRepositoryError, MockCategoryRepository,
    MockQuestionRepository, QuestionRepositoryError,
};
use crate::domain::{Category, QuizScope};
use rstest::rstest;

fn question(id: i32, category: i32) -> Question {
    Question {
        id: QuestionId::new(id),
        question: format!("Question {id}"),
        answer: format!("Answer {id}"),
        category: CategoryId::new(category),
        difficulty: 1,
    }
}

/// Service whose category store is empty.
fn make_service(
    questions: MockQuestionRepository,
) -> TriviaService<MockQuestionRepository, MockCategoryRepository> {
    let mut categories = MockCategoryRepository::new();
    categories.expect_list_all().returning(|| Ok(Vec::new()));
    TriviaService::new(Arc::new(questions), Arc::new(categories))
}

fn make_full_service(
    questions: MockQuestionRepository,
    categories: MockCategoryRepository,
) -> TriviaService<MockQuestionRepository, MockCategoryRepository> {
    TriviaService::new(Arc::new(questions), Arc::new(categories))
}

fn science_and_art() -> MockCategoryRepository {
    let mut categories = MockCategoryRepository::new();
    categories.expect_list_all().times(1).return_once(|| {
        Ok(vec![
            Category::new(CategoryId::new(1), "Science"),
            Category::new(CategoryId::new(2), "Art"),
        ])
    });
    categories
}

#[tokio::test]
async fn list_categories_returns_map() {
    let service = make_full_service(MockQuestionRepository::new(), science_and_art());

    let categories = service.list_categories().await.expect("categories");
    assert_eq!(categories.len(), 2);
    assert_eq!(categories.get(CategoryId::new(1)), Some("Science"));
}

#[tokio::test]
async fn list_categories_rejects_empty_store() {
    let service = make_service(MockQuestionRepository::new());

    let error = service.list_categories().await.expect_err("no categories");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn list_categories_maps_storage_failure_to_not_found() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_list_all()
        .times(1)
        .return_once(|| Err(CategoryRepositoryError::connection("refused")));
    let service = make_full_service(MockQuestionRepository::new(), categories);

    let error = service.list_categories().await.expect_err("storage down");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn list_questions_combines_page_total_and_categories() {
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_list_page()
        .withf(|page| page.number() == 2)
        .times(1)
        .return_once(|_| Ok(vec![question(11, 1), question(12, 2)]));
    questions.expect_count().times(1).return_once(|| Ok(12));
    let service = make_full_service(questions, science_and_art());

    let listing = service
        .list_questions(PageRequest::new(2).expect("valid page"))
        .await
        .expect("listing");
    assert_eq!(listing.questions.len(), 2);
    assert_eq!(listing.total_questions, 12);
    assert_eq!(listing.categories.len(), 2);
}

#[tokio::test]
async fn list_questions_rejects_page_past_the_end() {
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_list_page()
        .times(1)
        .return_once(|_| Ok(Vec::new()));
    questions.expect_count().never();
    let service = make_service(questions);

    let error = service
        .list_questions(PageRequest::new(1000).expect("valid page"))
        .await
        .expect_err("empty page");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn delete_question_reports_remaining_page() {
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_find_by_id()
        .times(1)
        .return_once(|id| Ok(Some(question(id.get(), 1))));
    questions
        .expect_delete()
        .withf(|id| *id == QuestionId::new(5))
        .times(1)
        .return_once(|_| Ok(true));
    questions.expect_count().times(1).return_once(|| Ok(18));
    questions
        .expect_list_page()
        .times(1)
        .return_once(|_| Ok(vec![question(1, 1), question(2, 1)]));
    let service = make_service(questions);

    let outcome = service
        .delete_question(QuestionId::new(5), PageRequest::first())
        .await
        .expect("deleted");
    assert_eq!(outcome.deleted, QuestionId::new(5));
    assert_eq!(outcome.total_questions, 18);
    assert_eq!(outcome.remaining.len(), 2);
}

#[tokio::test]
async fn delete_question_rejects_unknown_id() {
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));
    questions.expect_delete().never();
    let service = make_service(questions);

    let error = service
        .delete_question(QuestionId::new(9999), PageRequest::first())
        .await
        .expect_err("missing question");
    assert_eq!(error.code(), ErrorCode::Unprocessable);
}

#[tokio::test]
async fn delete_question_rejects_concurrent_removal() {
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_find_by_id()
        .times(1)
        .return_once(|id| Ok(Some(question(id.get(), 1))));
    questions.expect_delete().times(1).return_once(|_| Ok(false));
    let service = make_service(questions);

    let error = service
        .delete_question(QuestionId::new(3), PageRequest::first())
        .await
        .expect_err("already gone");
    assert_eq!(error.code(), ErrorCode::Unprocessable);
}

#[tokio::test]
async fn create_question_returns_new_id_and_first_page() {
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_insert()
        .times(1)
        .return_once(|new| Ok(new.clone().into_question(QuestionId::new(24))));
    questions.expect_count().times(1).return_once(|| Ok(20));
    questions
        .expect_list_page()
        .withf(|page| page.number() == 1)
        .times(1)
        .return_once(|_| Ok(vec![question(1, 1)]));
    let service = make_service(questions);

    let new = NewQuestion::try_new("What is H2O?", "Water", CategoryId::new(1), 1)
        .expect("valid question");
    let outcome = service.create_question(new).await.expect("created");
    assert_eq!(outcome.created, QuestionId::new(24));
    assert_eq!(outcome.total_questions, 20);
    assert_eq!(outcome.questions.len(), 1);
}

#[tokio::test]
async fn create_question_maps_storage_failure_to_unprocessable() {
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_insert()
        .times(1)
        .return_once(|_| Err(QuestionRepositoryError::query("constraint violated")));
    let service = make_service(questions);

    let new = NewQuestion::try_new("q", "a", CategoryId::new(1), 1).expect("valid question");
    let error = service.create_question(new).await.expect_err("insert fails");
    assert_eq!(error.code(), ErrorCode::Unprocessable);
    assert!(error.cause().contains("constraint violated"));
}

#[tokio::test]
async fn search_questions_returns_matches() {
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_search()
        .withf(|term, _| term.as_str() == "title")
        .times(1)
        .return_once(|_, _| Ok(Page::new(vec![question(5, 4)], 1)));
    let service = make_service(questions);

    let term = SearchTerm::new("title").expect("non-empty");
    let page = service
        .search_questions(term, PageRequest::first())
        .await
        .expect("matches");
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, QuestionId::new(5));
}

#[tokio::test]
async fn search_questions_rejects_no_matches() {
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_search()
        .times(1)
        .return_once(|_, _| Ok(Page::new(Vec::new(), 0)));
    let service = make_service(questions);

    let term = SearchTerm::new("zzzz-nothing").expect("non-empty");
    let error = service
        .search_questions(term, PageRequest::first())
        .await
        .expect_err("no matches");
    assert_eq!(error.code(), ErrorCode::Unprocessable);
}

#[rstest]
#[case(Ok(vec![question(1, 3), question(2, 3)]), Ok(2))]
#[case(Ok(Vec::new()), Ok(0))]
#[case(Err(QuestionRepositoryError::connection("refused")), Err(ErrorCode::NotFound))]
#[tokio::test]
async fn questions_in_category_passes_results_through(
    #[case] stored: Result<Vec<Question>, QuestionRepositoryError>,
    #[case] expected: Result<usize, ErrorCode>,
) {
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_list_by_category()
        .withf(|category| *category == CategoryId::new(3))
        .times(1)
        .return_once(move |_| stored);
    let service = make_service(questions);

    let result = service
        .questions_in_category(CategoryId::new(3))
        .await
        .map(|found| found.len())
        .map_err(|error| error.code());
    assert_eq!(result, expected);
}

#[tokio::test]
async fn next_quiz_question_skips_previous_and_other_categories() {
    let mut questions = MockQuestionRepository::new();
    // Adapters may return extra rows; the round filter still applies.
    questions
        .expect_list_excluding()
        .times(1)
        .return_once(|_, _| Ok(vec![question(1, 2), question(2, 2), question(3, 5)]));
    let service = make_service(questions);

    let round = QuizRound::new(
        QuizScope::Category(CategoryId::new(2)),
        vec![QuestionId::new(1)],
    );
    let picked = service
        .next_quiz_question(round)
        .await
        .expect("quiz query")
        .expect("one candidate left");
    assert_eq!(picked.id, QuestionId::new(2));
}

#[tokio::test]
async fn next_quiz_question_returns_none_when_exhausted() {
    let mut questions = MockQuestionRepository::new();
    questions
        .expect_list_excluding()
        .withf(|excluded, scope| excluded.len() == 2 && *scope == QuizScope::AnyCategory)
        .times(1)
        .return_once(|_, _| Ok(Vec::new()));
    let service = make_service(questions);

    let round = QuizRound::new(
        QuizScope::AnyCategory,
        vec![QuestionId::new(1), QuestionId::new(2)],
    );
    let picked = service.next_quiz_question(round).await.expect("quiz query");
    assert!(picked.is_none());
}
