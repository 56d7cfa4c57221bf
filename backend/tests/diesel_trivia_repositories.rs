//! Integration tests for the Diesel trivia repositories against embedded
//! PostgreSQL.
//!
//! Each test runs on a freshly migrated database holding the six seeded
//! categories and no questions.

use std::net::SocketAddr;

use pagination::PageRequest;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use uuid::Uuid;

use pg_embedded_setup_unpriv::TestCluster;
use trivia::domain::ports::{CategoryRepository, QuestionRepository};
use trivia::domain::{CategoryId, NewQuestion, Question, QuestionId, QuizScope, SearchTerm};
use trivia::outbound::persistence::{
    DbPool, DieselCategoryRepository, DieselQuestionRepository, PoolConfig,
};

#[path = "support/embedded_postgres.rs"]
mod embedded_postgres;

use embedded_postgres::{handle_cluster_setup_failure, migrate_schema, reset_database, test_cluster};

#[allow(dead_code, reason = "the listener address is only read by the server")]
#[path = "../src/server/config.rs"]
mod server_config;
pub use server_config::ServerConfig;

#[path = "../src/server/state_builders.rs"]
mod state_builders;

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    pool: DbPool,
    questions: DieselQuestionRepository,
    categories: DieselCategoryRepository,
}

impl TestContext {
    fn insert(&self, question: &str, category: i32) -> Question {
        let new = NewQuestion::try_new(question, "answer", CategoryId::new(category), 1)
            .expect("valid question");
        self.runtime
            .block_on(self.questions.insert(&new))
            .expect("insert question")
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    let database = format!("trivia_repo_{}", Uuid::new_v4().simple());
    reset_database(&cluster, &database)?;
    let database_url = cluster.connection().database_url(&database);
    migrate_schema(&database_url)?;

    let config = PoolConfig::new(&database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        questions: DieselQuestionRepository::new(pool.clone()),
        categories: DieselCategoryRepository::new(pool.clone()),
        pool,
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn ids(questions: &[Question]) -> Vec<QuestionId> {
    questions.iter().map(|question| question.id).collect()
}

#[rstest]
fn seeded_categories_are_listed_in_id_order(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: seeded_categories_are_listed_in_id_order skipped");
        return;
    };

    let categories = context
        .runtime
        .block_on(context.categories.list_all())
        .expect("list categories");
    let names: Vec<&str> = categories.iter().map(|category| category.kind.as_str()).collect();
    assert_eq!(
        names,
        ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
    );
    assert!(categories.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[rstest]
fn pages_follow_ascending_ids(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: pages_follow_ascending_ids skipped");
        return;
    };

    let inserted: Vec<Question> = (1..=12)
        .map(|n| context.insert(&format!("Question {n}"), 1))
        .collect();
    assert!(inserted.windows(2).all(|pair| pair[0].id < pair[1].id));

    let first = context
        .runtime
        .block_on(context.questions.list_page(PageRequest::first()))
        .expect("first page");
    let second = context
        .runtime
        .block_on(context.questions.list_page(PageRequest::new(2).expect("page 2")))
        .expect("second page");
    let beyond = context
        .runtime
        .block_on(context.questions.list_page(PageRequest::new(3).expect("page 3")))
        .expect("third page");
    let total = context
        .runtime
        .block_on(context.questions.count())
        .expect("count");

    assert_eq!(ids(&first), ids(&inserted[..10]));
    assert_eq!(ids(&second), ids(&inserted[10..]));
    assert!(beyond.is_empty());
    assert_eq!(total, 12);
}

#[rstest]
#[case("what", 2)]
#[case("WHAT IS", 2)]
#[case("50%", 1)]
#[case("_", 1)]
#[case("\\", 0)]
fn search_matches_literal_substrings_ignoring_case(
    repo_context: Option<TestContext>,
    #[case] term: &str,
    #[case] expected: u64,
) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: search_matches_literal_substrings_ignoring_case skipped");
        return;
    };

    context.insert("What is 50% of 10?", 1);
    context.insert("What is 50 of 100?", 1);
    context.insert("Name a snake_case identifier.", 2);

    let term = SearchTerm::new(term).expect("non-empty");
    let page = context
        .runtime
        .block_on(context.questions.search(&term, PageRequest::first()))
        .expect("search");
    assert_eq!(page.total, expected);
    assert_eq!(page.items.len() as u64, expected);
}

#[rstest]
fn search_total_spans_every_page(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: search_total_spans_every_page skipped");
        return;
    };

    for n in 1..=13 {
        context.insert(&format!("Title number {n}"), 1);
    }
    context.insert("Unrelated", 1);

    let term = SearchTerm::new("title").expect("non-empty");
    let page = context
        .runtime
        .block_on(context.questions.search(&term, PageRequest::new(2).expect("page 2")))
        .expect("search");
    assert_eq!(page.total, 13);
    assert_eq!(page.items.len(), 3);
}

#[rstest]
fn list_excluding_honours_scope_and_previous_ids(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: list_excluding_honours_scope_and_previous_ids skipped");
        return;
    };

    let asked = context.insert("Science one", 1);
    let remaining = context.insert("Science two", 1);
    let other = context.insert("Art one", 2);

    let in_category = context
        .runtime
        .block_on(
            context
                .questions
                .list_excluding(&[asked.id], QuizScope::Category(CategoryId::new(1))),
        )
        .expect("category candidates");
    assert_eq!(ids(&in_category), vec![remaining.id]);

    let anywhere = context
        .runtime
        .block_on(context.questions.list_excluding(&[], QuizScope::AnyCategory))
        .expect("all candidates");
    assert_eq!(ids(&anywhere), vec![asked.id, remaining.id, other.id]);
}

#[rstest]
fn list_by_category_ignores_other_categories(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: list_by_category_ignores_other_categories skipped");
        return;
    };

    let art = context.insert("Art one", 2);
    context.insert("Science one", 1);

    let found = context
        .runtime
        .block_on(context.questions.list_by_category(CategoryId::new(2)))
        .expect("by category");
    let missing = context
        .runtime
        .block_on(context.questions.list_by_category(CategoryId::new(99)))
        .expect("unknown category");
    assert_eq!(ids(&found), vec![art.id]);
    assert!(missing.is_empty());
}

#[rstest]
fn delete_reports_whether_a_row_was_removed(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: delete_reports_whether_a_row_was_removed skipped");
        return;
    };

    let stored = context.insert("Short-lived", 3);
    let fetched = context
        .runtime
        .block_on(context.questions.find_by_id(stored.id))
        .expect("find");
    assert_eq!(fetched, Some(stored.clone()));

    let first = context
        .runtime
        .block_on(context.questions.delete(stored.id))
        .expect("delete");
    let second = context
        .runtime
        .block_on(context.questions.delete(stored.id))
        .expect("repeat delete");
    let after = context
        .runtime
        .block_on(context.questions.find_by_id(stored.id))
        .expect("find after delete");

    assert!(first);
    assert!(!second);
    assert!(after.is_none());
}

#[rstest]
fn server_state_reads_through_the_database(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: server_state_reads_through_the_database skipped");
        return;
    };

    let stored = context.insert("Stored through Diesel", 4);
    let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)), context.pool.clone());
    let state = state_builders::build_http_state(&config);

    let categories = context
        .runtime
        .block_on(state.query.list_categories())
        .expect("categories");
    let in_category = context
        .runtime
        .block_on(state.query.questions_in_category(CategoryId::new(4)))
        .expect("category questions");
    assert_eq!(categories.len(), 6);
    assert_eq!(ids(&in_category), vec![stored.id]);
}
