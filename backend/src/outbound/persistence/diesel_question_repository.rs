//! PostgreSQL-backed `QuestionRepository` implementation using Diesel ORM.
//!
//! Every listing orders by id so pages are stable. Search uses `ILIKE` with
//! the term's wildcard characters escaped, so the term always matches as a
//! literal substring.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{Page, PageRequest};

use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};
use crate::domain::{CategoryId, NewQuestion, Question, QuestionId, QuizScope, SearchTerm};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewQuestionRow, QuestionRow};
use super::pool::DbPool;
use super::schema::questions;

/// Diesel-backed implementation of the `QuestionRepository` port.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Build an `ILIKE` pattern matching `term` anywhere in the text.
///
/// PostgreSQL treats backslash as the default `LIKE` escape character.
fn contains_pattern(term: &SearchTerm) -> String {
    let mut pattern = String::with_capacity(term.as_str().len() + 2);
    pattern.push('%');
    for ch in term.as_str().chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn page_bounds(page: PageRequest) -> (i64, i64) {
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
    (offset, i64::from(page.limit()))
}

fn count_to_u64(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}

fn to_questions(rows: Vec<QuestionRow>) -> Vec<Question> {
    rows.into_iter().map(Question::from).collect()
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn count(&self) -> Result<u64, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = questions::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(count_to_u64(total))
    }

    async fn list_page(&self, page: PageRequest) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let (offset, limit) = page_bounds(page);

        let rows: Vec<QuestionRow> = questions::table
            .order(questions::id.asc())
            .offset(offset)
            .limit(limit)
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(to_questions(rows))
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<QuestionRow> = questions::table
            .filter(questions::id.eq(id.get()))
            .select(QuestionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Question::from))
    }

    async fn insert(&self, question: &NewQuestion) -> Result<Question, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewQuestionRow::from(question);

        let stored: QuestionRow = diesel::insert_into(questions::table)
            .values(&row)
            .returning(QuestionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Question::from(stored))
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(questions::table.filter(questions::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }

    async fn search(
        &self,
        term: &SearchTerm,
        page: PageRequest,
    ) -> Result<Page<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let pattern = contains_pattern(term);
        let (offset, limit) = page_bounds(page);

        let total: i64 = questions::table
            .filter(questions::question.ilike(&pattern))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<QuestionRow> = questions::table
            .filter(questions::question.ilike(&pattern))
            .order(questions::id.asc())
            .offset(offset)
            .limit(limit)
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Page::new(to_questions(rows), count_to_u64(total)))
    }

    async fn list_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<QuestionRow> = questions::table
            .filter(questions::category.eq(category.get()))
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(to_questions(rows))
    }

    async fn list_excluding(
        &self,
        excluded: &[QuestionId],
        scope: QuizScope,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let excluded_ids: Vec<i32> = excluded.iter().map(|id| id.get()).collect();

        let mut query = questions::table
            .filter(questions::id.ne_all(excluded_ids))
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .into_boxed::<Pg>();
        if let QuizScope::Category(category) = scope {
            query = query.filter(questions::category.eq(category.get()));
        }

        let rows: Vec<QuestionRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;

        Ok(to_questions(rows))
    }
}
