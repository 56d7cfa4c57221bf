//! Internal Diesel row structs for the trivia tables.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain types before returning.

use diesel::prelude::*;

use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

use super::schema::{categories, questions};

/// Row struct for reading from the categories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: i32,
    pub kind: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::new(CategoryId::new(row.id), row.kind)
    }
}

/// Row struct for reading from the questions table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct QuestionRow {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: QuestionId::new(row.id),
            question: row.question,
            answer: row.answer,
            category: CategoryId::new(row.category),
            difficulty: row.difficulty,
        }
    }
}

/// Insertable struct for new questions; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions)]
pub(crate) struct NewQuestionRow<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub category: i32,
    pub difficulty: i32,
}

impl<'a> From<&'a NewQuestion> for NewQuestionRow<'a> {
    fn from(question: &'a NewQuestion) -> Self {
        Self {
            question: question.question(),
            answer: question.answer(),
            category: question.category().get(),
            difficulty: question.difficulty(),
        }
    }
}
