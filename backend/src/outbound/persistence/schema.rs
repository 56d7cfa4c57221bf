//! Diesel table definitions for the trivia schema.
//!
//! These definitions must match `backend/migrations` exactly. The
//! `diesel print-schema` command regenerates them from a live database.

diesel::table! {
    /// Question categories, seeded alongside the database.
    categories (id) {
        /// Primary key.
        id -> Int4,
        /// Display name, for example "Science".
        #[sql_name = "type"]
        kind -> Text,
    }
}

diesel::table! {
    /// Quiz questions.
    ///
    /// `category` holds a category id without a foreign key constraint.
    questions (id) {
        /// Primary key, assigned from a serial sequence.
        id -> Int4,
        question -> Text,
        answer -> Text,
        category -> Int4,
        difficulty -> Int4,
    }
}

diesel::allow_tables_to_appear_in_same_query!(categories, questions);
