//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe how the domain reaches storage;
//! driving ports (`Trivia*`) describe the use-cases inbound adapters call.
//! Each trait exposes a strongly typed error so adapters map their failures
//! into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod category_repository;
mod question_repository;
mod trivia_command;
mod trivia_query;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::{QuestionRepository, QuestionRepositoryError};
#[cfg(test)]
pub use trivia_command::MockTriviaCommand;
pub use trivia_command::{CreatedQuestion, DeletedQuestion, TriviaCommand};
#[cfg(test)]
pub use trivia_query::MockTriviaQuery;
pub use trivia_query::{QuestionListing, TriviaQuery};
