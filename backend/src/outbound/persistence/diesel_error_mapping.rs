//! Translation of pool and Diesel failures into repository port errors.
//!
//! Driver messages are logged at debug level and replaced with fixed text,
//! so connection strings and SQL never reach the domain.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{CategoryRepositoryError, QuestionRepositoryError};

use super::pool::PoolError;

/// Port error types built by the Diesel adapters.
pub(crate) trait RepositoryError: Sized {
    fn connection(message: String) -> Self;
    fn query(message: String) -> Self;
}

impl RepositoryError for QuestionRepositoryError {
    fn connection(message: String) -> Self {
        Self::connection(message)
    }

    fn query(message: String) -> Self {
        Self::query(message)
    }
}

impl RepositoryError for CategoryRepositoryError {
    fn connection(message: String) -> Self {
        Self::connection(message)
    }

    fn query(message: String) -> Self {
        Self::query(message)
    }
}

pub(crate) fn map_pool_error<E: RepositoryError>(error: PoolError) -> E {
    debug!(error = %error, "connection checkout failed");
    E::connection(error.message().to_owned())
}

pub(crate) fn map_diesel_error<E: RepositoryError>(error: DieselError) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => E::query("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => E::query("database query error".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            E::connection("database connection error".to_owned())
        }
        _ => E::query("database error".to_owned()),
    }
}
