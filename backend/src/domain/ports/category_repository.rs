//! Read-side port for question categories.

use async_trait::async_trait;

use crate::domain::Category;

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading categories.
    pub enum CategoryRepositoryError {
        /// Repository connection could not be established.
        Connection => "category repository connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query => "category repository query failed: {message}",
    }
}

/// Port for reading the category catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every stored category, ordered by id. An empty store yields an empty
    /// vector rather than an error.
    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError>;
}
