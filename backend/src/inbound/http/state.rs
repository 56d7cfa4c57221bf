//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{TriviaCommand, TriviaQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub query: Arc<dyn TriviaQuery>,
    pub command: Arc<dyn TriviaCommand>,
}

impl HttpState {
    /// Construct state from the query and command ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use trivia::domain::ports::{TriviaCommand, TriviaQuery};
    /// use trivia::inbound::http::state::HttpState;
    ///
    /// fn state_for<S>(service: Arc<S>) -> HttpState
    /// where
    ///     S: TriviaQuery + TriviaCommand + 'static,
    /// {
    ///     HttpState::new(service.clone(), service)
    /// }
    /// ```
    pub fn new(query: Arc<dyn TriviaQuery>, command: Arc<dyn TriviaCommand>) -> Self {
        Self { query, command }
    }
}
