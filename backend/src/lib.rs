//! Trivia question service library.
//!
//! Hexagonal layout: [`domain`] holds the entities, ports and service;
//! [`inbound`] exposes them over HTTP; [`outbound`] stores them in
//! PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use middleware::{Cors, Trace};
