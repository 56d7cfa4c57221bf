//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns:
//! tracing and cross-origin headers.

pub mod cors;
pub mod trace;

pub use cors::Cors;
pub use trace::Trace;
