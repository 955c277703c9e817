//! Repository implementations for database access
//!
//! Repositories borrow the pool and issue one parameterized statement
//! per call.

pub mod todos;

pub use todos::{DbError, TodoRepo};
