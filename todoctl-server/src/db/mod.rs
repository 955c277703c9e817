//! Database layer - SQLite pool and the todo repository
//!
//! - One shared pool, cloned into the router state
//! - Parameterized SQL per request, no transactions
//! - Rely on the primary key for duplicate ids, no check-then-insert

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
