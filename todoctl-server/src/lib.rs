//! todoctl-server: HTTP API over a single SQLite todo table
//!
//! List/filter, fetch-by-id, agenda-by-date, create, partial update and
//! delete. The storage handle is injected through [`AppState`].

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_pool_with_options, DbError, TodoRepo};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
