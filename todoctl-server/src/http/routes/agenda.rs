//! Agenda endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::todos::TodoResponse;
use crate::db::repos::TodoRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::DueDate;

#[derive(Debug, Default, Deserialize)]
pub struct AgendaParams {
    pub date: Option<String>,
}

/// GET /agenda/?date= - todos due on exactly that date
async fn agenda(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AgendaParams>, QueryRejection>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let Query(params) = query?;
    let date = DueDate::parse_opt(params.date.as_deref())?;
    tracing::debug!(%date, "agenda lookup");

    let todos = TodoRepo::new(&state.pool).agenda(date.date()).await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Agenda routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/agenda", get(agenda))
        .route("/agenda/", get(agenda))
}
