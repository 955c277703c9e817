//! Todo endpoints
//!
//! Every route is served with and without the trailing slash.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::TodoRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{
    Category, CreateTodoRequest, DueDate, Priority, Status, Todo, TodoFilter, TodoQueryParams,
    UpdateTodoRequest,
};

/// Todo response, keys in wire order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: i64,
    pub todo: String,
    pub priority: Priority,
    pub category: Category,
    pub status: Status,
    #[serde(rename = "dueDate")]
    pub due_date: String,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            todo: t.todo,
            priority: t.priority,
            category: t.category,
            status: t.status,
            due_date: DueDate::from(t.due_date).to_string(),
        }
    }
}

/// GET /todos/ - list todos, filtered by search_q / priority / status / category
async fn list_todos(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TodoQueryParams>, QueryRejection>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let Query(params) = query?;
    let filter = TodoFilter::select(&params)?;
    let todos = TodoRepo::new(&state.pool).list(&filter).await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// GET /todos/{id}/ - get a single todo (`null` when missing)
async fn get_todo(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Option<TodoResponse>>, ApiError> {
    let Path(id) = path?;
    let todo = TodoRepo::new(&state.pool).get(id).await?;
    Ok(Json(todo.map(TodoResponse::from)))
}

/// POST /todos/ - create a todo
async fn create_todo(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Json(req) = body?;
    let todo = req.validate()?;
    let id = TodoRepo::new(&state.pool).create(&todo).await?;

    tracing::info!(id, "todo added");
    Ok("Todo Successfully Added")
}

/// PUT /todos/{id}/ - partial update, omitted fields keep their values
async fn update_todo(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Path(id) = path?;
    let Json(req) = body?;
    let repo = TodoRepo::new(&state.pool);

    let existing = repo.get(id).await?.ok_or_else(|| ApiError::NotFound {
        resource: "Todo",
        id: id.to_string(),
    })?;
    let (updated, field) = req.apply(&existing)?;
    repo.update(&updated).await?;

    tracing::info!(id, ?field, "todo updated");
    Ok(field.message())
}

/// DELETE /todos/{id}/ - delete without existence check
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<&'static str, ApiError> {
    let Path(id) = path?;
    TodoRepo::new(&state.pool).delete(id).await?;
    Ok("Todo Deleted")
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    let collection = get(list_todos).post(create_todo);
    let item = get(get_todo).put(update_todo).delete(delete_todo);

    Router::new()
        .route("/todos", collection.clone())
        .route("/todos/", collection)
        .route("/todos/{id}", item.clone())
        .route("/todos/{id}/", item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn response_uses_wire_keys_in_order() {
        let todo = Todo {
            id: 2,
            todo: "Buy a Car".into(),
            priority: Priority::High,
            status: Status::ToDo,
            category: Category::Home,
            due_date: NaiveDate::from_ymd_opt(2021, 9, 22).unwrap(),
        };

        let json = serde_json::to_string(&TodoResponse::from(todo)).unwrap();
        assert_eq!(
            json,
            r#"{"id":2,"todo":"Buy a Car","priority":"HIGH","category":"HOME","status":"TO DO","dueDate":"2021-09-22"}"#
        );
    }
}
