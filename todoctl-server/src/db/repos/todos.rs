//! Todo repository
//!
//! - list: one SELECT with the predicate chosen by [`TodoFilter`]
//! - create: plain INSERT, duplicate ids surface as `DbError::Conflict`;
//!   a missing id is assigned by SQLite
//! - update: rewrites every column of the row
//! - delete: unconditional

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::{NewTodo, Todo, TodoFilter};

const SELECT_TODOS: &str =
    "SELECT id, todo, priority, status, category, due_date FROM todo";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("conflict: {resource} '{id}' already exists")]
    Conflict { resource: &'static str, id: String },
}

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List todos matching `filter`, ordered by id.
    pub async fn list(&self, filter: &TodoFilter) -> Result<Vec<Todo>, DbError> {
        let sql = match filter.predicate() {
            Some(predicate) => format!("{SELECT_TODOS} WHERE {predicate} ORDER BY id"),
            None => format!("{SELECT_TODOS} ORDER BY id"),
        };
        tracing::debug!(?filter, "listing todos");

        let mut query = sqlx::query_as::<_, Todo>(&sql);
        for value in filter.binds() {
            query = query.bind(value);
        }

        Ok(query.fetch_all(self.pool).await?)
    }

    /// Get a single todo; `None` when the id does not exist.
    pub async fn get(&self, id: i64) -> Result<Option<Todo>, DbError> {
        let todo = sqlx::query_as::<_, Todo>(&format!("{SELECT_TODOS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(todo)
    }

    /// Todos due exactly on `date`.
    pub async fn agenda(&self, date: NaiveDate) -> Result<Vec<Todo>, DbError> {
        let todos = sqlx::query_as::<_, Todo>(&format!(
            "{SELECT_TODOS} WHERE due_date = ? ORDER BY id"
        ))
        .bind(date)
        .fetch_all(self.pool)
        .await?;
        Ok(todos)
    }

    /// Insert a new todo, returning its id.
    pub async fn create(&self, todo: &NewTodo) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO todo (id, todo, category, priority, status, due_date)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(todo.id)
        .bind(&todo.todo)
        .bind(todo.category.as_str())
        .bind(todo.priority.as_str())
        .bind(todo.status.as_str())
        .bind(todo.due_date)
        .execute(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => DbError::Conflict {
                resource: "Todo",
                id: todo.id.map(|id| id.to_string()).unwrap_or_default(),
            },
            other => DbError::Sqlx(other),
        })?;

        Ok(result.last_insert_rowid())
    }

    /// Rewrite every column of the row with `todo.id`.
    pub async fn update(&self, todo: &Todo) -> Result<(), DbError> {
        sqlx::query(
            r#"
            UPDATE todo SET todo = ?, priority = ?, status = ?, category = ?, due_date = ?
            WHERE id = ?
            "#,
        )
        .bind(&todo.todo)
        .bind(todo.priority.as_str())
        .bind(todo.status.as_str())
        .bind(todo.category.as_str())
        .bind(todo.due_date)
        .bind(todo.id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Delete by id. Deleting a missing id is not an error.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM todo WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        tracing::debug!(id, rows = result.rows_affected(), "deleted todo");
        Ok(())
    }
}
