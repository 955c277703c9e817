//! New todo validation

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use super::body::{as_text, supplied, to_text};
use super::{Category, DueDate, Priority, Status, Todo, ValidationError};

/// Body of `POST /todos/`
///
/// Every field stays raw JSON so a missing or mistyped value surfaces as
/// the field's own validation message, in validation order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default, deserialize_with = "supplied")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "supplied")]
    pub todo: Option<Value>,
    #[serde(default, deserialize_with = "supplied")]
    pub priority: Option<Value>,
    #[serde(default, deserialize_with = "supplied")]
    pub status: Option<Value>,
    #[serde(default, deserialize_with = "supplied")]
    pub category: Option<Value>,
    #[serde(default, deserialize_with = "supplied")]
    pub due_date: Option<Value>,
}

/// Validated todo ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    /// `None` lets SQLite assign the next id
    pub id: Option<i64>,
    pub todo: String,
    pub priority: Priority,
    pub status: Status,
    pub category: Category,
    pub due_date: NaiveDate,
}

impl From<Todo> for NewTodo {
    fn from(t: Todo) -> Self {
        Self {
            id: Some(t.id),
            todo: t.todo,
            priority: t.priority,
            status: t.status,
            category: t.category,
            due_date: t.due_date,
        }
    }
}

impl CreateTodoRequest {
    /// Validate priority, status, category, due date, then id.
    /// The first invalid field short-circuits.
    pub fn validate(self) -> Result<NewTodo, ValidationError> {
        let priority = as_text(self.priority.as_ref()).parse()?;
        let status = as_text(self.status.as_ref()).parse()?;
        let category = as_text(self.category.as_ref()).parse()?;
        let due_date = match self.due_date.as_ref().and_then(Value::as_str) {
            Some(s) => DueDate::parse(s)?,
            None => return Err(ValidationError::InvalidDueDate),
        };
        let id = match self.id {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.as_i64().ok_or(ValidationError::InvalidId)?),
        };

        Ok(NewTodo {
            id,
            todo: self.todo.as_ref().map(to_text).unwrap_or_default(),
            priority,
            status,
            category,
            due_date: due_date.date(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> CreateTodoRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn valid_request_normalises_date() {
        let todo = request(
            r#"{"id":6,"todo":"Finalize event theme","priority":"LOW","status":"TO DO","category":"HOME","dueDate":"2021-2-22"}"#,
        )
        .validate()
        .unwrap();

        assert_eq!(todo.id, Some(6));
        assert_eq!(todo.priority, Priority::Low);
        assert_eq!(todo.status, Status::ToDo);
        assert_eq!(todo.category, Category::Home);
        assert_eq!(todo.due_date.to_string(), "2021-02-22");
    }

    #[test]
    fn priority_checked_before_everything() {
        let err = request(
            r#"{"id":1,"todo":"x","priority":"NOPE","status":"NOPE","category":"NOPE","dueDate":"NOPE"}"#,
        )
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidPriority);
    }

    #[test]
    fn mistyped_or_missing_fields_keep_validation_order() {
        let err = request(r#"{"id":"x","priority":5,"status":"DONE"}"#)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidPriority);

        let err = request(r#"{"priority":"HIGH","status":null}"#)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidStatus);

        let err = request(r#"{"priority":"HIGH","status":"DONE","category":"WORK","dueDate":20210101}"#)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidDueDate);
    }

    #[test]
    fn status_then_category_then_date() {
        let err = request(
            r#"{"id":1,"todo":"x","priority":"HIGH","status":"NOPE","category":"NOPE"}"#,
        )
        .validate()
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidStatus);

        let err = request(r#"{"id":1,"todo":"x","priority":"HIGH","status":"DONE","category":"NOPE"}"#)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidCategory);

        let err = request(r#"{"id":1,"todo":"x","priority":"HIGH","status":"DONE","category":"WORK"}"#)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidDueDate);
    }

    #[test]
    fn id_is_checked_last() {
        let valid = r#""todo":"x","priority":"HIGH","status":"DONE","category":"WORK","dueDate":"2021-01-01""#;

        let err = request(&format!(r#"{{"id":"seven",{valid}}}"#))
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidId);

        let todo = request(&format!("{{{valid}}}")).validate().unwrap();
        assert_eq!(todo.id, None);
    }

    #[test]
    fn missing_text_is_empty() {
        let todo = request(r#"{"id":2,"priority":"HIGH","status":"DONE","category":"WORK","dueDate":"2021-01-01"}"#)
            .validate()
            .unwrap();
        assert_eq!(todo.todo, "");
    }
}
