//! Partial update of a todo
//!
//! Supplied fields are visited in [`UPDATE_ORDER`]. Each one is validated
//! and applied on top of the existing row; the first supplied field names
//! the update in the response.

use serde::Deserialize;
use serde_json::Value;

use super::body::{as_text, supplied, to_text};
use super::{DueDate, Todo, ValidationError};

/// Body of `PUT /todos/{id}/`; every field is optional
///
/// A key counts as supplied even when its value is `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
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

/// Updatable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatedField {
    Status,
    Priority,
    Todo,
    Category,
    DueDate,
}

/// Order in which supplied fields are validated and reported
pub const UPDATE_ORDER: &[UpdatedField] = &[
    UpdatedField::Status,
    UpdatedField::Priority,
    UpdatedField::Todo,
    UpdatedField::Category,
    UpdatedField::DueDate,
];

impl UpdatedField {
    /// Success message for an update led by this field
    pub fn message(&self) -> &'static str {
        match self {
            Self::Status => "Status Updated",
            Self::Priority => "Priority Updated",
            Self::Todo => "Todo Updated",
            Self::Category => "Category Updated",
            Self::DueDate => "Due Date Updated",
        }
    }
}

impl UpdateTodoRequest {
    fn is_supplied(&self, field: UpdatedField) -> bool {
        match field {
            UpdatedField::Status => self.status.is_some(),
            UpdatedField::Priority => self.priority.is_some(),
            UpdatedField::Todo => self.todo.is_some(),
            UpdatedField::Category => self.category.is_some(),
            UpdatedField::DueDate => self.due_date.is_some(),
        }
    }

    fn apply_field(&self, field: UpdatedField, todo: &mut Todo) -> Result<(), ValidationError> {
        match field {
            UpdatedField::Status => {
                if self.status.is_some() {
                    todo.status = as_text(self.status.as_ref()).parse()?;
                }
            }
            UpdatedField::Priority => {
                if self.priority.is_some() {
                    todo.priority = as_text(self.priority.as_ref()).parse()?;
                }
            }
            UpdatedField::Todo => {
                if let Some(text) = &self.todo {
                    todo.todo = to_text(text);
                }
            }
            UpdatedField::Category => {
                if self.category.is_some() {
                    todo.category = as_text(self.category.as_ref()).parse()?;
                }
            }
            UpdatedField::DueDate => {
                if let Some(value) = &self.due_date {
                    let s = value.as_str().ok_or(ValidationError::InvalidDueDate)?;
                    todo.due_date = DueDate::parse(s)?.date();
                }
            }
        }
        Ok(())
    }

    /// Apply the supplied fields to `existing`.
    ///
    /// Returns the rewritten row and the field that leads the update.
    /// The first invalid field (in [`UPDATE_ORDER`]) short-circuits.
    pub fn apply(&self, existing: &Todo) -> Result<(Todo, UpdatedField), ValidationError> {
        let mut updated = existing.clone();
        let mut lead = None;

        for &field in UPDATE_ORDER.iter().filter(|f| self.is_supplied(**f)) {
            self.apply_field(field, &mut updated)?;
            lead.get_or_insert(field);
        }

        lead.map(|field| (updated, field))
            .ok_or(ValidationError::EmptyUpdate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Priority, Status};
    use chrono::NaiveDate;

    fn existing() -> Todo {
        Todo {
            id: 1,
            todo: "Learn Rust".into(),
            priority: Priority::Medium,
            status: Status::ToDo,
            category: Category::Learning,
            due_date: NaiveDate::from_ymd_opt(2021, 4, 2).unwrap(),
        }
    }

    fn request(json: &str) -> UpdateTodoRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn status_only_leaves_rest_unchanged() {
        let (updated, field) = request(r#"{"status":"DONE"}"#).apply(&existing()).unwrap();
        assert_eq!(field, UpdatedField::Status);
        assert_eq!(updated.status, Status::Done);
        assert_eq!(updated.todo, "Learn Rust");
        assert_eq!(updated.priority, Priority::Medium);
        assert_eq!(updated.category, Category::Learning);
        assert_eq!(updated.due_date, existing().due_date);
    }

    #[test]
    fn todo_text_is_not_validated() {
        let (updated, field) = request(r#"{"todo":""}"#).apply(&existing()).unwrap();
        assert_eq!(field, UpdatedField::Todo);
        assert_eq!(updated.todo, "");
    }

    #[test]
    fn due_date_is_normalised() {
        let (updated, field) = request(r#"{"dueDate":"2021-1-12"}"#).apply(&existing()).unwrap();
        assert_eq!(field, UpdatedField::DueDate);
        assert_eq!(updated.due_date, NaiveDate::from_ymd_opt(2021, 1, 12).unwrap());
    }

    #[test]
    fn lead_field_follows_fixed_order() {
        let (updated, field) = request(r#"{"category":"HOME","priority":"HIGH"}"#)
            .apply(&existing())
            .unwrap();
        assert_eq!(field, UpdatedField::Priority);
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.category, Category::Home);
    }

    #[test]
    fn later_invalid_field_is_still_rejected() {
        let err = request(r#"{"status":"DONE","category":"GARDEN"}"#)
            .apply(&existing())
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidCategory);
    }

    #[test]
    fn first_invalid_field_in_order_wins() {
        let err = request(r#"{"dueDate":"nope","priority":"URGENT"}"#)
            .apply(&existing())
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidPriority);
    }

    #[test]
    fn null_counts_as_supplied() {
        let err = request(r#"{"status":null}"#).apply(&existing()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidStatus);

        let err = request(r#"{"dueDate":null}"#).apply(&existing()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidDueDate);

        let (updated, field) = request(r#"{"todo":null}"#).apply(&existing()).unwrap();
        assert_eq!(field, UpdatedField::Todo);
        assert_eq!(updated.todo, "");
    }

    #[test]
    fn mistyped_values_are_invalid() {
        let err = request(r#"{"priority":1}"#).apply(&existing()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPriority);

        let err = request(r#"{"category":["WORK"]}"#).apply(&existing()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidCategory);
    }

    #[test]
    fn empty_body_is_rejected() {
        assert_eq!(
            request("{}").apply(&existing()).unwrap_err(),
            ValidationError::EmptyUpdate
        );
    }

    #[test]
    fn messages() {
        assert_eq!(UpdatedField::DueDate.message(), "Due Date Updated");
        assert_eq!(UpdatedField::Todo.message(), "Todo Updated");
    }
}
