//! Domain models with validation at construction
//!
//! All client input is validated when converted into these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
mod body;
pub mod todo;
pub mod due_date;
pub mod filter;
pub mod create;
pub mod update;

pub use validation::ValidationError;
pub use todo::{Category, Priority, Status, Todo};
pub use due_date::{DueDate, DUE_DATE_FORMAT};
pub use filter::{TodoFilter, TodoQueryParams};
pub use create::{CreateTodoRequest, NewTodo};
pub use update::{UpdateTodoRequest, UpdatedField, UPDATE_ORDER};
