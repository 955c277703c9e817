//! Route handlers organized by resource

pub mod todos;
pub mod agenda;

pub use todos::TodoResponse;
