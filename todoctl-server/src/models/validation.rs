//! Validation error types
//!
//! The `Display` output of each variant is the exact plain-text body
//! returned to the client with a 400.

use std::fmt;

/// Validation error for todo input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Priority is not one of HIGH / MEDIUM / LOW
    InvalidPriority,

    /// Status is not one of TO DO / IN PROGRESS / DONE
    InvalidStatus,

    /// Category is not one of WORK / HOME / LEARNING
    InvalidCategory,

    /// Due date is missing or not a real calendar date
    InvalidDueDate,

    /// Id is present but not an integer
    InvalidId,

    /// Update body carried none of the updatable fields
    EmptyUpdate,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidPriority => "Invalid Todo Priority",
            Self::InvalidStatus => "Invalid Todo Status",
            Self::InvalidCategory => "Invalid Todo Category",
            Self::InvalidDueDate => "Invalid Due Date",
            Self::InvalidId => "Invalid Todo Id",
            Self::EmptyUpdate => "No Todo Fields To Update",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ValidationError::InvalidPriority.to_string(),
            "Invalid Todo Priority"
        );
        assert_eq!(ValidationError::InvalidDueDate.to_string(), "Invalid Due Date");
    }
}
