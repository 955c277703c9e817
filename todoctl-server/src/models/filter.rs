//! List filter selection
//!
//! Picks exactly one predicate for `GET /todos/` from the query parameters.
//! A non-empty search term wins outright; otherwise the first rule in
//! [`FILTER_RULES`] whose fields are all present is used, and only those
//! fields are validated.

use serde::Deserialize;

use super::{Category, Priority, Status, ValidationError};

/// Query parameters for listing todos
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoQueryParams {
    pub search_q: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
}

impl TodoQueryParams {
    fn has(&self, field: FilterField) -> bool {
        match field {
            FilterField::Priority => self.priority.is_some(),
            FilterField::Status => self.status.is_some(),
            FilterField::Category => self.category.is_some(),
        }
    }

    fn priority(&self) -> Result<Priority, ValidationError> {
        self.priority.as_deref().unwrap_or_default().parse()
    }

    fn status(&self) -> Result<Status, ValidationError> {
        self.status.as_deref().unwrap_or_default().parse()
    }

    fn category(&self) -> Result<Category, ValidationError> {
        self.category.as_deref().unwrap_or_default().parse()
    }
}

#[derive(Debug, Clone, Copy)]
enum FilterField {
    Priority,
    Status,
    Category,
}

/// One entry of the precedence table
struct FilterRule {
    requires: &'static [FilterField],
    /// Validates the participating fields in rule order
    select: fn(&TodoQueryParams) -> Result<TodoFilter, ValidationError>,
}

/// Precedence table, checked top to bottom
const FILTER_RULES: &[FilterRule] = &[
    FilterRule {
        requires: &[FilterField::Priority, FilterField::Status],
        select: |p| {
            let priority = p.priority()?;
            let status = p.status()?;
            Ok(TodoFilter::PriorityAndStatus { priority, status })
        },
    },
    FilterRule {
        requires: &[FilterField::Category, FilterField::Status],
        select: |p| {
            let category = p.category()?;
            let status = p.status()?;
            Ok(TodoFilter::CategoryAndStatus { category, status })
        },
    },
    FilterRule {
        requires: &[FilterField::Category, FilterField::Priority],
        select: |p| {
            let category = p.category()?;
            let priority = p.priority()?;
            Ok(TodoFilter::CategoryAndPriority { category, priority })
        },
    },
    FilterRule {
        requires: &[FilterField::Priority],
        select: |p| p.priority().map(TodoFilter::Priority),
    },
    FilterRule {
        requires: &[FilterField::Status],
        select: |p| p.status().map(TodoFilter::Status),
    },
    FilterRule {
        requires: &[FilterField::Category],
        select: |p| p.category().map(TodoFilter::Category),
    },
];

/// The predicate applied to a todo listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoFilter {
    /// Substring match on the todo text. `%` and `_` keep their LIKE meaning.
    Search(String),
    PriorityAndStatus { priority: Priority, status: Status },
    CategoryAndStatus { category: Category, status: Status },
    CategoryAndPriority { category: Category, priority: Priority },
    Priority(Priority),
    Status(Status),
    Category(Category),
    All,
}

impl TodoFilter {
    /// Select the filter for a set of query parameters.
    pub fn select(params: &TodoQueryParams) -> Result<Self, ValidationError> {
        if let Some(q) = params.search_q.as_deref().filter(|q| !q.is_empty()) {
            return Ok(Self::Search(q.to_owned()));
        }

        FILTER_RULES
            .iter()
            .find(|rule| rule.requires.iter().all(|f| params.has(*f)))
            .map_or(Ok(Self::All), |rule| (rule.select)(params))
    }

    /// SQL predicate with `?` placeholders, `None` for no WHERE clause.
    pub fn predicate(&self) -> Option<&'static str> {
        match self {
            Self::Search(_) => Some("todo LIKE ?"),
            Self::PriorityAndStatus { .. } => Some("status = ? AND priority = ?"),
            Self::CategoryAndStatus { .. } => Some("category = ? AND status = ?"),
            Self::CategoryAndPriority { .. } => Some("category = ? AND priority = ?"),
            Self::Priority(_) => Some("priority = ?"),
            Self::Status(_) => Some("status = ?"),
            Self::Category(_) => Some("category = ?"),
            Self::All => None,
        }
    }

    /// Bind values matching the placeholders of [`Self::predicate`], in order.
    pub fn binds(&self) -> Vec<String> {
        match self {
            Self::Search(q) => vec![format!("%{q}%")],
            Self::PriorityAndStatus { priority, status } => {
                vec![status.to_string(), priority.to_string()]
            }
            Self::CategoryAndStatus { category, status } => {
                vec![category.to_string(), status.to_string()]
            }
            Self::CategoryAndPriority { category, priority } => {
                vec![category.to_string(), priority.to_string()]
            }
            Self::Priority(priority) => vec![priority.to_string()],
            Self::Status(status) => vec![status.to_string()],
            Self::Category(category) => vec![category.to_string()],
            Self::All => Vec::new(),
        }
    }
}
