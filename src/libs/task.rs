//! Task entity and the store's error taxonomy.
//!
//! A [`Task`] mirrors one row of the `tasks` table. Fields that the database
//! assigns (`id`, `position`, timestamps) are `Option` on freshly built
//! values and populated once the row has been read back.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Valid priority range, inclusive.
pub const PRIORITY_MIN: i32 = 1;
pub const PRIORITY_MAX: i32 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub priority: i32,
    pub completed: bool,
    /// Display rank. Enumeration order of the store, ascending.
    pub position: Option<i64>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Task {
    /// Builds a new task with default priority, not completed.
    /// Database-assigned fields stay empty until the row is persisted.
    pub fn new(title: &str, description: Option<&str>) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.map(|d| d.to_string()),
            priority: PRIORITY_MIN,
            completed: false,
            position: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Errors raised by the task store.
///
/// `Validation` and `NotFound` are recoverable at the call site: the store
/// guarantees prior state is unchanged. `Storage` means the underlying
/// transaction was rolled back and the caller should reload from the store.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Validation(String),
    #[error("task with id {0} not found")]
    NotFound(i64),
    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}

/// Rejects empty or whitespace-only titles.
pub fn validate_title(title: &str) -> Result<(), TaskError> {
    if title.trim().is_empty() {
        return Err(TaskError::Validation("task title must not be empty".to_string()));
    }
    Ok(())
}

/// Rejects priorities outside [`PRIORITY_MIN`]..=[`PRIORITY_MAX`].
pub fn validate_priority(priority: i32) -> Result<(), TaskError> {
    if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&priority) {
        return Err(TaskError::Validation(format!(
            "priority {} is out of range ({}-{})",
            priority, PRIORITY_MIN, PRIORITY_MAX
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_has_defaults() {
        let task = Task::new("Buy milk", None);
        assert_eq!(task.priority, PRIORITY_MIN);
        assert!(!task.completed);
        assert!(task.id.is_none());
        assert!(task.position.is_none());
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(validate_title("  ").is_err());
        assert!(validate_title("ok").is_ok());
    }

    #[test]
    fn priority_bounds() {
        assert!(validate_priority(0).is_err());
        assert!(validate_priority(5).is_err());
        for p in PRIORITY_MIN..=PRIORITY_MAX {
            assert!(validate_priority(p).is_ok());
        }
    }
}
