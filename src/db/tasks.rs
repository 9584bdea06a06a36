//! Core task store: CRUD, batch mutations and display-order persistence.
//!
//! The user-visible order of the list is authoritative and lives in the
//! `position` column; `fetch` enumerates ascending by position, never by
//! id or timestamp. [`Tasks::reorder`] receives the whole collection in
//! its new order and rewrites every row's position and mutable fields in
//! one transaction keyed by id, so a failure on any row leaves the prior
//! order intact.
//!
//! Batch operations (`delete_many`, `set_priority`, `set_completed`)
//! silently skip ids that do not exist; single-id operations report
//! [`TaskError::NotFound`].

use crate::db::db::Db;
use crate::libs::task::{validate_priority, validate_title, Task, TaskError};
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const TASK_COLUMNS: &str = "id, title, description, priority, completed, position, created_at, updated_at";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, priority, completed, position)
    VALUES (?1, ?2, ?3, ?4, (SELECT COALESCE(MAX(position), 0) + 1 FROM tasks))";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, updated_at = CURRENT_TIMESTAMP WHERE id = ?1";
const REORDER_TASK: &str = "UPDATE tasks
    SET title = ?2, description = ?3, priority = ?4, completed = ?5, position = ?6, updated_at = CURRENT_TIMESTAMP
    WHERE id = ?1";
const DELETE_TASKS: &str = "DELETE FROM tasks WHERE id IN";
const CLEAR_TASKS: &str = "DELETE FROM tasks";
const RESET_ID_COUNTER: &str = "DELETE FROM sqlite_sequence WHERE name = 'tasks'";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Wraps an already opened connection. Used by tests that need to
    /// share a connection with the migration manager.
    pub fn with_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Returns every task in display order.
    pub fn fetch(&mut self) -> Result<Vec<Task>, TaskError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM tasks ORDER BY position, id", TASK_COLUMNS))?;
        let task_iter = stmt.query_map([], map_task_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>, TaskError> {
        let task = self
            .conn
            .query_row(&format!("SELECT {} FROM tasks WHERE id = ?1", TASK_COLUMNS), params![id], map_task_row)
            .optional()?;

        Ok(task)
    }

    /// Appends a new task to the end of the current order.
    pub fn insert(&mut self, task: &Task) -> Result<(), TaskError> {
        validate_title(&task.title)?;
        validate_priority(task.priority)?;

        self.conn
            .execute(INSERT_TASK, params![task.title, task.description, task.priority, task.completed])?;
        msg_debug!(format!("Inserted task '{}'", task.title));

        Ok(())
    }

    /// Rewrites title and description of an existing task. Priority,
    /// completion state and position are left untouched.
    pub fn update(&mut self, id: i64, title: &str, description: Option<&str>) -> Result<(), TaskError> {
        validate_title(title)?;

        let affected = self.conn.execute(UPDATE_TASK, params![id, title, description])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        msg_debug!(format!("Updated task {}", id));

        Ok(())
    }

    /// Deletes every task in `ids`. Missing ids are ignored, so the
    /// operation is idempotent. Returns the number of rows removed.
    pub fn delete_many(&mut self, ids: &[i64]) -> Result<usize, TaskError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let sql = format!("{} ({})", DELETE_TASKS, placeholders(ids.len()));
        let affected = self.conn.execute(&sql, params_from_iter(ids.iter()))?;
        msg_debug!(format!("Deleted {} of {} requested tasks ({:?})", affected, ids.len(), ids));

        Ok(affected)
    }

    /// Removes all tasks and resets the id counter, so the next insert
    /// gets id 1 again. Runs in one transaction.
    pub fn clear(&mut self) -> Result<(), TaskError> {
        let tx = self.conn.transaction()?;
        tx.execute(CLEAR_TASKS, [])?;

        // sqlite_sequence only exists once an AUTOINCREMENT insert happened
        let has_sequence: i64 = tx.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence'",
            [],
            |row| row.get(0),
        )?;
        if has_sequence > 0 {
            tx.execute(RESET_ID_COUNTER, [])?;
        }

        tx.commit()?;
        msg_debug!("Cleared all tasks and reset the id counter");

        Ok(())
    }

    /// Applies a priority to every task in `ids` atomically; missing ids
    /// are skipped. Out-of-range priorities leave all rows unchanged.
    pub fn set_priority(&mut self, ids: &[i64], priority: i32) -> Result<usize, TaskError> {
        validate_priority(priority)?;
        if ids.is_empty() {
            return Ok(0);
        }

        let sql = format!(
            "UPDATE tasks SET priority = ?1, updated_at = CURRENT_TIMESTAMP WHERE id IN ({})",
            numbered_placeholders(ids.len(), 2)
        );
        let mut values: Vec<i64> = vec![priority as i64];
        values.extend_from_slice(ids);
        let affected = self.conn.execute(&sql, params_from_iter(values.iter()))?;
        msg_debug!(format!("Set priority {} on {} tasks ({:?})", priority, affected, ids));

        Ok(affected)
    }

    /// Sets the completion flag on every task in `ids` atomically;
    /// missing ids are skipped.
    pub fn set_completed(&mut self, ids: &[i64], completed: bool) -> Result<usize, TaskError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let sql = format!(
            "UPDATE tasks SET completed = ?1, updated_at = CURRENT_TIMESTAMP WHERE id IN ({})",
            numbered_placeholders(ids.len(), 2)
        );
        let mut values: Vec<i64> = vec![completed as i64];
        values.extend_from_slice(ids);
        let affected = self.conn.execute(&sql, params_from_iter(values.iter()))?;
        msg_debug!(format!("Set completed={} on {} tasks ({:?})", completed, affected, ids));

        Ok(affected)
    }

    /// Persists a new display order for the whole collection.
    ///
    /// `tasks` is the entire list in its new order, each task carrying its
    /// id and current field values. Every row's position and mutable
    /// fields are rewritten inside one transaction; an unknown id aborts
    /// the transaction and the store keeps its previous state.
    pub fn reorder(&mut self, tasks: &[Task]) -> Result<(), TaskError> {
        let tx = self.conn.transaction()?;

        for (index, task) in tasks.iter().enumerate() {
            let id = task
                .id
                .ok_or_else(|| TaskError::Validation("cannot reorder a task that has no id".to_string()))?;

            let affected = tx.execute(
                REORDER_TASK,
                params![id, task.title, task.description, task.priority, task.completed, (index + 1) as i64],
            )?;
            if affected == 0 {
                return Err(TaskError::NotFound(id));
            }
        }

        tx.commit()?;
        msg_debug!(format!("Reordered {} tasks", tasks.len()));

        Ok(())
    }
}

fn map_task_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        priority: row.get(3)?,
        completed: row.get(4)?,
        position: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

/// `?start, ?start+1, ...` for statements whose leading parameters are
/// already taken by the value being applied.
fn numbered_placeholders(count: usize, start: usize) -> String {
    (0..count).map(|i| format!("?{}", start + i)).collect::<Vec<_>>().join(", ")
}
