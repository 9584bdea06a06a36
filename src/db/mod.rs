//! Database layer for the taskman application.
//!
//! SQLite-backed persistence for tasks: connection management, a versioned
//! migration system and the task store itself. The store issues
//! multi-statement transactions (notably during reorder), so it must not
//! be shared across threads without external serialization; taskman runs
//! everything on the caller's thread.
//!
//! ```rust,no_run
//! use taskman::db::tasks::Tasks;
//! use taskman::libs::task::Task;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tasks = Tasks::new()?;
//! tasks.insert(&Task::new("Buy milk", None))?;
//! for task in tasks.fetch()? {
//!     println!("{}: {}", task.id.unwrap_or(0), task.title);
//! }
//! # Ok(())
//! # }
//! ```

/// Connection management and database initialization.
pub mod db;

/// Versioned schema migration system.
pub mod migrations;

/// The task store: CRUD, batch mutations, explicit display ordering.
pub mod tasks;
