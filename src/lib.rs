//! # Taskman - a simple task list manager
//!
//! A command-line task list: add, edit, reorder and complete tasks,
//! persisted to a local SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, delete and complete tasks
//! - **Explicit Ordering**: The list order is user-controlled and persisted
//! - **Priorities**: Urgency rank from 1 (lowest) to 4 (highest)
//! - **Batch Operations**: Delete, complete or re-prioritize several tasks at once
//! - **Preferences**: Theme, sound and window geometry remembered across sessions
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
