//! Command-line interface of the application.
//!
//! One module per subcommand. Commands are thin glue: they collect input
//! (arguments or interactive prompts), obtain confirmation for
//! destructive operations, call the task store and render the result.
//! All persistence rules live in [`crate::db::tasks`].

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod done;
pub mod edit;
pub mod list;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod priority;
pub mod reorder;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List all tasks in display order")]
    List,
    #[command(about = "Edit a task's title and description")]
    Edit(edit::EditArgs),
    #[command(about = "Delete tasks by id")]
    Delete(delete::DeleteArgs),
    #[command(about = "Mark tasks completed (or active again)")]
    Done(done::DoneArgs),
    #[command(about = "Set the priority of tasks")]
    Priority(priority::PriorityArgs),
    #[command(about = "Move a task to a new position in the list")]
    Reorder(reorder::ReorderArgs),
    #[command(about = "Remove all tasks and reset the id counter")]
    Clear(clear::ClearArgs),
    #[command(about = "Show or change preferences")]
    Config(config::ConfigArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect or roll back database migrations (debug builds)")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => add::cmd(args),
            Commands::List => list::cmd(),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Priority(args) => priority::cmd(args),
            Commands::Reorder(args) => reorder::cmd(args),
            Commands::Clear(args) => clear::cmd(args),
            Commands::Config(args) => config::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
