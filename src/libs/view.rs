use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints the task list in display order.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "ID", "TITLE", "DESCRIPTION", "PRIORITY", "STATUS"]);
        for (index, task) in tasks.iter().enumerate() {
            table.add_row(row![
                index + 1,
                task.id.unwrap_or(0),
                task.title,
                task.description.as_deref().unwrap_or(""),
                task.priority,
                if task.completed { "done" } else { "active" }
            ]);
        }
        table.printstd();

        Ok(())
    }
}
