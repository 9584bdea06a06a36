//! Human-readable text for every [`Message`] variant.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskNotFoundWithId(id) => format!("Task with id {} not found", id),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s)", count),
            Message::TasksCompletedCount(count) => format!("Marked {} task(s) as completed", count),
            Message::TasksReopenedCount(count) => format!("Marked {} task(s) as active", count),
            Message::PriorityUpdatedCount(count, priority) => format!("Set priority {} on {} task(s)", priority, count),
            Message::TasksReordered(count) => format!("New order saved for {} task(s)", count),
            Message::AllTasksCleared => "All tasks removed, id counter reset".to_string(),
            Message::NoTasksFound => "No tasks yet. Add one with 'taskman add <title>'".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::EditingTask(title) => format!("Editing task: {}", title),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::ConfirmDeleteTasks(count) => format!("Delete {} task(s)?", count),
            Message::ConfirmClearAll(count) => format!("Remove ALL {} task(s) and reset the id counter?", count),
            Message::ConfirmClearAllFinal => "This cannot be undone. Are you sure?".to_string(),
            Message::OperationCancelled => "Cancelled".to_string(),

            // === PREFERENCES MESSAGES ===
            Message::PreferencesHeader => "⚙️ Preferences".to_string(),
            Message::ThemeSet(theme) => format!("Theme set to {}", theme),
            Message::SoundOn => "Sound enabled".to_string(),
            Message::SoundOff => "Sound disabled".to_string(),
            Message::PreferencesParseError => "Failed to parse the preferences file, using defaults".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Applying migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} applied", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "Database schema is up to date".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseNeedsUpdate => "Pending migrations will run on next start".to_string(),
            Message::DatabaseUpToDate => "No pending migrations".to_string(),
            Message::MigrationHistory => "Migration history".to_string(),

            // === GENERIC ===
            Message::Custom(text) => text.clone(),
        };

        write!(f, "{}", text)
    }
}
