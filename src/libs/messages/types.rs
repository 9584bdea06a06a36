//! All user-facing messages of the application.
//!
//! Every string shown to the user is a variant here, rendered by the
//! `Display` implementation in [`super::display`]. Keeping the text in
//! one place makes wording consistent and messages reusable across
//! commands.

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskNotFoundWithId(i64),
    TasksDeletedCount(usize),
    TasksCompletedCount(usize),
    TasksReopenedCount(usize),
    PriorityUpdatedCount(usize, i32),
    TasksReordered(usize),
    AllTasksCleared,
    NoTasksFound,
    NoChangesDetected,
    TasksHeader,
    EditingTask(String),

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    ConfirmDeleteTasks(usize),
    ConfirmClearAll(usize),
    ConfirmClearAllFinal,
    OperationCancelled,

    // === PREFERENCES MESSAGES ===
    PreferencesHeader,
    ThemeSet(String),
    SoundOn,
    SoundOff,
    PreferencesParseError,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,

    // === GENERIC ===
    Custom(String),
}
