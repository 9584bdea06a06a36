//! Database schema migration management.
//!
//! Versioned, forward-only migrations applied automatically when the
//! database is opened. Each applied migration is recorded in a `migrations`
//! table, and the whole pending set runs inside one transaction so a
//! failure leaves the schema at the previous version.
//!
//! Only additive changes are allowed: new tables, new columns with
//! defaults, new indices. Existing rows are never rewritten except to
//! backfill a freshly added column.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// Tracking table for applied migrations.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change: version, human-readable name, and the
/// transformation to run within a transaction.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: the tasks table.
        self.add_migration(1, "create_tasks_table", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        priority INTEGER NOT NULL DEFAULT 1,
        completed BOOLEAN NOT NULL DEFAULT 0,
        position INTEGER NOT NULL DEFAULT 0,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
                [],
            )?;

            Ok(())
        });

        // Version 2: additive columns for databases created by older
        // releases that stored tasks without priority, completion state
        // or an explicit display order. The position index waits until
        // here because on a legacy database the column appears only now.
        self.add_migration(2, "add_missing_task_columns", |tx| {
            if !column_exists(tx, "tasks", "priority")? {
                tx.execute("ALTER TABLE tasks ADD COLUMN priority INTEGER NOT NULL DEFAULT 1", [])?;
            }
            if !column_exists(tx, "tasks", "completed")? {
                tx.execute("ALTER TABLE tasks ADD COLUMN completed BOOLEAN NOT NULL DEFAULT 0", [])?;
            }
            if !column_exists(tx, "tasks", "position")? {
                tx.execute("ALTER TABLE tasks ADD COLUMN position INTEGER NOT NULL DEFAULT 0", [])?;
            }

            // Display order is read on every list, keep it indexed
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_position ON tasks(position)", [])?;

            // Legacy rows were displayed in id order; carry that order over
            tx.execute("UPDATE tasks SET position = id WHERE position = 0", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies all pending migrations in version order.
    ///
    /// The pending set runs within a single transaction; a failing
    /// migration rolls back everything and the database stays at the
    /// version it had before the call.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_success!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        // A database that never saw the migration system has no
        // migrations table; that means version 0. Anything else is a
        // genuine fault and must not be mistaken for a fresh database.
        match conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get::<_, Option<u32>>(0)) {
            Ok(version) => Ok(version.unwrap_or(0)),
            Err(rusqlite::Error::SqliteFailure(_, Some(ref message))) if message.contains("no such table") => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns `(version, name, applied_at)` for every applied migration,
    /// ordered by version.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    /// Development-time rollback: removes migration records beyond the
    /// target version. Does not reverse schema changes (no down steps).
    #[cfg(debug_assertions)]
    pub fn rollback_to(&self, conn: &mut Connection, target_version: u32) -> Result<()> {
        let current_version = self.get_current_version(conn)?;

        if target_version >= current_version {
            msg_info!(Message::NothingToRollback);
            return Ok(());
        }

        msg_info!(Message::RollingBack(current_version, target_version));
        conn.execute("DELETE FROM migrations WHERE version > ?1", params![target_version])?;
        msg_success!(Message::RollbackCompleted(target_version));
        Ok(())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks `PRAGMA table_info` for the presence of a column.
fn column_exists(tx: &Transaction, table: &str, column: &str) -> Result<bool> {
    let mut stmt = tx.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(names.iter().any(|n| n == column))
}

/// Applies all pending migrations to the given connection.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

/// Current schema version, 0 for a fresh database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

/// Whether pending migrations exist for this database.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    let latest = manager.migrations.last().map(|m| m.version).unwrap_or(0);
    Ok(current < latest)
}
