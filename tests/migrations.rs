#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use taskman::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl MigrationTestContext {
        fn connection(&self) -> Connection {
            Connection::open(self.temp_dir.path().join("taskman.db")).unwrap()
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_is_migrated(ctx: &mut MigrationTestContext) {
        let mut conn = ctx.connection();
        MigrationManager::new().run_migrations(&mut conn).unwrap();

        let version = get_db_version(&conn).unwrap();
        assert!(version > 0);
        assert!(!needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = ctx.connection();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());

        // Verify migrations are recorded in order
        for (i, entry) in history.iter().enumerate() {
            assert_eq!(entry.0 as usize, i + 1);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = ctx.connection();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_reports_version_zero(ctx: &mut MigrationTestContext) {
        // No migrations table yet; that is version 0, not an error
        let conn = ctx.connection();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_broken_migrations_table_surfaces_error(ctx: &mut MigrationTestContext) {
        let conn = ctx.connection();

        // A migrations table without a version column is a fault, and
        // must not be misread as a fresh database at version 0
        conn.execute("CREATE TABLE migrations (id INTEGER PRIMARY KEY)", []).unwrap();

        assert!(get_db_version(&conn).is_err());
    }

    #[cfg(debug_assertions)]
    #[test_context(MigrationTestContext)]
    #[test]
    fn test_rollback_and_reapply(ctx: &mut MigrationTestContext) {
        let mut conn = ctx.connection();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let latest = get_db_version(&conn).unwrap();
        assert!(latest > 0);

        manager.rollback_to(&mut conn, 0).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());

        // Migrations are idempotent, so re-applying restores the record
        manager.run_migrations(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), latest);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_legacy_table_gains_columns(ctx: &mut MigrationTestContext) {
        let mut conn = ctx.connection();

        // Schema of the original release: no priority, completed or
        // position columns.
        conn.execute(
            "CREATE TABLE tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .unwrap();
        conn.execute("INSERT INTO tasks (title) VALUES ('old one'), ('old two')", []).unwrap();

        MigrationManager::new().run_migrations(&mut conn).unwrap();

        // Legacy rows got defaults and an id-ordered position backfill
        let rows: Vec<(i64, i64, bool, i64)> = conn
            .prepare("SELECT id, priority, completed, position FROM tasks ORDER BY position")
            .unwrap()
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(rows, vec![(1, 1, false, 1), (2, 1, false, 2)]);
    }
}
