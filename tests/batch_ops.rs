#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use taskman::db::migrations::init_with_migrations;
    use taskman::db::tasks::Tasks;
    use taskman::libs::task::{Task, TaskError};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct BatchTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for BatchTestContext {
        fn setup() -> Self {
            BatchTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl BatchTestContext {
        fn store_with_tasks(&self, count: usize) -> Tasks {
            let mut conn = Connection::open(self.temp_dir.path().join("taskman.db")).unwrap();
            init_with_migrations(&mut conn).unwrap();
            let mut tasks = Tasks::with_connection(conn);
            for i in 1..=count {
                tasks.insert(&Task::new(&format!("Task {}", i), None)).unwrap();
            }
            tasks
        }
    }

    #[test_context(BatchTestContext)]
    #[test]
    fn test_set_completed_batch(ctx: &mut BatchTestContext) {
        let mut tasks = ctx.store_with_tasks(3);
        let before = tasks.fetch().unwrap();

        let affected = tasks.set_completed(&[1, 2], true).unwrap();
        assert_eq!(affected, 2);

        let all = tasks.fetch().unwrap();
        assert!(all[0].completed);
        assert!(all[1].completed);
        // Untouched task keeps its flag
        assert!(!all[2].completed);

        // The mutation refreshed updated_at on the touched rows
        // (CURRENT_TIMESTAMP has second resolution, so equal is fine)
        assert!(all[0].updated_at >= before[0].updated_at);
        assert!(all[1].updated_at >= before[1].updated_at);
    }

    #[test_context(BatchTestContext)]
    #[test]
    fn test_set_completed_skips_missing_ids(ctx: &mut BatchTestContext) {
        let mut tasks = ctx.store_with_tasks(2);

        // id 99 does not exist; the batch still applies to the rest
        let affected = tasks.set_completed(&[1, 99], true).unwrap();
        assert_eq!(affected, 1);
        assert!(tasks.get_by_id(1).unwrap().unwrap().completed);
    }

    #[test_context(BatchTestContext)]
    #[test]
    fn test_set_priority_batch(ctx: &mut BatchTestContext) {
        let mut tasks = ctx.store_with_tasks(3);
        let before = tasks.fetch().unwrap();

        let affected = tasks.set_priority(&[1, 3], 4).unwrap();
        assert_eq!(affected, 2);

        let all = tasks.fetch().unwrap();
        assert_eq!(all[0].priority, 4);
        assert_eq!(all[1].priority, 1);
        assert_eq!(all[2].priority, 4);
        assert!(all[0].updated_at >= before[0].updated_at);
        assert!(all[2].updated_at >= before[2].updated_at);
    }

    #[test_context(BatchTestContext)]
    #[test]
    fn test_out_of_range_priority_changes_nothing(ctx: &mut BatchTestContext) {
        let mut tasks = ctx.store_with_tasks(2);

        for bad in [0, 5, -1] {
            let result = tasks.set_priority(&[1, 2], bad);
            assert!(matches!(result, Err(TaskError::Validation(_))));
        }

        for task in tasks.fetch().unwrap() {
            assert_eq!(task.priority, 1);
        }
    }

    #[test_context(BatchTestContext)]
    #[test]
    fn test_empty_id_set_is_a_noop(ctx: &mut BatchTestContext) {
        let mut tasks = ctx.store_with_tasks(1);

        assert_eq!(tasks.delete_many(&[]).unwrap(), 0);
        assert_eq!(tasks.set_priority(&[], 2).unwrap(), 0);
        assert_eq!(tasks.set_completed(&[], true).unwrap(), 0);
        assert_eq!(tasks.fetch().unwrap().len(), 1);
    }

    #[test_context(BatchTestContext)]
    #[test]
    fn test_delete_many_with_partially_missing_ids(ctx: &mut BatchTestContext) {
        let mut tasks = ctx.store_with_tasks(3);

        let deleted = tasks.delete_many(&[2, 42, 43]).unwrap();
        assert_eq!(deleted, 1);

        let remaining: Vec<i64> = tasks.fetch().unwrap().iter().filter_map(|t| t.id).collect();
        assert_eq!(remaining, vec![1, 3]);
    }
}
