#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use taskman::db::migrations::init_with_migrations;
    use taskman::db::tasks::Tasks;
    use taskman::libs::task::{Task, TaskError};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            TaskTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl TaskTestContext {
        fn store(&self) -> Tasks {
            let mut conn = Connection::open(self.temp_dir.path().join("taskman.db")).unwrap();
            init_with_migrations(&mut conn).unwrap();
            Tasks::with_connection(conn)
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_ascend_from_one(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        for i in 1..=3 {
            tasks.insert(&Task::new(&format!("Task {}", i), None)).unwrap();
        }

        let all = tasks.fetch().unwrap();
        let ids: Vec<i64> = all.iter().filter_map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_defaults(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        tasks.insert(&Task::new("Buy milk", None)).unwrap();

        let all = tasks.fetch().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Buy milk");
        assert_eq!(all[0].description, None);
        assert_eq!(all[0].priority, 1);
        assert!(!all[0].completed);
        assert!(all[0].created_at.is_some());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_rejects_blank_title(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let result = tasks.insert(&Task::new("   ", None));
        assert!(matches!(result, Err(TaskError::Validation(_))));
        assert!(tasks.fetch().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_leaves_other_fields_untouched(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        tasks.insert(&Task::new("Original", Some("old"))).unwrap();
        let id = tasks.fetch().unwrap()[0].id.unwrap();
        tasks.set_priority(&[id], 3).unwrap();
        tasks.set_completed(&[id], true).unwrap();

        tasks.update(id, "Renamed", Some("new")).unwrap();

        let task = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(task.title, "Renamed");
        assert_eq!(task.description.as_deref(), Some("new"));
        assert_eq!(task.priority, 3);
        assert!(task.completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_unknown_id_fails(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let result = tasks.update(42, "Nope", None);
        assert!(matches!(result, Err(TaskError::NotFound(42))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_is_idempotent(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        tasks.insert(&Task::new("Only task", None)).unwrap();
        let id = tasks.fetch().unwrap()[0].id.unwrap();

        assert_eq!(tasks.delete_many(&[id]).unwrap(), 1);
        assert!(tasks.fetch().unwrap().is_empty());

        // Deleting again is a no-op
        assert_eq!(tasks.delete_many(&[id]).unwrap(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_clear_resets_id_counter(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        for i in 1..=3 {
            tasks.insert(&Task::new(&format!("Task {}", i), None)).unwrap();
        }
        tasks.clear().unwrap();
        assert!(tasks.fetch().unwrap().is_empty());

        tasks.insert(&Task::new("x", Some(""))).unwrap();
        let all = tasks.fetch().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, Some(1));
        assert_eq!(all[0].position, Some(1));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_updated_at_refreshed_on_update(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        tasks.insert(&Task::new("Task", None)).unwrap();
        let before = tasks.fetch().unwrap()[0].clone();

        tasks.update(before.id.unwrap(), "Task renamed", None).unwrap();
        let after = tasks.get_by_id(before.id.unwrap()).unwrap().unwrap();

        // CURRENT_TIMESTAMP has second resolution; equal is acceptable,
        // going backwards is not.
        assert!(after.updated_at >= before.updated_at);
        assert_eq!(after.created_at, before.created_at);
    }
}
