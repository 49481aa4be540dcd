#[cfg(test)]
mod tests {
    use std::thread;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todos::db::db::Db;
    use todos::db::error::StoreError;
    use todos::db::tasks::Tasks;
    use todos::libs::task::{Task, TaskFields};

    struct TaskTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TaskTestContext {
        fn tasks(&self) -> Tasks {
            Tasks::new(&self.db)
        }
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("todos.db")).unwrap();
            TaskTestContext { _temp_dir: temp_dir, db }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_then_get_round_trip(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();

        let fields = TaskFields::new("Buy milk", "2%", false);
        let created = tasks.insert(&fields).unwrap();
        assert_eq!(
            created,
            Task {
                id: 1,
                title: "Buy milk".to_string(),
                description: Some("2%".to_string()),
                completed: false,
            }
        );

        let fetched = tasks.get(created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_strictly_increase_and_are_not_reused(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();

        let first = tasks.insert(&TaskFields::new("One", "", false)).unwrap();
        let second = tasks.insert(&TaskFields::new("Two", "", false)).unwrap();
        assert!(second.id > first.id);

        // Deleting the newest row must not free its id.
        tasks.delete(second.id).unwrap();
        let third = tasks.insert(&TaskFields::new("Three", "", true)).unwrap();
        assert!(third.id > second.id);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_list_returns_insertion_order_and_is_stable(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();

        for i in 1..=3 {
            tasks.insert(&TaskFields::new(&format!("Task {}", i), "", i % 2 == 0)).unwrap();
        }

        let listed = tasks.list().unwrap();
        let titles: Vec<&str> = listed.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Task 1", "Task 2", "Task 3"]);
        assert!(listed[1].completed);

        assert_eq!(tasks.list().unwrap(), listed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_replaces_all_fields(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();

        let created = tasks.insert(&TaskFields::new("Original title", "Original description", false)).unwrap();

        let updated = tasks
            .update(created.id, &TaskFields::new("Updated title", "Updated description", true))
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Updated title");

        let fetched = tasks.get(created.id).unwrap();
        assert_eq!(fetched, updated);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_missing_task_changes_nothing(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();

        let created = tasks.insert(&TaskFields::new("Keep me", "", false)).unwrap();
        let before = tasks.count().unwrap();

        let result = tasks.update(created.id + 100, &TaskFields::new("Ghost", "", true));
        assert!(matches!(result, Err(StoreError::NotFound(id)) if id == created.id + 100));

        assert_eq!(tasks.count().unwrap(), before);
        assert_eq!(tasks.get(created.id).unwrap(), created);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_removes_exactly_one_row(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();

        let first = tasks.insert(&TaskFields::new("First", "", false)).unwrap();
        let second = tasks.insert(&TaskFields::new("Second", "", false)).unwrap();

        assert_eq!(tasks.delete(first.id).unwrap(), first.id);
        assert_eq!(tasks.count().unwrap(), 1);
        assert!(matches!(tasks.get(first.id), Err(StoreError::NotFound(_))));
        assert_eq!(tasks.get(second.id).unwrap(), second);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_missing_task_is_not_found(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();

        assert!(matches!(tasks.delete(999), Err(StoreError::NotFound(999))));
        assert!(matches!(tasks.get(999), Err(StoreError::NotFound(999))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_concurrent_inserts_get_distinct_ids(ctx: &mut TaskTestContext) {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let tasks = ctx.tasks();
                thread::spawn(move || tasks.insert(&TaskFields::new(&format!("Worker {}", i), "", false)).unwrap().id)
            })
            .collect();

        let mut ids: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(ctx.tasks().count().unwrap(), 8);
    }

    #[test]
    fn test_close_releases_connection() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("todos.db");

        let db = Db::open(&path).unwrap();
        Tasks::new(&db).insert(&TaskFields::new("Persisted", "", true)).unwrap();
        db.close().unwrap();

        let reopened = Db::open(&path).unwrap();
        let listed = Tasks::new(&reopened).list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Persisted");
        assert!(listed[0].completed);
    }
}
