#[cfg(test)]
mod tests {
    use sked::db::error::StoreError;
    use sked::db::tasks::Tasks;
    use sked::libs::config::Config;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SchemaTestContext {
        temp_dir: TempDir,
    }

    impl SchemaTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("scheduler.db")
        }
    }

    impl TestContext for SchemaTestContext {
        fn setup() -> Self {
            SchemaTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_schema_created_on_first_call(ctx: &mut SchemaTestContext) {
        let tasks = Tasks::new(&Config::new(ctx.db_path()));
        assert!(!ctx.db_path().exists());

        tasks.ensure_schema().unwrap();
        assert!(ctx.db_path().is_file());

        let conn = rusqlite::Connection::open(ctx.db_path()).unwrap();
        let index_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'idx_date' AND tbl_name = 'scheduler'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(index_count, 1);
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_schema_is_idempotent(ctx: &mut SchemaTestContext) {
        let tasks = Tasks::new(&Config::new(ctx.db_path()));
        tasks.ensure_schema().unwrap();
        let id = tasks.insert("20240101", "Survive re-init", "", "").unwrap();

        tasks.ensure_schema().unwrap();

        // A fresh store on the same file sees the same data
        let reopened = Tasks::new(&Config::new(ctx.db_path()));
        reopened.ensure_schema().unwrap();
        assert_eq!(reopened.get_by_id(&id.to_string()).unwrap().title, "Survive re-init");
        assert_eq!(reopened.search("").unwrap().len(), 1);
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_existing_file_is_trusted(ctx: &mut SchemaTestContext) {
        std::fs::write(ctx.db_path(), b"").unwrap();
        let tasks = Tasks::new(&Config::new(ctx.db_path()));

        tasks.ensure_schema().unwrap();

        // No table was installed into the pre-existing file
        let err = tasks.insert("20240101", "Nowhere to go", "", "").unwrap_err();
        assert!(matches!(err, StoreError::Insert(_)));
        assert!(err.to_string().starts_with("can't insert task: "));
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_unreachable_location_is_connection_error(ctx: &mut SchemaTestContext) {
        let path = ctx.temp_dir.path().join("missing").join("dir").join("scheduler.db");
        let tasks = Tasks::new(&Config::new(&path));

        let err = tasks.ensure_schema().unwrap_err();
        assert!(matches!(err, StoreError::Connection(_)));
        assert!(err.to_string().starts_with("can't open database: "));

        assert!(matches!(tasks.get_by_id("1"), Err(StoreError::Connection(_))));
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_directory_location_is_connection_error(ctx: &mut SchemaTestContext) {
        let tasks = Tasks::new(&Config::new(ctx.temp_dir.path()));

        assert!(matches!(tasks.ensure_schema(), Err(StoreError::Connection(_))));
        assert!(matches!(tasks.get_by_id("1"), Err(StoreError::Connection(_))));
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_missing_table_errors_name_the_operation(ctx: &mut SchemaTestContext) {
        std::fs::write(ctx.db_path(), b"").unwrap();
        let tasks = Tasks::new(&Config::new(ctx.db_path()));
        tasks.ensure_schema().unwrap();

        let err = tasks.get_by_id("1").unwrap_err();
        assert!(matches!(err, StoreError::Query(_)));
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("can't get task: "));

        let err = tasks.update_date("1", "20240102").unwrap_err();
        assert!(matches!(err, StoreError::Update(_)));
        assert!(err.to_string().starts_with("can't update task: "));

        let err = tasks.delete("1").unwrap_err();
        assert!(matches!(err, StoreError::Delete(_)));
        assert!(err.to_string().starts_with("can't delete task: "));

        let err = tasks.search("").unwrap_err();
        assert!(matches!(err, StoreError::Search(_)));
        assert!(err.is_search());
    }

    #[test_context(SchemaTestContext)]
    #[test]
    fn test_store_shared_between_threads(ctx: &mut SchemaTestContext) {
        let tasks = Arc::new(Tasks::new(&Config::new(ctx.db_path())));
        tasks.ensure_schema().unwrap();

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let tasks = Arc::clone(&tasks);
                thread::spawn(move || {
                    (0..5)
                        .map(|i| tasks.insert("20240101", &format!("Worker {} task {}", worker, i), "", "").unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i64> = handles.into_iter().flat_map(|handle| handle.join().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        assert_eq!(ids, (1..=20).collect::<Vec<i64>>());
    }
}
