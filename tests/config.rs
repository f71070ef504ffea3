#[cfg(test)]
mod tests {
    use sked::db::tasks::Tasks;
    use sked::libs::config::{Config, DB_FILE_ENV, DEFAULT_DB_FILE};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Owns the override variable for the duration of a test.
    struct EnvTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for EnvTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::remove_var(DB_FILE_ENV);
            EnvTestContext { temp_dir }
        }

        fn teardown(self) {
            std::env::remove_var(DB_FILE_ENV);
        }
    }

    // Both cases live in one test so they never race on the process environment.
    #[test_context(EnvTestContext)]
    #[test]
    fn test_location_from_environment(ctx: &mut EnvTestContext) {
        assert_eq!(Config::from_env().db_path, PathBuf::from(DEFAULT_DB_FILE));

        std::env::set_var(DB_FILE_ENV, "");
        assert_eq!(Config::from_env().db_path, PathBuf::from(DEFAULT_DB_FILE));

        let path = ctx.temp_dir.path().join("from-env.db");
        std::env::set_var(DB_FILE_ENV, &path);
        let tasks = Tasks::from_env();
        assert_eq!(tasks.path(), path.as_path());

        // Resolved once: later changes do not move an existing store
        std::env::set_var(DB_FILE_ENV, ctx.temp_dir.path().join("other.db"));
        tasks.ensure_schema().unwrap();
        assert!(path.is_file());
        assert!(!ctx.temp_dir.path().join("other.db").exists());
    }
}
