#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tugas::libs::config::{Config, CONFIG_FILE_NAME, DEFAULT_CATEGORY};
    use tugas::libs::data_storage::DataStorage;
    use tugas::libs::task::Priority;

    struct ConfigTestContext {
        _temp_dir: TempDir,
        config_path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config_path = DataStorage::at(temp_dir.path().join("tugas")).get_path(CONFIG_FILE_NAME).unwrap();
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.categories.len(), 8);
        assert_eq!(config.default_category, DEFAULT_CATEGORY);
        assert!(config.is_known_category(DEFAULT_CATEGORY));
        assert_eq!(config.categories[config.default_category_index()], DEFAULT_CATEGORY);
        assert_eq!(config.priorities(), &[Priority::Standard, Priority::Important, Priority::Urgent]);
        assert!(config.db_path.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            categories: vec!["Algorithms".to_string(), "Calculus".to_string()],
            default_category: "Calculus".to_string(),
            db_path: Some(PathBuf::from("/tmp/tasks.db")),
        };
        config.save_to(&ctx.config_path).unwrap();

        let read_config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.default_category_index(), 1);
        assert_eq!(read_config.db_file().unwrap(), PathBuf::from("/tmp/tasks.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_fills_defaults(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.config_path, r#"{ "default_category": "Statistics" }"#).unwrap();

        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config.categories, Config::default().categories);
        assert_eq!(config.default_category, "Statistics");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unlisted_default_category_falls_back_to_first(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.config_path, r#"{ "categories": ["A", "B"], "default_category": "Z" }"#).unwrap();

        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config.default_category_index(), 0);
        assert!(!config.is_known_category("Z"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.config_path, "{ not json").unwrap();
        assert!(Config::read_from(&ctx.config_path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_course_list_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.config_path, r#"{ "categories": [] }"#).unwrap();
        assert!(Config::read_from(&ctx.config_path).is_err());
    }

    #[test]
    fn test_data_storage_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path().join("nested").join("tugas");
        let storage = DataStorage::at(&base);

        let path = storage.get_path("tugas.db").unwrap();
        assert!(base.is_dir());
        assert_eq!(path, base.join("tugas.db"));
        assert_eq!(storage.base_path(), base.as_path());
    }
}
