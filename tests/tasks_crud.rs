#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rusqlite::Connection;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tugas::db::tasks::{StoreError, Tasks};
    use tugas::libs::task::{today, Priority, Task, DEFAULT_DESCRIPTION};

    struct StoreTestContext {
        _temp_dir: TempDir,
        tasks: Tasks,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let tasks = Tasks::open(temp_dir.path().join("tugas.db"));
            StoreTestContext {
                _temp_dir: temp_dir,
                tasks,
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_then_list(ctx: &mut StoreTestContext) {
        let before = ctx.tasks.list().len();

        let task = Task::new("Write lab report", Some(Priority::Urgent), "Database", "2024-03-01");
        assert!(ctx.tasks.insert(&task));

        let rows = ctx.tasks.list();
        assert_eq!(rows.len(), before + 1);
        assert_eq!(rows[0].description, "Write lab report");
        assert_eq!(rows[0].course, "Database");
        assert_eq!(rows[0].priority, "Urgent");
        assert_eq!(rows[0].due_date, "01-03-2024");

        let stored = ctx.tasks.try_fetch_all().unwrap();
        assert_eq!(stored[0].due_date, date(2024, 3, 1));
        assert_eq!(stored[0].priority, Priority::Urgent);
        assert_eq!(stored[0].id, Some(rows[0].id));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_empty_description_is_stored_as_placeholder(ctx: &mut StoreTestContext) {
        let task = Task::new("", None, "Statistics", "2024-05-05");
        assert!(ctx.tasks.insert(&task));

        let rows = ctx.tasks.list();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, DEFAULT_DESCRIPTION);
        assert_eq!(rows[0].priority, "Standard");
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_list_empty_store(ctx: &mut StoreTestContext) {
        assert!(ctx.tasks.list().is_empty());
        assert!(ctx.tasks.try_list().unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_try_insert_returns_increasing_ids(ctx: &mut StoreTestContext) {
        let first = ctx.tasks.try_insert(&Task::new("First", None, "Civics", "2024-01-01")).unwrap();
        let second = ctx.tasks.try_insert(&Task::new("Second", None, "Civics", "2024-01-01")).unwrap();
        assert!(first > 0);
        assert!(second > first);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_inserted_task(ctx: &mut StoreTestContext) {
        let id = ctx.tasks.try_insert(&Task::new("Temporary", None, "English", "2024-02-02")).unwrap();
        ctx.tasks.insert(&Task::new("Keeper", None, "English", "2024-02-03"));

        assert!(ctx.tasks.delete(id));

        let rows = ctx.tasks.list();
        assert_eq!(rows.len(), 1);
        assert!(rows.iter().all(|row| row.id != id));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_unknown_id(ctx: &mut StoreTestContext) {
        ctx.tasks.insert(&Task::new("Only task", None, "English", "2024-02-02"));
        let before = ctx.tasks.list();

        assert!(!ctx.tasks.delete(9999));
        assert_eq!(ctx.tasks.list(), before);

        match ctx.tasks.try_delete(9999) {
            Err(StoreError::NotFound(id)) => assert_eq!(id, 9999),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_deleted_id_is_not_reused(ctx: &mut StoreTestContext) {
        let id = ctx.tasks.try_insert(&Task::new("Gone", None, "PBO", "2024-02-02")).unwrap();
        assert!(ctx.tasks.delete(id));
        assert!(!ctx.tasks.delete(id));

        let next = ctx.tasks.try_insert(&Task::new("Next", None, "PBO", "2024-02-02")).unwrap();
        assert!(next > id);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_list_orders_by_due_date_descending(ctx: &mut StoreTestContext) {
        for due in ["2024-01-01", "2024-03-01", "2024-02-01"] {
            assert!(ctx.tasks.insert(&Task::new(due, None, "Database", due)));
        }

        let dates: Vec<String> = ctx.tasks.list().into_iter().map(|row| row.due_date).collect();
        assert_eq!(dates, vec!["01-03-2024", "01-02-2024", "01-01-2024"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_list_same_date_newest_first(ctx: &mut StoreTestContext) {
        let older = ctx.tasks.try_insert(&Task::new("Older", None, "Database", "2024-04-04")).unwrap();
        let newer = ctx.tasks.try_insert(&Task::new("Newer", None, "Database", "2024-04-04")).unwrap();

        let ids: Vec<i64> = ctx.tasks.list().into_iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![newer, older]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_initialize_is_idempotent(ctx: &mut StoreTestContext) {
        ctx.tasks.insert(&Task::new("Survives", None, "Statistics", "2024-06-06"));
        let before = ctx.tasks.list();

        assert!(ctx.tasks.initialize());
        assert!(ctx.tasks.initialize());
        ctx.tasks.try_initialize().unwrap();

        let reopened = Tasks::open(ctx.tasks.path());
        assert_eq!(reopened.list(), before);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_defaults_date_to_today(ctx: &mut StoreTestContext) {
        let before = today();
        assert!(ctx.tasks.insert(&Task::new("Whenever", None, "Civics", "not-a-date")));

        let stored = ctx.tasks.try_fetch_all().unwrap();
        assert!(stored[0].due_date == before || stored[0].due_date == today());
    }

    #[test]
    fn test_unreachable_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let tasks = Tasks::open(temp_dir.path().join("missing").join("tugas.db"));

        assert!(!tasks.insert(&Task::new("Lost", None, "Database", "2024-01-01")));
        assert!(tasks.list().is_empty());
        assert!(!tasks.delete(1));
        assert!(tasks.try_list().is_err());
    }

    #[test]
    fn test_corrupt_store_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tugas.db");
        fs::write(&path, "this is not a sqlite database\n".repeat(200)).unwrap();

        let tasks = Tasks::open(&path);
        assert!(!tasks.insert(&Task::new("Lost", None, "Database", "2024-01-01")));
        assert!(tasks.list().is_empty());
        assert!(!tasks.delete(1));
    }

    #[test]
    fn test_unparseable_stored_date_yields_empty_listing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tugas.db");
        let tasks = Tasks::open(&path);
        tasks.insert(&Task::new("Fine", None, "Database", "2024-01-01"));

        let conn = Connection::open(&path).unwrap();
        conn.execute(
            "INSERT INTO tugas (deskripsi, tingkatan, kategori, tanggal) VALUES ('Broken', 'Standard', 'Database', 'soon')",
            [],
        )
        .unwrap();
        drop(conn);

        assert!(tasks.list().is_empty());
        assert!(matches!(tasks.try_list(), Err(StoreError::InvalidStoredDate(_))));
    }

    #[test]
    fn test_row_with_unparseable_date_can_still_be_deleted() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tugas.db");
        let tasks = Tasks::open(&path);
        tasks.insert(&Task::new("Fine", None, "Database", "2024-01-01"));

        let conn = Connection::open(&path).unwrap();
        conn.execute(
            "INSERT INTO tugas (deskripsi, tingkatan, kategori, tanggal) VALUES ('Broken', 'Standard', 'Database', 'soon')",
            [],
        )
        .unwrap();
        let broken_id = conn.last_insert_rowid();
        drop(conn);
        assert!(tasks.list().is_empty());

        assert!(tasks.delete(broken_id));

        let rows = tasks.list();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "Fine");
    }

    #[test]
    fn test_legacy_priority_labels_are_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tugas.db");
        let tasks = Tasks::open(&path);

        let conn = Connection::open(&path).unwrap();
        conn.execute(
            "INSERT INTO tugas (deskripsi, tingkatan, kategori, tanggal) VALUES ('Old row', 'Penting', 'PBO', '2023-12-01')",
            [],
        )
        .unwrap();
        drop(conn);

        let stored = tasks.try_fetch_all().unwrap();
        assert_eq!(stored[0].priority, Priority::Important);
        assert_eq!(tasks.list()[0].priority, "Penting");
    }
}
