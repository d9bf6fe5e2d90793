#[cfg(test)]
mod tests {
    use tugas::libs::task::TaskRow;
    use tugas::libs::view::View;

    fn row(id: i64, description: &str) -> TaskRow {
        TaskRow {
            id,
            due_date: "01-03-2024".to_string(),
            description: description.to_string(),
            course: "Database".to_string(),
            priority: "Urgent".to_string(),
        }
    }

    #[test]
    fn test_task_table_has_one_row_per_task() {
        let rows = vec![row(2, "Second"), row(1, "First")];
        let table = View::task_table(&rows);
        assert_eq!(table.len(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("Due Date"));
        assert!(rendered.contains("Course"));
        assert!(rendered.contains("01-03-2024"));
        assert!(rendered.contains("Second"));
    }

    #[test]
    fn test_task_table_empty() {
        let table = View::task_table(&[]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_headers() {
        assert_eq!(TaskRow::HEADERS, ["ID", "Due Date", "Description", "Course", "Priority"]);
    }
}
