use super::task::{Priority, TaskRow};
use prettytable::{row, Row, Table};

pub struct View {}

impl View {
    /// Builds the history table: one row per task, under the relabeled headers.
    pub fn task_table(rows: &[TaskRow]) -> Table {
        let mut table = Table::new();

        table.set_titles(Row::from(TaskRow::HEADERS));
        for task in rows {
            table.add_row(row![task.id, task.due_date, task.description, task.course, task.priority]);
        }

        table
    }

    pub fn tasks(rows: &[TaskRow]) {
        Self::task_table(rows).printstd();
    }

    pub fn courses(courses: &[String], default_course: &str, priorities: &[Priority]) {
        let mut table = Table::new();

        table.set_titles(row!["#", "COURSE", ""]);
        for (i, course) in courses.iter().enumerate() {
            let marker = if course == default_course { "default" } else { "" };
            table.add_row(row![i + 1, course, marker]);
        }
        table.printstd();

        let mut table = Table::new();
        table.set_titles(row!["PRIORITY"]);
        for priority in priorities {
            table.add_row(row![priority]);
        }
        table.printstd();
    }
}
