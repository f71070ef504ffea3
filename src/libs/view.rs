use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "TITLE", "COMMENT", "REPEAT"]);
        for task in tasks {
            table.add_row(row![task.id, task.date, task.title, task.comment, task.repeat]);
        }
        table.printstd();
    }
}
