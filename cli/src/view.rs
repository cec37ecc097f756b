use tabled::settings::Style;
use tabled::{Table, Tabled};
use task_tracker_core::Task;

#[derive(Tabled)]
struct TaskRow<'a> {
    #[tabled(rename = "TaskID")]
    task_id: &'a str,
    #[tabled(rename = "Task Name")]
    task_name: &'a str,
    #[tabled(rename = "Task Details")]
    task_details: &'a str,
    #[tabled(rename = "Completion Date")]
    completion_date: &'a str,
}

pub fn render_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "Table is empty.".to_string();
    }

    let rows = tasks.iter().map(|t| TaskRow {
        task_id: &t.task_id,
        task_name: &t.task_name,
        task_details: &t.task_details,
        completion_date: &t.completion_date,
    });
    Table::new(rows).with(Style::modern()).to_string()
}
