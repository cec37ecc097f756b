use std::io::{self, BufRead, Write};

use task_tracker_core::{NewTask, TaskRepository, TaskService};

use crate::view::render_tasks;

/// Process exit code once the user leaves the menu.
pub const EXIT_CODE: u8 = 2;

const BANNER: &str = "Task Tracker\n\
1 - Add new task.\n\
2 - View current tasks.\n\
3 - Delete completed tasks.\n\
Exit - Closes the application.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Delete,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::View),
            "3" => Some(MenuChoice::Delete),
            "exit" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Strips one trailing `\n` or `\r\n`, leaving everything else verbatim.
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// The interactive prompt loop. Store failures are reported and the menu
/// carries on; only terminal I/O errors end it early.
pub struct Menu<'a, R: TaskRepository, I, O> {
    service: &'a TaskService<R>,
    input: I,
    output: O,
}

impl<'a, R: TaskRepository, I: BufRead, O: Write> Menu<'a, R, I, O> {
    pub fn new(service: &'a TaskService<R>, input: I, output: O) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs until `exit` is entered or input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{BANNER}")?;
        loop {
            let Some(line) = self.prompt("Select an option menu value: ")? else {
                return Ok(());
            };
            match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.add_flow().await?,
                Some(MenuChoice::View) => self.view_flow().await?,
                Some(MenuChoice::Delete) => self.delete_flow().await?,
                Some(MenuChoice::Exit) => return Ok(()),
                None => {}
            }
        }
    }

    async fn add_flow(&mut self) -> io::Result<()> {
        let Some(task_name) = self.prompt("Enter a task name: ")? else {
            return Ok(());
        };
        let Some(task_details) = self.prompt("Enter the task details: ")? else {
            return Ok(());
        };
        let Some(completion_date) = self.prompt("Enter the completion date: ")? else {
            return Ok(());
        };

        let new_task = NewTask {
            task_name,
            task_details,
            completion_date,
        };
        match self.service.add_task(new_task).await {
            Ok(task) => writeln!(
                self.output,
                "\nTask sent: \n\tTaskID = {}\n\tTask Name = {}\n\tTask Details = {}\n\tCompletion Date = {}\n",
                task.task_id, task.task_name, task.task_details, task.completion_date
            ),
            Err(e) => self.report(e),
        }
    }

    async fn view_flow(&mut self) -> io::Result<()> {
        match self.service.list_tasks().await {
            Ok(tasks) => writeln!(self.output, "{}", render_tasks(&tasks)),
            Err(e) => self.report(e),
        }
    }

    async fn delete_flow(&mut self) -> io::Result<()> {
        let Some(task_id) = self.prompt("Enter the TaskID to delete: ")? else {
            return Ok(());
        };
        match self.service.delete_task(&task_id).await {
            Ok(()) => writeln!(self.output, "Task deleted."),
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, err: task_tracker_core::Error) -> io::Result<()> {
        log::error!("{err}");
        writeln!(self.output, "Error: {err}")
    }

    /// Writes `message` and reads one line. `None` means input has ended.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_ending(&line).to_string()))
    }
}
