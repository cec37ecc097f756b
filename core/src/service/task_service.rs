use crate::error::{Error, Result};
use crate::model::task::{NewTask, Task};
use crate::repository::TaskRepository;

/// The operations both front ends share. Identifier generation happens here,
/// never in the repository.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// All tasks, ordered by name and then id so listings are stable.
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let mut tasks = self.repo.list().await?;
        sort_tasks(&mut tasks);
        Ok(tasks)
    }

    pub async fn add_task(&self, new_task: NewTask) -> Result<Task> {
        let task = new_task.into_task();
        self.repo.put(&task).await?;
        log::info!("added task {}", task.task_id);
        Ok(task)
    }

    /// Overwrites the whole record stored under `task.task_id`.
    pub async fn save_task(&self, task: Task) -> Result<Task> {
        require("TaskID", &task.task_id)?;
        self.repo.put(&task).await?;
        log::info!("saved task {}", task.task_id);
        Ok(task)
    }

    pub async fn delete_task(&self, task_id: &str) -> Result<()> {
        require("TaskID", task_id)?;
        self.repo.delete(task_id).await?;
        log::info!("deleted task {task_id}");
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(())
}

pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        a.task_name
            .cmp(&b.task_name)
            .then_with(|| a.task_id.cmp(&b.task_id))
    });
}
