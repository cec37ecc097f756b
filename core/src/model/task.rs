use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single tracked task. The JSON form uses the same flat keys the web API
/// exchanges: `TaskID`, `TaskName`, `TaskDetails`, `CompletionDate`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    #[serde(rename = "TaskID")]
    pub task_id: String,
    pub task_name: String,
    pub task_details: String,
    // Free text, never parsed.
    pub completion_date: String,
}

impl Task {
    pub fn new(task_name: String, task_details: String, completion_date: String) -> Self {
        Self {
            task_id: Uuid::new_v4().to_string(),
            task_name,
            task_details,
            completion_date,
        }
    }
}

/// Body of a create request. Every field must be present and a string.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NewTask {
    pub task_name: String,
    pub task_details: String,
    pub completion_date: String,
}

impl NewTask {
    pub fn into_task(self) -> Task {
        Task::new(self.task_name, self.task_details, self.completion_date)
    }
}
