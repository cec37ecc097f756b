use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;
use crate::model::task::Task;
use crate::repository::traits::TaskRepository;

/// Process-local task store with the same upsert/delete semantics as the table.
#[derive(Clone, Default)]
pub struct MemoryTaskRepository {
    tasks: Arc<Mutex<HashMap<String, Task>>>,
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Task>> {
        // A poisoned map is still a consistent map: every write is a single insert/remove.
        self.tasks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TaskRepository for MemoryTaskRepository {
    async fn list(&self) -> Result<Vec<Task>> {
        Ok(self.lock().values().cloned().collect())
    }

    async fn put(&self, task: &Task) -> Result<()> {
        self.lock().insert(task.task_id.clone(), task.clone());
        Ok(())
    }

    async fn delete(&self, task_id: &str) -> Result<()> {
        self.lock().remove(task_id);
        Ok(())
    }
}
