use std::future::Future;

use crate::error::Result;
use crate::model::task::Task;

/// Storage of tasks keyed by `TaskID`.
///
/// The returned futures are `Send` so a repository can be driven from
/// multi-threaded request handlers.
pub trait TaskRepository: Send + Sync {
    /// Every stored task, in no particular order. An empty store yields an empty vec.
    fn list(&self) -> impl Future<Output = Result<Vec<Task>>> + Send;

    /// Creates the task or fully overwrites the record with the same id.
    fn put(&self, task: &Task) -> impl Future<Output = Result<()>> + Send;

    /// Removes the task with this id. Absent ids are not an error.
    fn delete(&self, task_id: &str) -> impl Future<Output = Result<()>> + Send;
}
