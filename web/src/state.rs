use std::sync::Arc;

use task_tracker_core::{TaskRepository, TaskService};
use tera::Tera;

use crate::templates;

/// Everything a request needs, built once at startup and shared by reference.
pub struct AppState<R: TaskRepository> {
    pub service: TaskService<R>,
    pub templates: Tera,
}

pub type SharedState<R> = Arc<AppState<R>>;

impl<R: TaskRepository> AppState<R> {
    pub fn new(service: TaskService<R>) -> Result<Self, tera::Error> {
        Ok(Self {
            service,
            templates: templates::load()?,
        })
    }
}
