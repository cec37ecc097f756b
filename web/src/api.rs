use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use task_tracker_core::{NewTask, TaskRepository};

use crate::error::AppError;
use crate::state::SharedState;

pub const EMPTY_TABLE: &str = "Table is empty.";

/// `POST /api/Add`: answers with a JSON string naming the new id.
pub async fn add_task<R: TaskRepository>(
    State(state): State<SharedState<R>>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<Json<String>, AppError> {
    let Json(new_task) = payload?;
    let task = state.service.add_task(new_task).await?;
    Ok(Json(format!("Task added with TaskID: {}", task.task_id)))
}

/// `GET /api/ViewAll`: a JSON array of tasks, or a JSON string when there are none.
pub async fn view_all<R: TaskRepository>(
    State(state): State<SharedState<R>>,
) -> Result<Response, AppError> {
    let tasks = state.service.list_tasks().await?;
    if tasks.is_empty() {
        return Ok(Json(EMPTY_TABLE).into_response());
    }
    Ok(Json(tasks).into_response())
}
