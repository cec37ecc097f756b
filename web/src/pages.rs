use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use task_tracker_core::{NewTask, Task, TaskRepository};

use crate::error::{error_page, AppError};
use crate::state::{AppState, SharedState};
use crate::templates::{self, Page};

type PageResult = Result<Html<String>, AppError>;

#[derive(Deserialize)]
pub struct DeleteForm {
    #[serde(rename = "TaskID")]
    pub task_id: String,
}

pub async fn menu<R: TaskRepository>(State(state): State<SharedState<R>>) -> Response {
    let result = templates::render(&state.templates, templates::MENU, &Page::default());
    respond(&state, result)
}

pub async fn view<R: TaskRepository>(State(state): State<SharedState<R>>) -> Response {
    let result = list_page(&state, templates::VIEW, None).await;
    respond(&state, result)
}

pub async fn add_form<R: TaskRepository>(State(state): State<SharedState<R>>) -> Response {
    let result = templates::render(&state.templates, templates::ADD, &Page::default());
    respond(&state, result)
}

pub async fn add_submit<R: TaskRepository>(
    State(state): State<SharedState<R>>,
    form: Result<Form<NewTask>, FormRejection>,
) -> Response {
    let result = add_task(&state, form).await;
    respond(&state, result)
}

pub async fn modify_form<R: TaskRepository>(State(state): State<SharedState<R>>) -> Response {
    let result = list_page(&state, templates::MODIFY, None).await;
    respond(&state, result)
}

pub async fn modify_submit<R: TaskRepository>(
    State(state): State<SharedState<R>>,
    form: Result<Form<Task>, FormRejection>,
) -> Response {
    let result = modify_task(&state, form).await;
    respond(&state, result)
}

pub async fn delete_form<R: TaskRepository>(State(state): State<SharedState<R>>) -> Response {
    let result = list_page(&state, templates::DELETE, None).await;
    respond(&state, result)
}

pub async fn delete_submit<R: TaskRepository>(
    State(state): State<SharedState<R>>,
    form: Result<Form<DeleteForm>, FormRejection>,
) -> Response {
    let result = delete_task(&state, form).await;
    respond(&state, result)
}

async fn add_task<R: TaskRepository>(
    state: &AppState<R>,
    form: Result<Form<NewTask>, FormRejection>,
) -> PageResult {
    let Form(new_task) = form?;
    let task = state.service.add_task(new_task).await?;
    let page = Page {
        message: Some(format!("Task added with TaskID: {}", task.task_id)),
        ..Page::default()
    };
    templates::render(&state.templates, templates::ADD, &page)
}

/// Replaces the whole record with the submitted fields; nothing is merged.
async fn modify_task<R: TaskRepository>(
    state: &AppState<R>,
    form: Result<Form<Task>, FormRejection>,
) -> PageResult {
    let Form(task) = form?;
    let task = state.service.save_task(task).await?;
    let message = format!("Task {} updated.", task.task_id);
    list_page(state, templates::MODIFY, Some(message)).await
}

async fn delete_task<R: TaskRepository>(
    state: &AppState<R>,
    form: Result<Form<DeleteForm>, FormRejection>,
) -> PageResult {
    let Form(DeleteForm { task_id }) = form?;
    state.service.delete_task(&task_id).await?;
    let message = format!("Task {task_id} deleted.");
    list_page(state, templates::DELETE, Some(message)).await
}

async fn list_page<R: TaskRepository>(
    state: &AppState<R>,
    name: &str,
    message: Option<String>,
) -> PageResult {
    let tasks = state.service.list_tasks().await?;
    let page = Page {
        tasks: &tasks,
        message,
        error: None,
    };
    templates::render(&state.templates, name, &page)
}

fn respond<R: TaskRepository>(state: &AppState<R>, result: PageResult) -> Response {
    match result {
        Ok(html) => html.into_response(),
        Err(err) => error_page(&state.templates, err),
    }
}
