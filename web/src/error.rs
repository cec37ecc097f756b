use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tera::Tera;

use crate::templates::{self, Page};

/// Failure of a single request; the server keeps serving other requests.
/// API routes answer with a JSON `{"error": ...}` body, pages go through
/// [`error_page`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] task_tracker_core::Error),

    #[error("template error: {0}")]
    Render(#[from] tera::Error),

    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Store(task_tracker_core::Error::MissingField(_)) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        if self.status().is_server_error() {
            log::error!("{self}");
        } else {
            log::warn!("rejected request: {self}");
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Renders the failure inside the site layout. Falls back to plain text when
/// the error page itself cannot be rendered.
pub fn error_page(tera: &Tera, err: AppError) -> Response {
    err.log();
    let status = err.status();
    let page = Page {
        error: Some(err.to_string()),
        ..Page::default()
    };
    match templates::render(tera, templates::ERROR, &page) {
        Ok(html) => (status, html).into_response(),
        Err(render_err) => {
            log::error!("{render_err}");
            (status, err.to_string()).into_response()
        }
    }
}
