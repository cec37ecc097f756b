//! HTML pages, compiled into the binary.

use axum::response::Html;
use serde::Serialize;
use task_tracker_core::Task;
use tera::{Context, Tera};

use crate::error::AppError;

pub const MENU: &str = "menu.html";
pub const VIEW: &str = "view.html";
pub const ADD: &str = "add.html";
pub const MODIFY: &str = "modify.html";
pub const DELETE: &str = "delete.html";
pub const ERROR: &str = "error.html";

const SOURCES: [(&str, &str); 7] = [
    ("base.html", include_str!("../templates/base.html")),
    (MENU, include_str!("../templates/menu.html")),
    (VIEW, include_str!("../templates/view.html")),
    (ADD, include_str!("../templates/add.html")),
    (MODIFY, include_str!("../templates/modify.html")),
    (DELETE, include_str!("../templates/delete.html")),
    (ERROR, include_str!("../templates/error.html")),
];

pub fn load() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(SOURCES)?;
    Ok(tera)
}

/// What every page template receives. Every key is always present.
#[derive(Serialize, Default)]
pub struct Page<'a> {
    pub tasks: &'a [Task],
    pub message: Option<String>,
    pub error: Option<String>,
}

pub fn render(tera: &Tera, name: &str, page: &Page<'_>) -> Result<Html<String>, AppError> {
    let context = Context::from_serialize(page)?;
    Ok(Html(tera.render(name, &context)?))
}
