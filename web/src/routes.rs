use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use task_tracker_core::TaskRepository;

use crate::state::AppState;
use crate::{api, pages};

pub fn router<R: TaskRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/", get(pages::menu::<R>))
        .route("/View", get(pages::view::<R>))
        .route("/Add", get(pages::add_form::<R>).post(pages::add_submit::<R>))
        .route(
            "/Modify",
            get(pages::modify_form::<R>).post(pages::modify_submit::<R>),
        )
        .route(
            "/Delete",
            get(pages::delete_form::<R>).post(pages::delete_submit::<R>),
        )
        .route("/api/Add", post(api::add_task::<R>))
        .route("/api/ViewAll", get(api::view_all::<R>))
        .layer(middleware::from_fn(log_request))
        .with_state(Arc::new(state))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;
    log::info!("{method} {uri} -> {}", response.status());
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{self, header, StatusCode};
    use serde_json::Value;
    use task_tracker_core::{Error, MemoryTaskRepository, Task, TaskService};
    use tower::ServiceExt;

    fn app(repo: &MemoryTaskRepository) -> Router {
        router(AppState::new(TaskService::new(repo.clone())).unwrap())
    }

    fn sample(id: &str, name: &str) -> Task {
        Task {
            task_id: id.to_string(),
            task_name: name.to_string(),
            task_details: "details".to_string(),
            completion_date: "2024-01-01".to_string(),
        }
    }

    async fn send(app: Router, request: Request) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get_request(uri: &str) -> Request {
        http::Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(uri: &str, body: &str) -> Request {
        http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_request(uri: &str, body: &str) -> Request {
        http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_add_returns_new_id() {
        let repo = MemoryTaskRepository::new();
        let (status, body) = send(
            app(&repo),
            json_request(
                "/api/Add",
                r#"{"TaskName":"X","TaskDetails":"Y","CompletionDate":"Z"}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let message: String = serde_json::from_str(&body).unwrap();
        let id = message.strip_prefix("Task added with TaskID: ").unwrap();
        assert!(!id.is_empty());

        let tasks = repo.list().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task_id, id);
        assert_eq!(tasks[0].task_name, "X");
        assert_eq!(tasks[0].task_details, "Y");
        assert_eq!(tasks[0].completion_date, "Z");
    }

    #[tokio::test]
    async fn test_api_add_rejects_malformed_body() {
        let repo = MemoryTaskRepository::new();
        for body in [
            r#"{"TaskName":"X"}"#,
            "not json",
            r#"{"TaskName":1,"TaskDetails":"Y","CompletionDate":"Z"}"#,
        ] {
            let (status, text) = send(app(&repo), json_request("/api/Add", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            let value: Value = serde_json::from_str(&text).unwrap();
            assert!(value["error"].is_string());
        }
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_api_view_all_empty() {
        let repo = MemoryTaskRepository::new();
        let (status, body) = send(app(&repo), get_request("/api/ViewAll")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#""Table is empty.""#);
    }

    #[tokio::test]
    async fn test_api_view_all_lists_tasks() {
        let repo = MemoryTaskRepository::new();
        repo.put(&sample("A", "first")).await.unwrap();
        repo.put(&sample("B", "second")).await.unwrap();

        let (status, body) = send(app(&repo), get_request("/api/ViewAll")).await;
        assert_eq!(status, StatusCode::OK);
        let tasks: Vec<Task> = serde_json::from_str(&body).unwrap();
        assert_eq!(tasks, vec![sample("A", "first"), sample("B", "second")]);
    }

    #[tokio::test]
    async fn test_menu_links_every_page() {
        let repo = MemoryTaskRepository::new();
        let (status, body) = send(app(&repo), get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
        for link in ["/Add", "/View", "/Modify", "/Delete"] {
            assert!(body.contains(&format!("href=\"{link}\"")), "{link}");
        }
    }

    #[tokio::test]
    async fn test_view_page_shows_tasks() {
        let repo = MemoryTaskRepository::new();
        repo.put(&sample("A", "Write spec")).await.unwrap();
        let (status, body) = send(app(&repo), get_request("/View")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<td>Write spec</td>"));
    }

    #[tokio::test]
    async fn test_add_form_post_stores_task() {
        let repo = MemoryTaskRepository::new();
        let (status, body) = send(
            app(&repo),
            form_request(
                "/Add",
                "TaskName=Write+spec&TaskDetails=finish+section+8&CompletionDate=2024-01-01",
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let tasks = repo.list().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task_name, "Write spec");
        assert!(body.contains(&format!("Task added with TaskID: {}", tasks[0].task_id)));
    }

    #[tokio::test]
    async fn test_modify_overwrites_whole_record() {
        let repo = MemoryTaskRepository::new();
        repo.put(&sample("A", "draft")).await.unwrap();

        let (status, body) = send(
            app(&repo),
            form_request("/Modify", "TaskID=A&TaskName=final&TaskDetails=&CompletionDate=later"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Task A updated."));

        let tasks = repo.list().await.unwrap();
        assert_eq!(
            tasks,
            vec![Task {
                task_id: "A".to_string(),
                task_name: "final".to_string(),
                task_details: String::new(),
                completion_date: "later".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_delete_removes_task_and_refreshes_choices() {
        let repo = MemoryTaskRepository::new();
        repo.put(&sample("A", "gone")).await.unwrap();
        repo.put(&sample("B", "kept")).await.unwrap();

        let (status, body) = send(app(&repo), form_request("/Delete", "TaskID=A")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Task A deleted."));
        assert!(!body.contains("value=\"A\""));
        assert!(body.contains("value=\"B\""));
        assert_eq!(repo.list().await.unwrap(), vec![sample("B", "kept")]);

        // Deleting again is not an error.
        let (status, _) = send(app(&repo), form_request("/Delete", "TaskID=A")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_requires_task_id() {
        let repo = MemoryTaskRepository::new();
        let (status, body) = send(app(&repo), form_request("/Delete", "TaskID=")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("<p class=\"error\">TaskID must not be empty</p>"));

        let (status, body) = send(app(&repo), form_request("/Delete", "")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("<h1>Task Tracker</h1>"));
    }

    struct UnavailableRepo;

    impl TaskRepository for UnavailableRepo {
        async fn list(&self) -> task_tracker_core::Result<Vec<Task>> {
            Err(Error::MalformedItem { attribute: "TaskID" })
        }
        async fn put(&self, _task: &Task) -> task_tracker_core::Result<()> {
            Err(Error::MalformedItem { attribute: "TaskID" })
        }
        async fn delete(&self, _task_id: &str) -> task_tracker_core::Result<()> {
            Err(Error::MalformedItem { attribute: "TaskID" })
        }
    }

    #[tokio::test]
    async fn test_store_failure_is_a_per_request_500() {
        let app = router(AppState::new(TaskService::new(UnavailableRepo)).unwrap());

        let (status, body) = send(app.clone(), get_request("/api/ViewAll")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let value: Value = serde_json::from_str(&body).unwrap();
        assert!(value["error"].as_str().unwrap().contains("TaskID"));

        // The router keeps answering afterwards.
        let (status, _) = send(app, get_request("/")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_page_failure_renders_html() {
        let app = router(AppState::new(TaskService::new(UnavailableRepo)).unwrap());

        for uri in ["/View", "/Modify", "/Delete"] {
            let response = app.clone().oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
            assert!(content_type.starts_with("text/html"), "{uri}: {content_type}");

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body = String::from_utf8(bytes.to_vec()).unwrap();
            assert!(body.contains("<p class=\"error\">table item has no string attribute"));
        }

        let (status, body) = send(
            app,
            form_request("/Add", "TaskName=X&TaskDetails=Y&CompletionDate=Z"),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("<p class=\"error\">"));
    }
}
