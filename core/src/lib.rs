pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;

pub use client::connect;
pub use config::{ParameterNames, StoreArgs, StoreConfig};
pub use credentials::CredentialProvider;
pub use error::{Error, Result};
pub use model::task::{NewTask, Task};
pub use repository::{DynamoTaskRepository, MemoryTaskRepository, TaskRepository};
pub use service::task_service::TaskService;
