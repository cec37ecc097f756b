pub mod api;
pub mod error;
pub mod pages;
pub mod routes;
pub mod state;
pub mod templates;

pub use error::AppError;
pub use routes::router;
pub use state::AppState;
