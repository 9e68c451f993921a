//! Camp registry: REST backend for campers, activities and signups.

pub mod error;
pub mod models;
pub mod validation;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use error::AppError;
pub use state::AppState;
pub use store::{connect, database_url, ensure_tables};
pub use routes::{api_routes, common_routes};
