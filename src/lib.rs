//! Users and projects REST API over PostgreSQL.
//!
//! Users are soft-deleted through a nullable timestamp column; listings only
//! return active rows. Projects are read-only.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{load, resolve, DataAccessConfig, ResolvedModel, DEFAULT_ENVIRONMENT};
pub use error::{AppError, ConfigError};
pub use models::{Project, User};
pub use routes::{app, common_routes, resource_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_schema, PgStore, Store};
