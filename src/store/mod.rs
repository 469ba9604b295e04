//! Data access: the `Store` trait handlers depend on, its PostgreSQL implementation, and schema bootstrap.

mod bootstrap;
mod postgres;

pub use bootstrap::{ensure_database_exists, ensure_schema};
pub use postgres::PgStore;

use crate::error::AppError;
use crate::models::{Project, User};
use async_trait::async_trait;

/// Operations the resource handlers issue. Each call is a single statement against the store.
///
/// Ids arrive as the raw path segment; parsing them is left to the store, so a malformed
/// id surfaces as a store error rather than a validation error.
#[async_trait]
pub trait Store: Send + Sync {
    /// Round trip used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;

    /// Users whose soft-delete timestamp is null.
    async fn list_active_users(&self) -> Result<Vec<User>, AppError>;

    async fn create_user(&self, username: &str) -> Result<(), AppError>;

    /// Returns the number of rows changed; zero when no row has `id`.
    async fn update_username(&self, id: &str, username: &str) -> Result<u64, AppError>;

    /// Sets the soft-delete timestamp to now, even if already set. Returns rows changed.
    async fn soft_delete_user(&self, id: &str) -> Result<u64, AppError>;

    /// Every project row, unfiltered.
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
}
