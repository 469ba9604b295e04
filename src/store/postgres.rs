//! PostgreSQL store: executes builder output against a pool.

use crate::config::ResolvedModel;
use crate::error::{AppError, ConfigError};
use crate::models::{Project, User};
use crate::sql::{insert, select_list, soft_delete_by_id, update_by_id, QueryBuf};
use crate::store::Store;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    model: ResolvedModel,
}

impl PgStore {
    pub fn new(pool: PgPool, model: ResolvedModel) -> Self {
        PgStore { pool, model }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn query_many<T>(&self, q: &QueryBuf) -> Result<Vec<T>, AppError>
    where
        T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
    {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, T>(&q.sql);
        for p in &q.params {
            query = query.bind(p.as_str());
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn execute(&self, q: &QueryBuf) -> Result<u64, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.as_str());
        }
        let done = query.execute(&self.pool).await?;
        Ok(done.rows_affected())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_active_users(&self) -> Result<Vec<User>, AppError> {
        let q = select_list(&self.model.users, true);
        self.query_many(&q).await
    }

    async fn create_user(&self, username: &str) -> Result<(), AppError> {
        let q = insert(&self.model.users, &[("username", username)])
            .ok_or(ConfigError::Missing("users username column"))?;
        self.execute(&q).await?;
        Ok(())
    }

    async fn update_username(&self, id: &str, username: &str) -> Result<u64, AppError> {
        let q = update_by_id(&self.model.users, id, &[("username", username)])
            .ok_or(ConfigError::Missing("users username column"))?;
        self.execute(&q).await
    }

    async fn soft_delete_user(&self, id: &str) -> Result<u64, AppError> {
        let q = soft_delete_by_id(&self.model.users, id)
            .ok_or(ConfigError::Missing("users soft-delete column"))?;
        self.execute(&q).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let q = select_list(&self.model.projects, false);
        self.query_many(&q).await
    }
}
