//! Database and table bootstrap for a fresh environment. Idempotent; safe to run on every start.

use crate::config::{on_update_trigger_in, trigger_name, ConnectionConfig, ResolvedModel, ResolvedTable, ON_UPDATE_TIMESTAMP_FUNCTION};
use crate::error::AppError;
use sqlx::{ConnectOptions, PgPool};

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn qualified(table: &ResolvedTable) -> String {
    format!("{}.{}", quote_ident(&table.schema_name), quote_ident(&table.table_name))
}

/// Ensure the configured database exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(conn: &ConnectionConfig) -> Result<(), AppError> {
    let db_name = conn.database_name()?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = conn.connect_options()?.database("postgres");
    let mut admin: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut admin)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut admin)
            .await?;
    }
    Ok(())
}

/// Table DDL. Column names follow the resolved model so a renamed soft-delete column is honoured.
fn users_ddl(users: &ResolvedTable) -> String {
    let soft_delete = users.soft_delete_column.as_deref().unwrap_or("deleted_at");
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            "id" BIGSERIAL PRIMARY KEY,
            "username" TEXT NOT NULL UNIQUE,
            "created_at" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            "updated_at" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            {} TIMESTAMPTZ
        )
        "#,
        qualified(users),
        quote_ident(soft_delete)
    )
}

fn projects_ddl(projects: &ResolvedTable, users: &ResolvedTable) -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            "id" BIGSERIAL PRIMARY KEY,
            "title" TEXT NOT NULL,
            "user_id" BIGINT REFERENCES {} ("id") ON UPDATE CASCADE ON DELETE CASCADE,
            "created_at" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            "updated_at" TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        qualified(projects),
        qualified(users)
    )
}

/// Key for the advisory lock serialising concurrent bootstraps.
const BOOTSTRAP_LOCK_KEY: i64 = 0x7265_7361_7069;

/// Create schema, both tables, the `on_update_timestamp()` function and one
/// `<table>_updated_at` trigger per table. Triggers are dropped and recreated.
/// Runs in one transaction under an advisory lock.
pub async fn ensure_schema(pool: &PgPool, model: &ResolvedModel) -> Result<(), AppError> {
    let schema = &model.users.schema_name;
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(BOOTSTRAP_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(&mut *tx)
        .await?;
    sqlx::query(&users_ddl(&model.users)).execute(&mut *tx).await?;
    sqlx::query(&projects_ddl(&model.projects, &model.users))
        .execute(&mut *tx)
        .await?;
    sqlx::query(ON_UPDATE_TIMESTAMP_FUNCTION).execute(&mut *tx).await?;

    for table in [&model.users, &model.projects] {
        sqlx::query(&format!(
            "DROP TRIGGER IF EXISTS {} ON {}",
            quote_ident(&trigger_name(&table.table_name)),
            qualified(table)
        ))
        .execute(&mut *tx)
        .await?;
        sqlx::query(&on_update_trigger_in(&table.schema_name, &table.table_name))
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    tracing::info!(schema = %schema, "schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve, DataAccessConfig};

    #[test]
    fn users_ddl_has_nullable_soft_delete_column() {
        let mut cfg = DataAccessConfig::default();
        cfg.tables.soft_delete_column = "removed_at".into();
        let model = resolve(&cfg).unwrap();
        let ddl = users_ddl(&model.users);
        assert!(ddl.contains("CREATE TABLE IF NOT EXISTS \"public\".\"users\""));
        assert!(ddl.contains("\"removed_at\" TIMESTAMPTZ\n"));
        assert!(ddl.contains("\"username\" TEXT NOT NULL UNIQUE"));
    }

    #[test]
    fn projects_reference_users() {
        let model = resolve(&DataAccessConfig::default()).unwrap();
        let ddl = projects_ddl(&model.projects, &model.users);
        assert!(ddl.contains("REFERENCES \"public\".\"users\" (\"id\")"));
    }
}
