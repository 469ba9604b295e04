//! Server entry point: loads data-access config, bootstraps the database, serves users and projects.
//!
//! Environment: `APP_ENV` (profile name, default `development`), `DATA_ACCESS_CONFIG`
//! (optional JSON profile file), `BIND_ADDR` (default `0.0.0.0:3333`), plus the
//! `DATABASE_URL` / `DB_*` overrides read by the config loader.

use resource_api::{app, ensure_database_exists, ensure_schema, load, resolve, AppState, PgStore, DEFAULT_ENVIRONMENT};
use std::path::PathBuf;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("resource_api=info,tower_http=info")),
        )
        .init();

    let environment = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.into());
    let config_path = std::env::var("DATA_ACCESS_CONFIG").ok().map(PathBuf::from);
    let config = load(&environment, config_path.as_deref())?;
    let model = resolve(&config)?;
    tracing::info!(
        environment = %environment,
        database = %config.connection.database_name()?,
        migrations_table = %config.migrations.table_name,
        "config loaded"
    );

    ensure_database_exists(&config.connection).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connection.connect_options()?)
        .await?;
    ensure_schema(&pool, &model).await?;

    let store = PgStore::new(pool, model);
    let state = AppState::new(store.clone());

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3333".into());
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    store.pool().close().await;
    tracing::info!("shut down");
    Ok(())
}
