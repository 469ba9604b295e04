//! Load data-access config from a JSON profile file and environment variables.

use crate::config::resolved::{ColumnInfo, ResolvedModel, ResolvedTable};
use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::collections::HashMap;
use std::path::Path;

/// Environment used when `APP_ENV` is not set.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Read one environment profile from a JSON file shaped like
/// `{ "development": { ... }, "production": { ... } }`.
pub fn load_profile_file(path: &Path, environment: &str) -> Result<DataAccessConfig, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    let mut profiles: HashMap<String, DataAccessConfig> =
        serde_json::from_str(&text).map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    profiles
        .remove(environment)
        .ok_or_else(|| ConfigError::Load(format!("{}: no profile '{}'", path.display(), environment)))
}

/// Overlay values from the environment. `lookup` is usually `std::env::var(..).ok()`.
pub fn apply_env_overrides<F>(config: &mut DataAccessConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL") {
        config.connection.url = Some(url);
    }
    if let Some(host) = lookup("DB_HOST") {
        config.connection.host = host;
    }
    if let Some(port) = lookup("DB_PORT") {
        config.connection.port = port
            .parse()
            .map_err(|_| ConfigError::Load(format!("DB_PORT: invalid port '{}'", port)))?;
    }
    if let Some(user) = lookup("DB_USER") {
        config.connection.user = user;
    }
    if let Some(password) = lookup("DB_PASSWORD") {
        config.connection.password = password;
    }
    if let Some(name) = lookup("DB_NAME") {
        config.connection.database = name;
    }
    if let Some(schema) = lookup("DB_SCHEMA") {
        config.tables.schema = schema;
    }
    if let Some(max) = lookup("DB_MAX_CONNECTIONS") {
        config.max_connections = max
            .parse()
            .map_err(|_| ConfigError::Load(format!("DB_MAX_CONNECTIONS: invalid value '{}'", max)))?;
    }
    Ok(())
}

/// Profile file (if any) or defaults, then env overrides, then validation.
pub fn load(environment: &str, path: Option<&Path>) -> Result<DataAccessConfig, ConfigError> {
    let mut config = match path {
        Some(p) => load_profile_file(p, environment)?,
        None => DataAccessConfig::default(),
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate(&config)?;
    Ok(config)
}

fn column(name: &str, field: &str, pg_type: &str) -> ColumnInfo {
    ColumnInfo {
        name: name.to_string(),
        field: field.to_string(),
        pg_type: pg_type.to_string(),
    }
}

/// Build resolved table descriptions from config (validates first).
pub fn resolve(config: &DataAccessConfig) -> Result<ResolvedModel, ConfigError> {
    validate(config)?;
    let naming = &config.tables;

    let users = ResolvedTable {
        schema_name: naming.schema.clone(),
        table_name: naming.users_table.clone(),
        pk_column: "id".into(),
        columns: vec![
            column("id", "id", "int8"),
            column("username", "username", "text"),
            column("created_at", "created_at", "timestamptz"),
            column("updated_at", "updated_at", "timestamptz"),
            column(&naming.soft_delete_column, "deleted_at", "timestamptz"),
        ],
        soft_delete_column: Some(naming.soft_delete_column.clone()),
    };

    let projects = ResolvedTable {
        schema_name: naming.schema.clone(),
        table_name: naming.projects_table.clone(),
        pk_column: "id".into(),
        columns: vec![
            column("id", "id", "int8"),
            column("title", "title", "text"),
            column("user_id", "user_id", "int8"),
            column("created_at", "created_at", "timestamptz"),
            column("updated_at", "updated_at", "timestamptz"),
        ],
        soft_delete_column: None,
    };

    Ok(ResolvedModel { users, projects })
}
