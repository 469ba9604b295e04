//! Config validation: identifiers that end up in SQL text and required connection values.

use crate::config::DataAccessConfig;
use crate::error::ConfigError;
use regex::Regex;
use std::sync::OnceLock;

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z_][a-z0-9_]{0,62}$").expect("static pattern"))
}

fn check_identifier(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if identifier_re().is_match(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidIdentifier {
            field,
            value: value.to_string(),
        })
    }
}

pub fn validate(config: &DataAccessConfig) -> Result<(), ConfigError> {
    let tables = &config.tables;
    check_identifier("schema", &tables.schema)?;
    check_identifier("users_table", &tables.users_table)?;
    check_identifier("projects_table", &tables.projects_table)?;
    check_identifier("soft_delete_column", &tables.soft_delete_column)?;
    check_identifier("migrations.table_name", &config.migrations.table_name)?;

    if tables.users_table == tables.projects_table {
        return Err(ConfigError::Load(format!(
            "users and projects share table name '{}'",
            tables.users_table
        )));
    }

    if config.connection.url.is_none() {
        if config.connection.host.trim().is_empty() {
            return Err(ConfigError::Missing("connection.host"));
        }
        if config.connection.database.trim().is_empty() {
            return Err(ConfigError::Missing("connection.database"));
        }
    }
    if config.max_connections == 0 {
        return Err(ConfigError::Missing("max_connections"));
    }
    Ok(())
}
