//! `updated_at` trigger DDL, for use from schema setup rather than request handling.

/// Function the per-table triggers execute. Sets `updated_at` to the statement time.
pub const ON_UPDATE_TIMESTAMP_FUNCTION: &str = r#"
CREATE OR REPLACE FUNCTION on_update_timestamp()
RETURNS trigger AS $$
BEGIN
  NEW.updated_at = now();
  RETURN NEW;
END;
$$ language 'plpgsql';
"#;

/// `CREATE TRIGGER <table>_updated_at` for an unqualified table name.
///
/// Names are emitted unquoted, so PostgreSQL folds them to lower case; config
/// validation only admits lower-case identifiers, which keeps this in step with
/// the quoted names used by the table DDL.
pub fn on_update_trigger(table: &str) -> String {
    trigger_sql(table, table)
}

/// Same trigger, with the table qualified by schema.
pub fn on_update_trigger_in(schema: &str, table: &str) -> String {
    trigger_sql(table, &format!("{}.{}", schema, table))
}

/// Name of the trigger created for `table`.
pub fn trigger_name(table: &str) -> String {
    format!("{}_updated_at", table)
}

fn trigger_sql(table: &str, target: &str) -> String {
    format!(
        "\nCREATE TRIGGER {}\nBEFORE UPDATE ON {}\nFOR EACH ROW\nEXECUTE PROCEDURE on_update_timestamp();\n",
        trigger_name(table),
        target
    )
}
