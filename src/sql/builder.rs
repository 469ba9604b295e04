//! Builds parameterized SELECT, INSERT, UPDATE and soft-delete statements from a resolved table.

use crate::config::ResolvedTable;

/// Quote identifier for PostgreSQL (safe: only from config).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
fn qualified_table(table: &ResolvedTable) -> String {
    format!("{}.{}", quoted(&table.schema_name), quoted(&table.table_name))
}

/// SQL text plus its parameters. Every parameter is bound as text; the `$n::type`
/// cast in the SQL lets the store do the conversion.
#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<String>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    /// Push a value and return its `$n` placeholder, cast to `pg_type`.
    fn push_param(&mut self, v: &str, pg_type: &str) -> String {
        self.params.push(v.to_string());
        format!("${}::{}", self.params.len(), pg_type)
    }
}

/// SELECT list: each column, aliased to its field name when the two differ.
fn select_column_list(table: &ResolvedTable) -> String {
    table
        .columns
        .iter()
        .map(|c| {
            if c.name == c.field {
                quoted(&c.name)
            } else {
                format!("{} AS {}", quoted(&c.name), quoted(&c.field))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn pk_type(table: &ResolvedTable) -> &str {
    table
        .column(&table.pk_column)
        .map(|c| c.pg_type.as_str())
        .unwrap_or("int8")
}

/// SELECT every row, ORDER BY pk. With `only_active`, rows whose soft-delete column is set are excluded.
pub fn select_list(table: &ResolvedTable, only_active: bool) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_clause = match (&table.soft_delete_column, only_active) {
        (Some(col), true) => format!(" WHERE {} IS NULL", quoted(col)),
        _ => String::new(),
    };
    q.sql = format!(
        "SELECT {} FROM {}{} ORDER BY {}",
        select_column_list(table),
        qualified_table(table),
        where_clause,
        quoted(&table.pk_column)
    );
    q
}

/// INSERT the given (column, value) pairs. Unknown columns and the pk are skipped so the store
/// assigns the id. None when no column is left to insert.
pub fn insert(table: &ResolvedTable, values: &[(&str, &str)]) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (name, val) in values {
        if *name == table.pk_column {
            continue;
        }
        let Some(c) = table.column(name) else { continue };
        placeholders.push(q.push_param(val, &c.pg_type));
        cols.push(quoted(&c.name));
    }
    if cols.is_empty() {
        return None;
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        qualified_table(table),
        cols.join(", "),
        placeholders.join(", ")
    );
    Some(q)
}

/// UPDATE by id: SET only known, non-pk columns. None when nothing is settable.
pub fn update_by_id(table: &ResolvedTable, id: &str, values: &[(&str, &str)]) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (name, val) in values {
        if *name == table.pk_column {
            continue;
        }
        let Some(c) = table.column(name) else { continue };
        let rhs = q.push_param(val, &c.pg_type);
        sets.push(format!("{} = {}", quoted(&c.name), rhs));
    }
    if sets.is_empty() {
        return None;
    }
    let id_ph = q.push_param(id, pk_type(table));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {}",
        qualified_table(table),
        sets.join(", "),
        quoted(&table.pk_column),
        id_ph
    );
    Some(q)
}

/// Soft delete by id: set the soft-delete column to NOW(). None when the table has no such column.
pub fn soft_delete_by_id(table: &ResolvedTable, id: &str) -> Option<QueryBuf> {
    let col = table.soft_delete_column.as_deref()?;
    let mut q = QueryBuf::new();
    let id_ph = q.push_param(id, pk_type(table));
    q.sql = format!(
        "UPDATE {} SET {} = NOW() WHERE {} = {}",
        qualified_table(table),
        quoted(col),
        quoted(&table.pk_column),
        id_ph
    );
    Some(q)
}
