//! Resolved table model: config validated and flattened for query building.

#[derive(Clone, Debug)]
pub struct ColumnInfo {
    /// Column name in the database.
    pub name: String,
    /// Field name the row maps to (select alias).
    pub field: String,
    /// PostgreSQL type used for parameter casts.
    pub pg_type: String,
}

#[derive(Clone, Debug)]
pub struct ResolvedTable {
    pub schema_name: String,
    pub table_name: String,
    pub pk_column: String,
    pub columns: Vec<ColumnInfo>,
    /// Nullable timestamp column marking a row as deleted. None: rows are never soft-deleted.
    pub soft_delete_column: Option<String>,
}

impl ResolvedTable {
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedModel {
    pub users: ResolvedTable,
    pub projects: ResolvedTable,
}
