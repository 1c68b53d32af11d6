//! Schema creation for the three catalogue tables.

use rusqlite::params;

use crate::error::{DatabaseResultExt, Result};

const LIST_TABLES_SQL: &str = "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name";
const COUNT_TABLE_SQL: &str = "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1";

impl super::Database {
    /// Creates the `Books`, `Users`, and `Reservations` tables if absent.
    ///
    /// Safe to run on every open: existing tables and rows are left alone.
    /// A pre-existing table with a different shape is not detected.
    pub fn initialize(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }

    /// Names of the user tables present in the store, sorted.
    pub fn table_names(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(LIST_TABLES_SQL)
            .db_context("Failed to prepare query")?;

        let tables = stmt
            .query_map([], |row| row.get(0))
            .db_context("Failed to query tables")?
            .collect::<std::result::Result<Vec<String>, _>>()
            .db_context("Failed to fetch tables")?;

        Ok(tables)
    }

    /// Whether a table with exactly this name exists.
    pub fn has_table(&self, name: &str) -> Result<bool> {
        self.connection
            .query_row(COUNT_TABLE_SQL, params![name], |row| row.get::<_, i64>(0))
            .map(|count| count > 0)
            .db_context("Failed to inspect schema")
    }
}
