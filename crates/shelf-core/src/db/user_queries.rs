//! Patron rows.

use log::debug;
use rusqlite::params;

use super::utils::get_id;
use crate::{
    error::{DatabaseResultExt, Result},
    models::User,
};

const INSERT_USER_SQL: &str = "INSERT INTO Users (Name, Email) VALUES (?1, ?2)";
const SELECT_USERS_SQL: &str = "SELECT UserID, Name, Email FROM Users ORDER BY UserID";

impl super::Database {
    /// Registers a patron and returns it with its generated id.
    pub fn add_user(&self, name: &str, email: &str) -> Result<User> {
        self.connection
            .execute(INSERT_USER_SQL, params![name, email])
            .db_context("Failed to insert user")?;

        let id = self.connection.last_insert_rowid() as u64;
        debug!("Inserted user {id}");

        Ok(User {
            id,
            name: name.into(),
            email: email.into(),
        })
    }

    /// Lists every patron in id order.
    pub fn list_users(&self) -> Result<Vec<User>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_USERS_SQL)
            .db_context("Failed to prepare query")?;

        let users = stmt
            .query_map([], |row| {
                Ok(User {
                    id: get_id(row, 0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                })
            })
            .db_context("Failed to query users")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch users")?;

        Ok(users)
    }
}
