//! User repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/read-all/update/delete over the `users` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Writes do not re-validate fields; callers validate before calling.
//! - `update_user`/`delete_user` report affected rows and never upsert.
//! - Read paths reject invalid persisted ids instead of masking them.

use crate::db::DbError;
use crate::model::user::{UserId, UserRecord};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const USER_SELECT_SQL: &str = "SELECT id, name, email, phone FROM users";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for user persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted user data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for user CRUD operations.
pub trait UserRepository {
    /// Inserts `user` (its `id` is ignored) and returns the assigned id.
    fn create_user(&self, user: &UserRecord) -> RepoResult<UserId>;
    /// Returns every stored user in ascending id order.
    fn list_users(&self) -> RepoResult<Vec<UserRecord>>;
    /// Gets one user by id.
    fn get_user(&self, id: UserId) -> RepoResult<Option<UserRecord>>;
    /// Rewrites name/email/phone of row `user.id`; returns affected rows.
    fn update_user(&self, user: &UserRecord) -> RepoResult<usize>;
    /// Removes the row `id`; returns affected rows.
    fn delete_user(&self, id: UserId) -> RepoResult<usize>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create_user(&self, user: &UserRecord) -> RepoResult<UserId> {
        self.conn.execute(
            "INSERT INTO users (name, email, phone) VALUES (?1, ?2, ?3);",
            params![user.name.as_str(), user.email.as_str(), user.phone.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_users(&self) -> RepoResult<Vec<UserRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();

        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        Ok(users)
    }

    fn get_user(&self, id: UserId) -> RepoResult<Option<UserRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }

    fn update_user(&self, user: &UserRecord) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE users
             SET
                name = ?1,
                email = ?2,
                phone = ?3
             WHERE id = ?4;",
            params![
                user.name.as_str(),
                user.email.as_str(),
                user.phone.as_str(),
                user.id,
            ],
        )?;

        Ok(changed)
    }

    fn delete_user(&self, id: UserId) -> RepoResult<usize> {
        let changed = self.conn.execute("DELETE FROM users WHERE id = ?1;", [id])?;
        Ok(changed)
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<UserRecord> {
    let user = UserRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
    };
    if !user.is_persisted() {
        return Err(RepoError::InvalidData(format!(
            "invalid id value `{}` in users.id",
            user.id
        )));
    }
    Ok(user)
}
