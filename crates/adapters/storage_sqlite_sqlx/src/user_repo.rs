//! `SQLite` implementation of [`UserRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::UserRepository;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::UserId;
use hbnb_domain::user::User;

use crate::codec::{decode_extra, decode_timestamp, decode_total, encode_extra, encode_timestamp};
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let extra: String = row.try_get("extra")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(User {
            id: UserId::from(id),
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
            extra: decode_extra(&extra)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO users (id, email, password, first_name, last_name, extra, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM users ORDER BY rowid";

const UPDATE: &str = r"
    UPDATE users
    SET password = ?, first_name = ?, last_name = ?, extra = ?, updated_at = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM users";

/// `SQLite`-backed user repository.
///
/// Deleting a user cascades to the places and reviews that reference them.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: User) -> Result<User, HbnbError> {
        sqlx::query(INSERT)
            .bind(user.id.as_str())
            .bind(&user.email)
            .bind(&user.password)
            .bind(user.first_name.as_deref())
            .bind(user.last_name.as_deref())
            .bind(encode_extra(&user.extra)?)
            .bind(encode_timestamp(&user.created_at))
            .bind(encode_timestamp(&user.updated_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(user)
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, HbnbError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<User>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn count(&self) -> Result<u64, HbnbError> {
        let total: i64 = sqlx::query_scalar(COUNT)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(decode_total(total)?)
    }

    async fn update(&self, user: User) -> Result<User, HbnbError> {
        let result = sqlx::query(UPDATE)
            .bind(&user.password)
            .bind(user.first_name.as_deref())
            .bind(user.last_name.as_deref())
            .bind(encode_extra(&user.extra)?)
            .bind(encode_timestamp(&user.updated_at))
            .bind(user.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError {
                entity: "User",
                id: user.id.to_string(),
            }
            .into());
        }

        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), HbnbError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
