//! `SQLite` implementation of [`StateRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::StateRepository;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::StateId;
use hbnb_domain::state::State;

use crate::codec::{decode_extra, decode_timestamp, decode_total, encode_extra, encode_timestamp};
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`State`].
struct Wrapper(State);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<State> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let extra: String = row.try_get("extra")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(State {
            id: StateId::from(id),
            name,
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
            extra: decode_extra(&extra)?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO states (id, name, extra, created_at, updated_at) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM states WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM states ORDER BY rowid";
const UPDATE: &str = "UPDATE states SET name = ?, extra = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM states WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM states";

/// `SQLite`-backed state repository.
#[derive(Clone)]
pub struct SqliteStateRepository {
    pool: SqlitePool,
}

impl SqliteStateRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StateRepository for SqliteStateRepository {
    async fn create(&self, state: State) -> Result<State, HbnbError> {
        sqlx::query(INSERT)
            .bind(state.id.as_str())
            .bind(&state.name)
            .bind(encode_extra(&state.extra)?)
            .bind(encode_timestamp(&state.created_at))
            .bind(encode_timestamp(&state.updated_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(state)
    }

    async fn get_by_id(&self, id: &StateId) -> Result<Option<State>, HbnbError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<State>, HbnbError> {
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

    async fn update(&self, state: State) -> Result<State, HbnbError> {
        let result = sqlx::query(UPDATE)
            .bind(&state.name)
            .bind(encode_extra(&state.extra)?)
            .bind(encode_timestamp(&state.updated_at))
            .bind(state.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError {
                entity: "State",
                id: state.id.to_string(),
            }
            .into());
        }

        Ok(state)
    }

    async fn delete(&self, id: &StateId) -> Result<(), HbnbError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError {
                entity: "State",
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
