//! `SQLite` implementation of [`ReviewRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::ReviewRepository;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{PlaceId, ReviewId, UserId};
use hbnb_domain::review::Review;

use crate::codec::{decode_extra, decode_timestamp, decode_total, encode_extra, encode_timestamp};
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Review`].
struct Wrapper(Review);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Review> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let place_id: String = row.try_get("place_id")?;
        let user_id: String = row.try_get("user_id")?;
        let extra: String = row.try_get("extra")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Review {
            id: ReviewId::from(id),
            place_id: PlaceId::from(place_id),
            user_id: UserId::from(user_id),
            text: row.try_get("text")?,
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
            extra: decode_extra(&extra)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO reviews (id, place_id, user_id, text, extra, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM reviews WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM reviews ORDER BY rowid";
const SELECT_BY_PLACE: &str = "SELECT * FROM reviews WHERE place_id = ? ORDER BY rowid";
const UPDATE: &str = "UPDATE reviews SET text = ?, extra = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM reviews WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM reviews";

/// `SQLite`-backed review repository.
#[derive(Clone)]
pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReviewRepository for SqliteReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, HbnbError> {
        sqlx::query(INSERT)
            .bind(review.id.as_str())
            .bind(review.place_id.as_str())
            .bind(review.user_id.as_str())
            .bind(&review.text)
            .bind(encode_extra(&review.extra)?)
            .bind(encode_timestamp(&review.created_at))
            .bind(encode_timestamp(&review.updated_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(review)
    }

    async fn get_by_id(&self, id: &ReviewId) -> Result<Option<Review>, HbnbError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Review>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_place(&self, place_id: &PlaceId) -> Result<Vec<Review>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PLACE)
            .bind(place_id.as_str())
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

    async fn update(&self, review: Review) -> Result<Review, HbnbError> {
        let result = sqlx::query(UPDATE)
            .bind(&review.text)
            .bind(encode_extra(&review.extra)?)
            .bind(encode_timestamp(&review.updated_at))
            .bind(review.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError {
                entity: "Review",
                id: review.id.to_string(),
            }
            .into());
        }

        Ok(review)
    }

    async fn delete(&self, id: &ReviewId) -> Result<(), HbnbError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError {
                entity: "Review",
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
