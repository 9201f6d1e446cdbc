//! `SQLite` implementation of [`PlaceRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::PlaceRepository;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{PlaceId, UserId};
use hbnb_domain::place::Place;

use crate::codec::{
    decode_count, decode_extra, decode_timestamp, decode_total, encode_extra, encode_timestamp,
};
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Place`].
struct Wrapper(Place);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Place> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let user_id: String = row.try_get("user_id")?;
        let extra: String = row.try_get("extra")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Place {
            id: PlaceId::from(id),
            user_id: UserId::from(user_id),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            number_rooms: decode_count(row.try_get("number_rooms")?)?,
            number_bathrooms: decode_count(row.try_get("number_bathrooms")?)?,
            max_guest: decode_count(row.try_get("max_guest")?)?,
            price_by_night: decode_count(row.try_get("price_by_night")?)?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
            extra: decode_extra(&extra)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO places (
        id, user_id, name, description, number_rooms, number_bathrooms, max_guest,
        price_by_night, latitude, longitude, extra, created_at, updated_at
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM places WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM places ORDER BY rowid";

const UPDATE: &str = r"
    UPDATE places
    SET name = ?, description = ?, number_rooms = ?, number_bathrooms = ?, max_guest = ?,
        price_by_night = ?, latitude = ?, longitude = ?, extra = ?, updated_at = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM places WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM places";

/// `SQLite`-backed place repository.
///
/// Deleting a place cascades to its reviews.
#[derive(Clone)]
pub struct SqlitePlaceRepository {
    pool: SqlitePool,
}

impl SqlitePlaceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlaceRepository for SqlitePlaceRepository {
    async fn create(&self, place: Place) -> Result<Place, HbnbError> {
        sqlx::query(INSERT)
            .bind(place.id.as_str())
            .bind(place.user_id.as_str())
            .bind(&place.name)
            .bind(place.description.as_deref())
            .bind(i64::from(place.number_rooms))
            .bind(i64::from(place.number_bathrooms))
            .bind(i64::from(place.max_guest))
            .bind(i64::from(place.price_by_night))
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(encode_extra(&place.extra)?)
            .bind(encode_timestamp(&place.created_at))
            .bind(encode_timestamp(&place.updated_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(place)
    }

    async fn get_by_id(&self, id: &PlaceId) -> Result<Option<Place>, HbnbError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Place>, HbnbError> {
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

    async fn update(&self, place: Place) -> Result<Place, HbnbError> {
        let result = sqlx::query(UPDATE)
            .bind(&place.name)
            .bind(place.description.as_deref())
            .bind(i64::from(place.number_rooms))
            .bind(i64::from(place.number_bathrooms))
            .bind(i64::from(place.max_guest))
            .bind(i64::from(place.price_by_night))
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(encode_extra(&place.extra)?)
            .bind(encode_timestamp(&place.updated_at))
            .bind(place.id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError {
                entity: "Place",
                id: place.id.to_string(),
            }
            .into());
        }

        Ok(place)
    }

    async fn delete(&self, id: &PlaceId) -> Result<(), HbnbError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError {
                entity: "Place",
                id: id.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use crate::user_repo::SqliteUserRepository;
    use hbnb_app::ports::UserRepository;
    use hbnb_domain::user::User;

    async fn setup() -> (SqlitePlaceRepository, SqliteUserRepository, User) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();

        let users = SqliteUserRepository::new(pool.clone());
        let owner = User::builder()
            .email("host@hbnb.io")
            .password("pw")
            .build()
            .unwrap();
        users.create(owner.clone()).await.unwrap();

        (SqlitePlaceRepository::new(pool), users, owner)
    }

    fn test_place(owner: &User) -> Place {
        Place::builder()
            .user_id(owner.id.clone())
            .name("Loft")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_place_when_owner_exists() {
        let (repo, _, owner) = setup().await;
        let mut place = test_place(&owner);
        place.latitude = Some(48.85);
        place.max_guest = 4;

        repo.create(place.clone()).await.unwrap();

        let fetched = repo.get_by_id(&place.id).await.unwrap().unwrap();
        assert_eq!(fetched, place);
    }

    #[tokio::test]
    async fn should_fail_when_owner_does_not_exist() {
        let (repo, _, _) = setup().await;
        let place = Place::builder()
            .user_id(UserId::from("ghost"))
            .name("Nowhere")
            .build()
            .unwrap();

        let result = repo.create(place).await;
        assert!(matches!(result, Err(HbnbError::Storage(_))));
    }

    #[tokio::test]
    async fn should_update_counters() {
        let (repo, _, owner) = setup().await;
        let mut place = test_place(&owner);
        repo.create(place.clone()).await.unwrap();

        place.price_by_night = 99;
        place.description = Some("sunny".to_string());
        repo.update(place.clone()).await.unwrap();

        let fetched = repo.get_by_id(&place.id).await.unwrap().unwrap();
        assert_eq!(fetched.price_by_night, 99);
        assert_eq!(fetched.description.as_deref(), Some("sunny"));
    }

    #[tokio::test]
    async fn should_delete_places_when_owner_deleted() {
        let (repo, users, owner) = setup().await;
        let place = test_place(&owner);
        repo.create(place.clone()).await.unwrap();

        users.delete(&owner.id).await.unwrap();

        assert!(repo.get_by_id(&place.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_count_places() {
        let (repo, _, owner) = setup().await;
        repo.create(test_place(&owner)).await.unwrap();
        repo.create(test_place(&owner)).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_deleted_place() {
        let (repo, _, owner) = setup().await;
        let mut place = test_place(&owner);
        repo.create(place.clone()).await.unwrap();
        repo.delete(&place.id).await.unwrap();

        place.max_guest = 2;
        let result = repo.update(place).await;

        assert!(matches!(result, Err(HbnbError::NotFound(ref e)) if e.entity == "Place"));
    }
}
