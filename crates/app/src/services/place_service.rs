//! Place service — use-cases for managing places.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::PlaceId;
use hbnb_domain::payload::Payload;
use hbnb_domain::place::Place;

use super::ensure_user_exists;
use crate::ports::{PlaceRepository, UserRepository};

/// Application service for place CRUD operations.
///
/// Holds a user repository to check that a new place's owner exists.
pub struct PlaceService<P, U> {
    repo: P,
    users: U,
}

impl<P: PlaceRepository, U: UserRepository> PlaceService<P, U> {
    /// Create a new service backed by the given repositories.
    pub fn new(repo: P, users: U) -> Self {
        Self { repo, users }
    }

    /// Create a place from a client payload.
    ///
    /// The owner is checked before the remaining fields are decoded, so a
    /// `user_id` naming no user is reported even when other fields are bad.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `user_id` or `name` is missing or
    /// a known field is mistyped, [`HbnbError::NotFound`] if `user_id` names
    /// no user, or a storage error propagated from a repository.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create_place(&self, payload: Payload) -> Result<Place, HbnbError> {
        let owner = Place::owner_of(&payload)?;
        ensure_user_exists(&self.users, owner.as_ref(), &payload).await?;

        let place = Place::from_payload(payload)?;
        self.repo.create(place).await
    }

    /// Look up a place by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no place with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_place(&self, id: &PlaceId) -> Result<Place, HbnbError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Place",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all places.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_places(&self) -> Result<Vec<Place>, HbnbError> {
        self.repo.get_all().await
    }

    /// Count stored places.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_places(&self) -> Result<u64, HbnbError> {
        self.repo.count().await
    }

    /// Merge a client payload into a place already loaded with
    /// [`get_place`](Self::get_place). The owner never
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if a known field is mistyped,
    /// [`HbnbError::NotFound`] if the place was deleted in the meantime, or a
    /// storage error from the repository.
    #[tracing::instrument(skip_all, fields(id = %place.id))]
    pub async fn update_place(
        &self,
        mut place: Place,
        payload: Payload,
    ) -> Result<Place, HbnbError> {
        place.merge(payload)?;
        self.repo.update(place).await
    }

    /// Delete a place by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the place does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_place(&self, id: &PlaceId) -> Result<(), HbnbError> {
        self.repo.delete(id).await
    }
}
